// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address {
    value: u64,
}

impl Address {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }

    pub fn as_u64(&self) -> u64 {
        self.value
    }

    /// Parses a `0x`-prefixed hexadecimal literal. Anything else, including
    /// values wider than 64 bits, is rejected.
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))?;

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        u64::from_str_radix(digits, 16).ok().map(Self::new)
    }

    pub fn checked_add(&self, rhs: u64) -> Option<Self> {
        self.value.checked_add(rhs).map(Self::new)
    }

    /// Half-open containment, `start <= self < start + len`, evaluated
    /// without overflowing at the top of the address space.
    pub fn is_within(&self, start: Self, len: u64) -> bool {
        self.value >= start.value && self.value - start.value < len
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.value)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

impl fmt::UpperHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.value, f)
    }
}

impl From<u64> for Address {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Address> for u64 {
    fn from(addr: Address) -> Self {
        addr.value
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.value)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Address::from_hex("0x08000100"), Some(Address::new(0x0800_0100)));
        assert_eq!(Address::from_hex("0XFF"), Some(Address::new(0xff)));
        assert_eq!(Address::from_hex("0xffffffffffffffff"), Some(Address::new(u64::MAX)));
        assert_eq!(Address::from_hex("08000100"), None);
        assert_eq!(Address::from_hex("0x"), None);
        assert_eq!(Address::from_hex("0x12g4"), None);
        assert_eq!(Address::from_hex("0x+12"), None);
    }

    #[test]
    fn test_from_hex_rejects_overflow() {
        assert_eq!(Address::from_hex("0x10000000000000000"), None);
    }

    #[test]
    fn test_large_values_are_exact() {
        let addr = Address::from_hex("0x20000000001fffff").unwrap();
        assert_eq!(addr.as_u64(), 0x2000_0000_001f_ffff);
    }

    #[test]
    fn test_is_within() {
        let base = Address::new(0x1000);
        assert!(Address::new(0x1000).is_within(base, 0x10));
        assert!(Address::new(0x100f).is_within(base, 0x10));
        assert!(!Address::new(0x1010).is_within(base, 0x10));
        assert!(!Address::new(0x0fff).is_within(base, 0x10));
        assert!(Address::new(u64::MAX).is_within(Address::new(u64::MAX - 1), 0x10));
    }

    #[test]
    fn test_display() {
        assert_eq!(Address::new(0x100).to_string(), "0x00000100");
        assert_eq!(Address::new(0x1_0000_0000).to_string(), "0x100000000");
    }
}
