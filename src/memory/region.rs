// Tue Jan 13 2026 - Alex

use crate::memory::{Address, MemoryType, Protection};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named address range from the linker's `Memory Configuration` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRegion {
    name: String,
    origin: Address,
    length: u64,
    attributes: String,
    memory_type: MemoryType,
}

impl MemoryRegion {
    pub fn new(name: String, origin: Address, length: u64, attributes: String) -> Self {
        let memory_type = MemoryType::from_attributes(&attributes);
        Self {
            name,
            origin,
            length,
            attributes,
            memory_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn origin(&self) -> Address {
        self.origin
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn attributes(&self) -> &str {
        &self.attributes
    }

    pub fn memory_type(&self) -> MemoryType {
        self.memory_type
    }

    pub fn protection(&self) -> Protection {
        Protection::from_attributes(&self.attributes)
    }

    /// One past the last byte, `None` when the region reaches the top of
    /// the 64-bit address space.
    pub fn end(&self) -> Option<Address> {
        self.origin.checked_add(self.length)
    }

    pub fn contains(&self, addr: Address) -> bool {
        addr.is_within(self.origin, self.length)
    }
}

impl fmt::Display for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} 0x{:x} {} {}",
            self.name, self.origin, self.length, self.protection(), self.memory_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flash() -> MemoryRegion {
        MemoryRegion::new("FLASH".to_string(), Address::new(0x0800_0000), 0x80000, "xr".to_string())
    }

    #[test]
    fn test_memory_type_derived_from_attributes() {
        assert_eq!(flash().memory_type(), MemoryType::Flash);
        let ram = MemoryRegion::new("RAM".to_string(), Address::new(0x2000_0000), 0x5000, "xrw".to_string());
        assert_eq!(ram.memory_type(), MemoryType::Ram);
        assert!(ram.protection().can_write());
    }

    #[test]
    fn test_contains() {
        let region = flash();
        assert!(region.contains(Address::new(0x0800_0000)));
        assert!(region.contains(Address::new(0x0807_ffff)));
        assert!(!region.contains(Address::new(0x0808_0000)));
        assert!(!region.contains(Address::new(0x07ff_ffff)));
    }

    #[test]
    fn test_end() {
        assert_eq!(flash().end(), Some(Address::new(0x0808_0000)));
        let top = MemoryRegion::new("TOP".to_string(), Address::new(u64::MAX), 2, "r".to_string());
        assert_eq!(top.end(), None);
        assert!(top.contains(Address::new(u64::MAX)));
    }
}
