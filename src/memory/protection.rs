// Tue Jan 13 2026 - Alex

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Permission letters of a `Memory Configuration` row.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Protection: u8 {
        const READ = 0b001;
        const WRITE = 0b010;
        const EXECUTE = 0b100;
    }
}

impl Protection {
    /// Decodes GNU ld attribute letters. Unknown letters are ignored and a
    /// `!` negates every letter that follows it.
    pub fn from_attributes(attributes: &str) -> Self {
        let mut flags = Self::empty();
        let mut negated = false;

        for c in attributes.chars() {
            let flag = match c.to_ascii_lowercase() {
                '!' => {
                    negated = true;
                    continue;
                }
                'r' => Self::READ,
                'w' => Self::WRITE,
                'x' => Self::EXECUTE,
                _ => continue,
            };

            if !negated {
                flags |= flag;
            }
        }

        flags
    }

    pub fn can_read(self) -> bool {
        self.contains(Self::READ)
    }

    pub fn can_write(self) -> bool {
        self.contains(Self::WRITE)
    }

    pub fn can_execute(self) -> bool {
        self.contains(Self::EXECUTE)
    }
}

impl fmt::Display for Protection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            if self.can_read() { 'r' } else { '-' },
            if self.can_write() { 'w' } else { '-' },
            if self.can_execute() { 'x' } else { '-' },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attributes() {
        assert_eq!(Protection::from_attributes("xr"), Protection::READ | Protection::EXECUTE);
        assert_eq!(Protection::from_attributes("RW"), Protection::READ | Protection::WRITE);
        assert_eq!(Protection::from_attributes("rw!x"), Protection::READ | Protection::WRITE);
        assert_eq!(Protection::from_attributes("zz"), Protection::empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Protection::from_attributes("xr").to_string(), "r-x");
        assert_eq!(Protection::from_attributes("xrw").to_string(), "rwx");
        assert_eq!(Protection::empty().to_string(), "---");
    }
}
