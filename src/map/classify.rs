// Mon Jan 19 2026 - Alex

use crate::memory::{MemoryRegion, MemoryType};

/// Debug sections win over whatever region they were placed in.
pub fn classify(section: &str, region: Option<&MemoryRegion>) -> MemoryType {
    if section.to_ascii_lowercase().contains("debug") {
        return MemoryType::Debug;
    }

    region.map_or(MemoryType::Unknown, MemoryRegion::memory_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::Address;

    fn region(attrs: &str) -> MemoryRegion {
        MemoryRegion::new("R".to_string(), Address::zero(), 0x1000, attrs.to_string())
    }

    #[test]
    fn test_debug_overrides_region() {
        assert_eq!(classify(".debug_info", Some(&region("xr"))), MemoryType::Debug);
        assert_eq!(classify(".DEBUG", Some(&region("rw"))), MemoryType::Debug);
        assert_eq!(classify(".zdebug", None), MemoryType::Debug);
    }

    #[test]
    fn test_region_type_used() {
        assert_eq!(classify(".text", Some(&region("xr"))), MemoryType::Flash);
        assert_eq!(classify(".bss", Some(&region("rw"))), MemoryType::Ram);
        assert_eq!(classify(".rodata", Some(&region("r"))), MemoryType::Rom);
    }

    #[test]
    fn test_no_region_is_unknown() {
        assert_eq!(classify(".text", None), MemoryType::Unknown);
    }
}
