// Tue Jan 13 2026 - Alex

pub mod address;
pub mod memory_type;
pub mod protection;
pub mod region;

pub use address::Address;
pub use memory_type::MemoryType;
pub use protection::Protection;
pub use region::MemoryRegion;

/// First region, in table order, whose range contains `addr`.
pub fn find_region(regions: &[MemoryRegion], addr: Address) -> Option<usize> {
    regions.iter().position(|region| region.contains(addr))
}
