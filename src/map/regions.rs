// Mon Jan 19 2026 - Alex

use crate::map::lexer::LineCursor;
use crate::memory::{Address, MemoryRegion};
use log::{debug, trace};

/// Parses one `<name> <0xorigin> <0xlength> <attributes>` row.
pub fn parse_region_row(row: &str) -> Option<MemoryRegion> {
    let mut cursor = LineCursor::new(row);

    let name = cursor.take_token()?;
    let origin = Address::from_hex(cursor.take_token()?)?;
    let length = Address::from_hex(cursor.take_token()?)?.as_u64();
    let attributes = cursor.take_token()?;

    if cursor.take_token().is_some() {
        return None;
    }

    Some(MemoryRegion::new(
        name.to_string(),
        origin,
        length,
        attributes.to_string(),
    ))
}

pub fn build_regions<S: AsRef<str>>(rows: &[S]) -> Vec<MemoryRegion> {
    let regions: Vec<MemoryRegion> = rows
        .iter()
        .filter_map(|row| {
            let row = row.as_ref();
            let region = parse_region_row(row);
            if region.is_none() {
                trace!("dropping memory table row: {}", row);
            }
            region
        })
        .collect();

    debug!("built {} memory regions from {} rows", regions.len(), rows.len());
    regions
}
