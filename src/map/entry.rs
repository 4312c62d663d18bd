// Mon Jan 19 2026 - Alex

use crate::map::classify::classify;
use crate::map::lexer::{find_hex_after_text, LineCursor};
use crate::memory::{find_region, Address, MemoryRegion, MemoryType};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

const ALIGN_DIRECTIVE: &str = ". = ALIGN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub address: Address,
    pub symbol: String,
}

impl SymbolEntry {
    pub fn new(address: Address, symbol: impl Into<String>) -> Self {
        Self {
            address,
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for SymbolEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.symbol, self.address)
    }
}

/// One input section placement from the map listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEntry {
    section_full: String,
    section: String,
    address: Address,
    size: u64,
    file: String,
    symbols: Vec<SymbolEntry>,
    memory_region: Option<usize>,
    memory_type: MemoryType,
}

impl MapEntry {
    pub fn section_full(&self) -> &str {
        &self.section_full
    }

    /// Root section, e.g. `.text` for `.text.main`.
    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn symbols(&self) -> &[SymbolEntry] {
        &self.symbols
    }

    /// Index into the region list of the `MapFile` this entry came from.
    pub fn memory_region(&self) -> Option<usize> {
        self.memory_region
    }

    pub fn memory_type(&self) -> MemoryType {
        self.memory_type
    }
}

impl fmt::Display for MapEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} 0x{:x} {} [{}]",
            self.section_full, self.address, self.size, self.file, self.memory_type
        )
    }
}

/// `.text.foo` -> `.text`, `.ARM.exidx` -> `.ARM`, `.data` -> `.data`.
pub fn root_section(section_full: &str) -> String {
    if !section_full.contains('.') {
        return section_full.to_string();
    }
    section_full.split('.').take(2).collect::<Vec<_>>().join(".")
}

/// Symbol text is a run of `0x<addr> <name>` pairs. Pairs whose address is
/// not valid hex are skipped.
pub fn parse_symbols(text: &str) -> Vec<SymbolEntry> {
    text.split("0x")
        .skip(1)
        .filter_map(|fragment| {
            let digits = fragment
                .split(char::is_whitespace)
                .next()
                .unwrap_or_default();
            let address = Address::from_hex(&format!("0x{}", digits))?;

            Some(SymbolEntry::new(address, fragment[digits.len()..].trim()))
        })
        .collect()
}

/// Splits the trailing part of an entry line into the object file and the
/// optional symbol listing that follows it.
pub fn split_file_and_symbols(rest: &str) -> (&str, &str) {
    match find_hex_after_text(rest) {
        Some(split) => (rest[..split].trim(), rest[split..].trim()),
        None => (rest.trim(), ""),
    }
}

/// Parses one logical line. Returns `None` for lines that are not section
/// placements and for alignment directives.
pub fn parse_entry(line: &str, regions: &[MemoryRegion]) -> Option<MapEntry> {
    let mut cursor = LineCursor::new(line);

    let section_full = cursor.take_token()?;
    if !section_full.starts_with('.') {
        return None;
    }

    let address = Address::from_hex(cursor.take_token()?)?;
    let size = Address::from_hex(cursor.take_token()?)?.as_u64();

    if cursor.skip_ws() == 0 {
        return None;
    }

    let (file, symbol_text) = split_file_and_symbols(cursor.rest());
    if file.contains(ALIGN_DIRECTIVE) || symbol_text.contains(ALIGN_DIRECTIVE) {
        return None;
    }

    let section = root_section(section_full);
    let memory_region = find_region(regions, address);
    if memory_region.is_none() && !regions.is_empty() {
        trace!("no memory region contains {} ({})", address, section_full);
    }
    let memory_type = classify(&section, memory_region.map(|i| &regions[i]));

    Some(MapEntry {
        section_full: section_full.to_string(),
        section,
        address,
        size,
        file: file.to_string(),
        symbols: parse_symbols(symbol_text),
        memory_region,
        memory_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flash() -> Vec<MemoryRegion> {
        vec![MemoryRegion::new(
            "FLASH".to_string(),
            Address::new(0x0800_0000),
            0x80000,
            "xr".to_string(),
        )]
    }

    #[test]
    fn test_root_section() {
        assert_eq!(root_section(".data.init"), ".data");
        assert_eq!(root_section(".text"), ".text");
        assert_eq!(root_section(".ARM.exidx"), ".ARM");
        assert_eq!(root_section(".bss.main"), ".bss");
        assert_eq!(root_section("COMMON"), "COMMON");
    }

    #[test]
    fn test_parse_symbols() {
        let symbols = parse_symbols("0x08000100 foo 0x08000140 bar");
        assert_eq!(
            symbols,
            vec![
                SymbolEntry::new(Address::new(0x0800_0100), "foo"),
                SymbolEntry::new(Address::new(0x0800_0140), "bar"),
            ]
        );
    }

    #[test]
    fn test_parse_symbols_skips_bad_addresses() {
        let symbols = parse_symbols("0xZZ bad 0x10 good");
        assert_eq!(symbols, vec![SymbolEntry::new(Address::new(0x10), "good")]);
        assert!(parse_symbols("").is_empty());
    }

    #[test]
    fn test_split_file_and_symbols() {
        assert_eq!(
            split_file_and_symbols("startup.o 0x08000000 Reset_Handler"),
            ("startup.o", "0x08000000 Reset_Handler")
        );
        assert_eq!(split_file_and_symbols(" main.o "), ("main.o", ""));
        assert_eq!(
            split_file_and_symbols("/opt/gcc/lib/libc.a(lib_a-memcpy.o)  0x0800 memcpy"),
            ("/opt/gcc/lib/libc.a(lib_a-memcpy.o)", "0x0800 memcpy")
        );
    }

    #[test]
    fn test_parse_entry_resolves_flash() {
        let entry = parse_entry(".text.main 0x08000100 0x40 main.o", &flash()).unwrap();
        assert_eq!(entry.section_full(), ".text.main");
        assert_eq!(entry.section(), ".text");
        assert_eq!(entry.address(), Address::new(0x0800_0100));
        assert_eq!(entry.size(), 0x40);
        assert_eq!(entry.file(), "main.o");
        assert!(entry.symbols().is_empty());
        assert_eq!(entry.memory_region(), Some(0));
        assert_eq!(entry.memory_type(), MemoryType::Flash);
    }

    #[test]
    fn test_parse_entry_with_symbols() {
        let line = ".text.Reset_Handler 0x08000000 0x50 startup.o 0x08000000 Reset_Handler 0x08000020 Default_Handler";
        let entry = parse_entry(line, &flash()).unwrap();
        assert_eq!(entry.file(), "startup.o");
        assert_eq!(entry.symbols().len(), 2);
        assert_eq!(entry.symbols()[1].symbol, "Default_Handler");
        assert_eq!(entry.symbols()[1].address, Address::new(0x0800_0020));
    }

    #[test]
    fn test_parse_entry_outside_regions() {
        let entry = parse_entry(".bss 0x20000000 0x100 main.o", &flash()).unwrap();
        assert_eq!(entry.memory_region(), None);
        assert_eq!(entry.memory_type(), MemoryType::Unknown);
    }

    #[test]
    fn test_parse_entry_debug_section() {
        let entry = parse_entry(".debug_info 0x08000000 0x1234 main.o", &flash()).unwrap();
        assert_eq!(entry.memory_region(), Some(0));
        assert_eq!(entry.memory_type(), MemoryType::Debug);
    }

    #[test]
    fn test_parse_entry_rejects_align() {
        assert!(parse_entry(".text 0x08000040 0x0 . = ALIGN (0x4)", &flash()).is_none());
        assert!(parse_entry(
            ".text.x 0x08000040 0x8 a.o 0x08000048 . = ALIGN (0x8)",
            &flash()
        )
        .is_none());
    }

    #[test]
    fn test_parse_entry_rejects_non_entries() {
        let regions = flash();
        assert!(parse_entry("Linker script and memory map", &regions).is_none());
        assert!(parse_entry(".text 0x08000000 0x1c4", &regions).is_none());
        assert!(parse_entry("text 0x08000000 0x10 a.o", &regions).is_none());
        assert!(parse_entry(".text 08000000 0x10 a.o", &regions).is_none());
        assert!(parse_entry(".text 0x08000000 size a.o", &regions).is_none());
        assert!(parse_entry("", &regions).is_none());
    }

    #[test]
    fn test_parse_entry_wide_addresses() {
        let entry = parse_entry(".data 0xffffffff80001000 0x10 k.o", &[]).unwrap();
        assert_eq!(entry.address().as_u64(), 0xffff_ffff_8000_1000);
    }
}
