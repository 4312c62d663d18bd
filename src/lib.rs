// Tue Jan 15 2026 - Alex

pub mod config;
pub mod map;
pub mod memory;
pub mod output;
pub mod ui;

pub use config::{Config, DeviceProfile, DeviceProfiles};
pub use map::{parse, parse_file, parse_files, MapEntry, MapFile, ParseError, SymbolEntry};
pub use memory::{Address, MemoryRegion, MemoryType};
pub use output::{DeviceUsage, EntryQuery, JsonSerializer, MapStatistics, ReportGenerator};
