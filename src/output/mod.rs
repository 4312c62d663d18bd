// Tue Jan 13 2026 - Alex

pub mod error;
pub mod formatter;
pub mod json;
pub mod query;
pub mod report;
pub mod stats;

pub use error::OutputError;
pub use formatter::{format_hex, format_percent, format_size, percent_of};
pub use json::JsonSerializer;
pub use query::{EntryQuery, SortKey, SortOrder};
pub use report::{ReportFormat, ReportGenerator};
pub use stats::{CapacityUsage, DeviceUsage, LargestEntry, MapStatistics, SectionShare, SectionTotal};
