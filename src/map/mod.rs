// Mon Jan 19 2026 - Alex

pub mod classify;
pub mod entry;
pub mod error;
pub mod lexer;
pub mod preprocess;
pub mod regions;

pub use classify::classify;
pub use entry::{parse_entry, root_section, MapEntry, SymbolEntry};
pub use error::ParseError;
pub use preprocess::{preprocess, Preprocessed};
pub use regions::build_regions;

use crate::memory::MemoryRegion;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything extracted from one map file. Entries refer to regions by
/// index into `regions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapFile {
    regions: Vec<MemoryRegion>,
    entries: Vec<MapEntry>,
}

impl MapFile {
    pub fn regions(&self) -> &[MemoryRegion] {
        &self.regions
    }

    pub fn entries(&self) -> &[MapEntry] {
        &self.entries
    }

    pub fn region_of(&self, entry: &MapEntry) -> Option<&MemoryRegion> {
        entry.memory_region().and_then(|index| self.regions.get(index))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn parse(text: &str) -> MapFile {
    let Preprocessed { lines, region_rows } = preprocess::preprocess_text(text);
    let regions = build_regions(&region_rows);

    let entries: Vec<MapEntry> = lines
        .iter()
        .filter_map(|line| parse_entry(line, &regions))
        .collect();

    debug!(
        "kept {} of {} logical lines as entries",
        entries.len(),
        lines.len()
    );

    MapFile { regions, entries }
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<MapFile, ParseError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| ParseError::read(path, e))?;

    let map = parse(&text);
    if map.is_empty() {
        warn!("no section entries found in {}", path.display());
    }
    info!(
        "{}: {} regions, {} entries",
        path.display(),
        map.regions.len(),
        map.entries.len()
    );
    Ok(map)
}

/// Parses independent files in parallel. Results keep the input order.
pub fn parse_files<P>(paths: &[P]) -> Vec<(PathBuf, Result<MapFile, ParseError>)>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| (path.as_ref().to_path_buf(), parse_file(path)))
        .collect()
}
