// Tue Jan 13 2026 - Alex

use crate::config::DeviceProfile;
use crate::map::{MapEntry, MapFile};
use crate::memory::{Address, MemoryType};
use crate::output::formatter::percent_of;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionTotal {
    pub section: String,
    pub memory_type: MemoryType,
    pub size: u64,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LargestEntry {
    pub section_full: String,
    pub file: String,
    pub address: Address,
    pub size: u64,
    pub memory_type: MemoryType,
}

impl From<&MapEntry> for LargestEntry {
    fn from(entry: &MapEntry) -> Self {
        Self {
            section_full: entry.section_full().to_string(),
            file: entry.file().to_string(),
            address: entry.address(),
            size: entry.size(),
            memory_type: entry.memory_type(),
        }
    }
}

/// Byte totals derived from a parsed map. Map keys keep first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapStatistics {
    pub region_count: usize,
    pub entry_count: usize,
    pub symbol_count: usize,
    pub by_memory_type: IndexMap<MemoryType, u64>,
    pub by_region: IndexMap<String, u64>,
    pub by_section: Vec<SectionTotal>,
    pub largest: Vec<LargestEntry>,
}

impl MapStatistics {
    pub fn collect(map: &MapFile, top: usize) -> Self {
        let mut by_memory_type: IndexMap<MemoryType, u64> = IndexMap::new();
        let mut by_region: IndexMap<String, u64> = IndexMap::new();
        let mut by_section: IndexMap<(MemoryType, &str), SectionTotal> = IndexMap::new();

        for entry in map.entries() {
            let type_total = by_memory_type.entry(entry.memory_type()).or_insert(0);
            *type_total = type_total.saturating_add(entry.size());

            if let Some(region) = map.region_of(entry) {
                let region_total = by_region.entry(region.name().to_string()).or_insert(0);
                *region_total = region_total.saturating_add(entry.size());
            }

            let total = by_section
                .entry((entry.memory_type(), entry.section()))
                .or_insert_with(|| SectionTotal {
                    section: entry.section().to_string(),
                    memory_type: entry.memory_type(),
                    size: 0,
                    entries: 0,
                });
            total.size = total.size.saturating_add(entry.size());
            total.entries += 1;
        }

        let largest = map
            .entries()
            .iter()
            .sorted_by(|a, b| b.size().cmp(&a.size()))
            .take(top)
            .map(LargestEntry::from)
            .collect();

        Self {
            region_count: map.regions().len(),
            entry_count: map.entries().len(),
            symbol_count: map.entries().iter().map(|e| e.symbols().len()).sum(),
            by_memory_type,
            by_region,
            by_section: by_section.into_values().collect(),
            largest,
        }
    }

    pub fn total(&self, memory_type: MemoryType) -> u64 {
        self.by_memory_type.get(&memory_type).copied().unwrap_or(0)
    }

    pub fn sections_of(&self, memory_type: MemoryType) -> impl Iterator<Item = &SectionTotal> {
        self.by_section
            .iter()
            .filter(move |s| s.memory_type == memory_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionShare {
    pub section: String,
    pub size: u64,
    pub percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityUsage {
    pub memory_type: MemoryType,
    pub used: u64,
    pub capacity: u64,
    pub percent: Option<f64>,
    pub sections: Vec<SectionShare>,
}

impl CapacityUsage {
    fn compute(stats: &MapStatistics, memory_type: MemoryType, capacity: u64) -> Self {
        let sections = stats
            .sections_of(memory_type)
            .filter(|s| s.size > 0)
            .map(|s| SectionShare {
                section: s.section.clone(),
                size: s.size,
                percent: percent_of(s.size, capacity),
            })
            .filter(|s| s.percent.map_or(true, |p| p > 0.0))
            .collect();

        let used = stats.total(memory_type);
        Self {
            memory_type,
            used,
            capacity,
            percent: percent_of(used, capacity),
            sections,
        }
    }
}

/// How much of a device's flash and RAM the map occupies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceUsage {
    pub device: String,
    pub flash: CapacityUsage,
    pub ram: CapacityUsage,
}

impl DeviceUsage {
    pub fn compute(stats: &MapStatistics, profile: &DeviceProfile) -> Self {
        Self {
            device: profile.id.clone(),
            flash: CapacityUsage::compute(stats, MemoryType::Flash, profile.flash_bytes),
            ram: CapacityUsage::compute(stats, MemoryType::Ram, profile.ram_bytes),
        }
    }
}
