// Tue Jan 13 2026 - Alex

use crate::map::{MapEntry, MapFile};
use crate::memory::MemoryType;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Section,
    Address,
    Size,
    File,
    MemoryType,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "section" => Ok(Self::Section),
            "address" | "addr" => Ok(Self::Address),
            "size" => Ok(Self::Size),
            "file" => Ok(Self::File),
            "type" | "memory_type" => Ok(Self::MemoryType),
            _ => Err(format!("unknown sort key: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Filters and orders the entries of a parsed map. Empty filter lists match
/// everything; sorting is stable.
#[derive(Debug, Clone, Default)]
pub struct EntryQuery {
    sections: Vec<String>,
    memory_types: Vec<MemoryType>,
    sort: Option<(SortKey, SortOrder)>,
    limit: Option<usize>,
}

impl EntryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections = sections.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_memory_types<I: IntoIterator<Item = MemoryType>>(mut self, types: I) -> Self {
        self.memory_types = types.into_iter().collect();
        self
    }

    pub fn sort_by(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort = Some((key, order));
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, entry: &MapEntry) -> bool {
        (self.sections.is_empty() || self.sections.iter().any(|s| s == entry.section()))
            && (self.memory_types.is_empty() || self.memory_types.contains(&entry.memory_type()))
    }

    pub fn run<'a>(&self, map: &'a MapFile) -> Vec<&'a MapEntry> {
        let mut entries: Vec<&MapEntry> = map.entries().iter().filter(|e| self.matches(e)).collect();

        if let Some((key, order)) = self.sort {
            entries.sort_by(|a, b| {
                let ordering = compare(a, b, key);
                match order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });
        }

        if let Some(limit) = self.limit {
            entries.truncate(limit);
        }

        entries
    }
}

fn compare(a: &MapEntry, b: &MapEntry, key: SortKey) -> Ordering {
    match key {
        SortKey::Section => a.section_full().cmp(b.section_full()),
        SortKey::Address => a.address().cmp(&b.address()),
        SortKey::Size => a.size().cmp(&b.size()),
        SortKey::File => a.file().cmp(b.file()),
        SortKey::MemoryType => a.memory_type().as_str().cmp(b.memory_type().as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{parse, tests::SAMPLE_MAP};

    fn names(entries: &[&MapEntry]) -> Vec<String> {
        entries.iter().map(|e| e.section_full().to_string()).collect()
    }

    #[test]
    fn test_no_filters_returns_all_in_order() {
        let map = parse(SAMPLE_MAP);
        let entries = EntryQuery::new().run(&map);
        assert_eq!(entries.len(), map.entries().len());
        assert_eq!(entries[0].section_full(), ".isr_vector");
    }

    #[test]
    fn test_filter_by_section_and_type() {
        let map = parse(SAMPLE_MAP);
        let data = EntryQuery::new().with_sections([".data"]).run(&map);
        assert_eq!(names(&data), vec![".data", ".data.counter", ".data"]);

        let flash_text = EntryQuery::new()
            .with_sections([".text", ".bss"])
            .with_memory_types([MemoryType::Flash])
            .run(&map);
        assert_eq!(flash_text.len(), 3);
    }

    #[test]
    fn test_sort_by_size_descending_with_limit() {
        let map = parse(SAMPLE_MAP);
        let entries = EntryQuery::new()
            .with_memory_types([MemoryType::Ram])
            .sort_by(SortKey::Size, SortOrder::Descending)
            .with_limit(2)
            .run(&map);
        assert_eq!(names(&entries), vec![".bss.buffer", ".data"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let map = parse(SAMPLE_MAP);
        let entries = EntryQuery::new()
            .with_memory_types([MemoryType::Ram])
            .sort_by(SortKey::Size, SortOrder::Ascending)
            .run(&map);
        let files: Vec<&str> = entries.iter().map(|e| e.file()).collect();
        assert_eq!(files, vec!["main.o", "util.o", "load address", "main.o"]);
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("Size".parse::<SortKey>(), Ok(SortKey::Size));
        assert_eq!("type".parse::<SortKey>(), Ok(SortKey::MemoryType));
        assert!("weight".parse::<SortKey>().is_err());
    }
}
