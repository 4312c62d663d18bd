// Tue Jan 13 2026 - Alex

use crate::map::{MapEntry, MapFile};
use crate::memory::MemoryRegion;
use crate::output::error::OutputError;
use crate::output::stats::{DeviceUsage, MapStatistics};
use serde_json::{json, to_string, to_string_pretty, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct JsonSerializer {
    pretty_print: bool,
    include_symbols: bool,
    include_statistics: bool,
    top_entries: usize,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self {
            pretty_print: true,
            include_symbols: true,
            include_statistics: false,
            top_entries: 10,
        }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_symbols(mut self, include: bool) -> Self {
        self.include_symbols = include;
        self
    }

    pub fn with_statistics(mut self, include: bool) -> Self {
        self.include_statistics = include;
        self
    }

    pub fn with_top_entries(mut self, count: usize) -> Self {
        self.top_entries = count;
        self
    }

    pub fn serialize(&self, map: &MapFile, usage: Option<&DeviceUsage>) -> Result<String, OutputError> {
        let value = self.build_json_value(map, usage)?;

        if self.pretty_print {
            Ok(to_string_pretty(&value)?)
        } else {
            Ok(to_string(&value)?)
        }
    }

    pub fn serialize_to_file<P: AsRef<Path>>(
        &self,
        map: &MapFile,
        usage: Option<&DeviceUsage>,
        path: P,
    ) -> Result<(), OutputError> {
        let json_str = self.serialize(map, usage)?;

        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json_str.as_bytes())?;
        writer.flush()?;

        Ok(())
    }

    fn build_json_value(&self, map: &MapFile, usage: Option<&DeviceUsage>) -> Result<Value, OutputError> {
        let mut root = serde_json::Map::new();

        root.insert(
            "regions".to_string(),
            Value::Array(map.regions().iter().map(region_value).collect()),
        );
        root.insert(
            "entries".to_string(),
            Value::Array(
                map.entries()
                    .iter()
                    .map(|e| self.entry_value(map, e))
                    .collect(),
            ),
        );

        if self.include_statistics {
            let stats = MapStatistics::collect(map, self.top_entries);
            root.insert("statistics".to_string(), serde_json::to_value(&stats)?);
        }

        if let Some(usage) = usage {
            root.insert("usage".to_string(), serde_json::to_value(usage)?);
        }

        Ok(Value::Object(root))
    }

    fn entry_value(&self, map: &MapFile, entry: &MapEntry) -> Value {
        let mut value = json!({
            "section_full": entry.section_full(),
            "section": entry.section(),
            "address": entry.address().as_u64(),
            "size": entry.size(),
            "file": entry.file(),
            "memory_region": map.region_of(entry).map(MemoryRegion::name),
            "memory_type": entry.memory_type(),
        });

        if self.include_symbols {
            value["symbols"] = Value::Array(
                entry
                    .symbols()
                    .iter()
                    .map(|s| json!({ "address": s.address.as_u64(), "symbol": s.symbol }))
                    .collect(),
            );
        }

        value
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

fn region_value(region: &MemoryRegion) -> Value {
    json!({
        "name": region.name(),
        "origin": region.origin().as_u64(),
        "length": region.length(),
        "attributes": region.attributes(),
        "memory_type": region.memory_type(),
    })
}
