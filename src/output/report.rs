// Tue Jan 13 2026 - Alex

use crate::map::MapFile;
use crate::output::formatter::{format_hex, format_percent, format_size};
use crate::output::stats::{CapacityUsage, DeviceUsage, MapStatistics};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Markdown,
}

pub struct ReportGenerator {
    format: ReportFormat,
    include_regions: bool,
    include_sections: bool,
    max_largest: Option<usize>,
}

impl ReportGenerator {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            include_regions: true,
            include_sections: true,
            max_largest: None,
        }
    }

    pub fn with_regions(mut self, include: bool) -> Self {
        self.include_regions = include;
        self
    }

    pub fn with_sections(mut self, include: bool) -> Self {
        self.include_sections = include;
        self
    }

    pub fn with_max_largest(mut self, max: usize) -> Self {
        self.max_largest = Some(max);
        self
    }

    pub fn generate(&self, map: &MapFile, stats: &MapStatistics, usage: Option<&DeviceUsage>) -> String {
        match self.format {
            ReportFormat::Text => self.generate_text(map, stats, usage),
            ReportFormat::Markdown => self.generate_markdown(map, stats, usage),
        }
    }

    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        map: &MapFile,
        stats: &MapStatistics,
        usage: Option<&DeviceUsage>,
        path: P,
    ) -> std::io::Result<()> {
        let report = self.generate(map, stats, usage);
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(report.as_bytes())?;
        writer.flush()
    }

    fn largest_count(&self, stats: &MapStatistics) -> usize {
        self.max_largest.unwrap_or(stats.largest.len()).min(stats.largest.len())
    }

    fn generate_text(&self, map: &MapFile, stats: &MapStatistics, usage: Option<&DeviceUsage>) -> String {
        let mut report = String::new();

        report.push_str(&self.text_header(stats));
        report.push('\n');

        if self.include_regions && !map.regions().is_empty() {
            report.push_str(&self.text_regions(map, stats));
            report.push('\n');
        }

        report.push_str(&self.text_memory_types(stats));
        report.push('\n');

        if self.include_sections && !stats.by_section.is_empty() {
            report.push_str(&self.text_sections(stats));
            report.push('\n');
        }

        if self.largest_count(stats) > 0 {
            report.push_str(&self.text_largest(stats));
            report.push('\n');
        }

        if let Some(usage) = usage {
            report.push_str(&self.text_usage(usage));
        }

        report
    }

    fn text_header(&self, stats: &MapStatistics) -> String {
        let mut header = String::new();
        header.push_str("Linker Map Report\n");
        header.push_str("=================\n\n");
        header.push_str(&format!(
            "Regions: {}  Entries: {}  Symbols: {}\n",
            stats.region_count, stats.entry_count, stats.symbol_count
        ));
        header
    }

    fn text_regions(&self, map: &MapFile, stats: &MapStatistics) -> String {
        let mut text = String::new();
        text.push_str("Memory Regions:\n");
        text.push_str("---------------\n");
        for region in map.regions() {
            let used = stats.by_region.get(region.name()).copied().unwrap_or(0);
            text.push_str(&format!(
                "  {:<12} {} {:>10} {} {:<7} used {}\n",
                region.name(),
                format_hex(region.origin().as_u64(), 8),
                format_size(region.length()),
                region.protection(),
                region.memory_type(),
                format_size(used)
            ));
        }
        text
    }

    fn text_memory_types(&self, stats: &MapStatistics) -> String {
        let mut text = String::new();
        text.push_str("Memory Types:\n");
        text.push_str("-------------\n");
        for (memory_type, size) in &stats.by_memory_type {
            text.push_str(&format!("  {:<8} {:>12}\n", memory_type, format_size(*size)));
        }
        text
    }

    fn text_sections(&self, stats: &MapStatistics) -> String {
        let mut text = String::new();
        text.push_str("Sections:\n");
        text.push_str("---------\n");
        for section in &stats.by_section {
            text.push_str(&format!(
                "  {:<24} {:<8} {:>12} ({} entries)\n",
                section.section,
                section.memory_type,
                format_size(section.size),
                section.entries
            ));
        }
        text
    }

    fn text_largest(&self, stats: &MapStatistics) -> String {
        let mut text = String::new();
        text.push_str("Largest Entries:\n");
        text.push_str("----------------\n");
        for entry in &stats.largest[..self.largest_count(stats)] {
            text.push_str(&format!(
                "  {:<32} {} {:>12} {}\n",
                entry.section_full,
                format_hex(entry.address.as_u64(), 8),
                format_size(entry.size),
                entry.file
            ));
        }
        text
    }

    fn text_usage(&self, usage: &DeviceUsage) -> String {
        let mut text = String::new();
        text.push_str(&format!("Device Usage ({}):\n", usage.device));
        text.push_str("------------------\n");
        for capacity in [&usage.flash, &usage.ram] {
            text.push_str(&text_capacity(capacity));
        }
        text
    }

    fn generate_markdown(&self, map: &MapFile, stats: &MapStatistics, usage: Option<&DeviceUsage>) -> String {
        let mut md = String::new();

        md.push_str("# Linker Map Report\n\n");
        md.push_str(&self.markdown_summary(stats));
        md.push('\n');

        if self.include_regions && !map.regions().is_empty() {
            md.push_str(&self.markdown_regions(map, stats));
            md.push('\n');
        }

        md.push_str(&self.markdown_memory_types(stats));
        md.push('\n');

        if self.include_sections && !stats.by_section.is_empty() {
            md.push_str(&self.markdown_sections(stats));
            md.push('\n');
        }

        if let Some(usage) = usage {
            md.push_str(&self.markdown_usage(usage));
            md.push('\n');
        }

        md
    }

    fn markdown_summary(&self, stats: &MapStatistics) -> String {
        let mut md = String::new();
        md.push_str("## Summary\n\n");
        md.push_str("| Category | Count |\n");
        md.push_str("|----------|-------|\n");
        md.push_str(&format!("| Regions | {} |\n", stats.region_count));
        md.push_str(&format!("| Entries | {} |\n", stats.entry_count));
        md.push_str(&format!("| Symbols | {} |\n", stats.symbol_count));
        md
    }

    fn markdown_regions(&self, map: &MapFile, stats: &MapStatistics) -> String {
        let mut md = String::new();
        md.push_str("## Memory Regions\n\n");
        md.push_str("| Name | Origin | Length | Attributes | Type | Used |\n");
        md.push_str("|------|--------|--------|------------|------|------|\n");
        for region in map.regions() {
            let used = stats.by_region.get(region.name()).copied().unwrap_or(0);
            md.push_str(&format!(
                "| {} | `{}` | {} | {} | {} | {} |\n",
                region.name(),
                format_hex(region.origin().as_u64(), 8),
                format_size(region.length()),
                region.attributes(),
                region.memory_type(),
                format_size(used)
            ));
        }
        md
    }

    fn markdown_memory_types(&self, stats: &MapStatistics) -> String {
        let mut md = String::new();
        md.push_str("## Memory Types\n\n");
        md.push_str("| Type | Size |\n");
        md.push_str("|------|------|\n");
        for (memory_type, size) in &stats.by_memory_type {
            md.push_str(&format!("| {} | {} |\n", memory_type, format_size(*size)));
        }
        md
    }

    fn markdown_sections(&self, stats: &MapStatistics) -> String {
        let mut md = String::new();
        md.push_str("## Sections\n\n");
        md.push_str("| Section | Type | Size | Entries |\n");
        md.push_str("|---------|------|------|---------|\n");
        for section in &stats.by_section {
            md.push_str(&format!(
                "| `{}` | {} | {} | {} |\n",
                section.section,
                section.memory_type,
                format_size(section.size),
                section.entries
            ));
        }
        md
    }

    fn markdown_usage(&self, usage: &DeviceUsage) -> String {
        let mut md = String::new();
        md.push_str(&format!("## Device Usage: {}\n\n", usage.device));
        md.push_str("| Memory | Used | Capacity | Fill |\n");
        md.push_str("|--------|------|----------|------|\n");
        for capacity in [&usage.flash, &usage.ram] {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                capacity.memory_type,
                format_size(capacity.used),
                format_size(capacity.capacity),
                format_percent(capacity.percent)
            ));
        }
        md
    }
}

fn text_capacity(usage: &CapacityUsage) -> String {
    let mut text = format!(
        "  {:<6} {:>12} / {:>12}  {}\n",
        usage.memory_type,
        format_size(usage.used),
        format_size(usage.capacity),
        format_percent(usage.percent)
    );
    for share in &usage.sections {
        text.push_str(&format!(
            "    {:<22} {:>12}  {}\n",
            share.section,
            format_size(share.size),
            format_percent(share.percent)
        ));
    }
    text
}
