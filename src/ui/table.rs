// Tue Jan 13 2026 - Alex

use crate::map::{MapEntry, MapFile};
use crate::output::formatter::{format_hex, format_size};
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    None,
    Ascii,
    Unicode,
}

pub struct TableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
    alignment: Vec<Alignment>,
    use_color: bool,
    border_style: BorderStyle,
    max_cell_width: Option<usize>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            column_widths: Vec::new(),
            alignment: Vec::new(),
            use_color: true,
            border_style: BorderStyle::Unicode,
            max_cell_width: None,
        }
    }

    pub fn with_headers(mut self, headers: &[&str]) -> Self {
        self.headers = headers.iter().map(|s| s.to_string()).collect();
        self.column_widths = self.headers.iter().map(|h| h.chars().count()).collect();
        self.alignment = vec![Alignment::Left; self.headers.len()];
        self
    }

    pub fn add_row(mut self, row: Vec<String>) -> Self {
        for (i, cell) in row.iter().enumerate() {
            let width = cell.chars().count();
            match self.column_widths.get_mut(i) {
                Some(w) => *w = (*w).max(width),
                None => self.column_widths.push(width),
            }
        }
        self.rows.push(row);
        self
    }

    pub fn with_alignment(mut self, column: usize, alignment: Alignment) -> Self {
        if let Some(a) = self.alignment.get_mut(column) {
            *a = alignment;
        }
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    pub fn with_max_cell_width(mut self, width: usize) -> Self {
        self.max_cell_width = Some(width);
        self
    }

    pub fn build(&self) -> String {
        if self.headers.is_empty() && self.rows.is_empty() {
            return String::new();
        }

        let widths: Vec<usize> = match self.max_cell_width {
            Some(max) => self.column_widths.iter().map(|&w| w.min(max)).collect(),
            None => self.column_widths.clone(),
        };

        let mut output = Vec::new();

        if let Some(line) = self.horizontal_line(&widths, '┌', '┬', '┐') {
            output.push(line);
        }
        if !self.headers.is_empty() {
            output.push(self.build_row(&self.headers, &widths, true));
            if let Some(line) = self.horizontal_line(&widths, '├', '┼', '┤') {
                output.push(line);
            }
        }
        for row in &self.rows {
            output.push(self.build_row(row, &widths, false));
        }
        if let Some(line) = self.horizontal_line(&widths, '└', '┴', '┘') {
            output.push(line);
        }

        output.join("\n")
    }

    fn vertical(&self) -> Option<char> {
        match self.border_style {
            BorderStyle::None => None,
            BorderStyle::Ascii => Some('|'),
            BorderStyle::Unicode => Some('│'),
        }
    }

    fn horizontal_line(&self, widths: &[usize], left: char, middle: char, right: char) -> Option<String> {
        let (left, middle, right, fill) = match self.border_style {
            BorderStyle::None => return None,
            BorderStyle::Ascii => ('+', '+', '+', '-'),
            BorderStyle::Unicode => (left, middle, right, '─'),
        };

        let segments: Vec<String> = widths
            .iter()
            .map(|&w| fill.to_string().repeat(w + 2))
            .collect();
        Some(format!("{}{}{}", left, segments.join(&middle.to_string()), right))
    }

    fn build_row(&self, cells: &[String], widths: &[usize], is_header: bool) -> String {
        let vertical = self.vertical();
        let mut line = String::new();

        if let Some(v) = vertical {
            line.push(v);
        }

        for (i, cell) in cells.iter().enumerate() {
            let width = widths.get(i).copied().unwrap_or_else(|| cell.chars().count());
            let alignment = self.alignment.get(i).copied().unwrap_or(Alignment::Left);
            let text = truncate(cell, width);

            let aligned = match alignment {
                Alignment::Left => format!("{:<width$}", text, width = width),
                Alignment::Right => format!("{:>width$}", text, width = width),
            };

            let formatted = if is_header && self.use_color {
                aligned.cyan().bold().to_string()
            } else {
                aligned
            };

            line.push(' ');
            line.push_str(&formatted);
            line.push(' ');
            if let Some(v) = vertical {
                line.push(v);
            }
        }

        line
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate(content: &str, max_width: usize) -> String {
    let count = content.chars().count();
    if count <= max_width {
        content.to_string()
    } else if max_width >= 3 {
        let kept: String = content.chars().take(max_width - 3).collect();
        format!("{}...", kept)
    } else {
        content.chars().take(max_width).collect()
    }
}

pub fn regions_table(map: &MapFile, use_color: bool) -> String {
    let mut table = TableBuilder::new()
        .with_headers(&["Name", "Origin", "Length", "Size", "Attributes", "Type"])
        .with_alignment(2, Alignment::Right)
        .with_alignment(3, Alignment::Right)
        .with_color(use_color);

    for region in map.regions() {
        table = table.add_row(vec![
            region.name().to_string(),
            format_hex(region.origin().as_u64(), 8),
            format_hex(region.length(), 8),
            format_size(region.length()),
            format!("{} ({})", region.attributes(), region.protection()),
            region.memory_type().to_string(),
        ]);
    }

    table.build()
}

pub fn entries_table(map: &MapFile, entries: &[&MapEntry], use_color: bool) -> String {
    let mut table = TableBuilder::new()
        .with_headers(&["Section", "Address", "Size", "File", "Symbols", "Region", "Type"])
        .with_alignment(2, Alignment::Right)
        .with_alignment(4, Alignment::Right)
        .with_max_cell_width(48)
        .with_color(use_color);

    for entry in entries {
        table = table.add_row(vec![
            entry.section_full().to_string(),
            format_hex(entry.address().as_u64(), 8),
            format_size(entry.size()),
            entry.file().to_string(),
            entry.symbols().len().to_string(),
            map.region_of(entry).map_or("-", |r| r.name()).to_string(),
            entry.memory_type().to_string(),
        ]);
    }

    table.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{parse, tests::SAMPLE_MAP};

    #[test]
    fn test_ascii_table() {
        let table = TableBuilder::new()
            .with_headers(&["a", "bb"])
            .add_row(vec!["ccc".to_string(), "d".to_string()])
            .with_alignment(1, Alignment::Right)
            .with_border_style(BorderStyle::Ascii)
            .with_color(false)
            .build();

        assert_eq!(
            table,
            "+-----+----+\n| a   | bb |\n+-----+----+\n| ccc |  d |\n+-----+----+"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 5), "ab...");
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_regions_table() {
        let map = parse(SAMPLE_MAP);
        let table = regions_table(&map, false);
        assert!(table.contains("FLASH"));
        assert!(table.contains("0x00080000"));
        assert!(table.contains("xrw (rwx)"));
    }

    #[test]
    fn test_entries_table() {
        let map = parse(SAMPLE_MAP);
        let entries: Vec<&MapEntry> = map.entries().iter().collect();
        let table = entries_table(&map, &entries, false);
        assert_eq!(table.lines().count(), entries.len() + 4);
        assert!(table.contains(".text.Reset_Handler"));
        assert!(table.contains("DEBUG"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(TableBuilder::new().build(), "");
    }
}
