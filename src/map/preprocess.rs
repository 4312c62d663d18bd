// Mon Jan 19 2026 - Alex

use log::trace;

const MEMORY_MARKER: &str = "Memory Configuration";
const HEADER_COLUMNS: [&str; 3] = ["Name", "Origin", "Length"];

/// Output of the lexical pass: merged entry candidates and the raw rows of
/// the memory configuration table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preprocessed {
    pub lines: Vec<String>,
    pub region_rows: Vec<String>,
}

#[derive(Debug, Default)]
struct Preprocessor {
    in_memory_block: bool,
    header_seen: bool,
    current: String,
    output: Preprocessed,
}

impl Preprocessor {
    fn feed(&mut self, line: &str) {
        if line.contains(MEMORY_MARKER) {
            self.in_memory_block = true;
            return;
        }

        if self.in_memory_block {
            self.feed_memory_block(line);
            return;
        }

        let trimmed = line.trim();
        let indented = line.starts_with(char::is_whitespace);

        if indented && !trimmed.starts_with('.') {
            self.append(trimmed);
        } else {
            self.flush();
            self.current.push_str(trimmed);
        }
    }

    fn feed_memory_block(&mut self, line: &str) {
        let trimmed = line.trim();

        if !self.header_seen {
            if HEADER_COLUMNS.iter().all(|column| line.contains(column)) {
                self.header_seen = true;
            }
            return;
        }

        if trimmed.is_empty() {
            trace!("end of memory configuration table");
            self.in_memory_block = false;
            self.header_seen = false;
            return;
        }

        self.output.region_rows.push(trimmed.to_string());
    }

    fn append(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.current.is_empty() {
            self.current.push(' ');
        }
        self.current.push_str(text);
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.output.lines.push(std::mem::take(&mut self.current));
        }
    }

    fn finish(mut self) -> Preprocessed {
        self.flush();
        self.output
    }
}

/// Splits raw map text into logical lines, folding indented continuation
/// lines into the line before them, and pulls out the memory table rows.
pub fn preprocess<'a, I>(raw_lines: I) -> Preprocessed
where
    I: IntoIterator<Item = &'a str>,
{
    let mut preprocessor = Preprocessor::default();
    for line in raw_lines {
        preprocessor.feed(line);
    }
    preprocessor.finish()
}

pub fn preprocess_text(text: &str) -> Preprocessed {
    preprocess(text.lines())
}
