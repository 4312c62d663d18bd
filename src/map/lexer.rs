// Mon Jan 19 2026 - Alex

/// Forward-only cursor over a single logical line. Tokens are runs of
/// non-whitespace characters.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// Skips whitespace and returns how many bytes were consumed.
    pub fn skip_ws(&mut self) -> usize {
        let start = self.pos;
        let skipped = self.line[self.pos..]
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(self.line.len() - self.pos);
        self.pos += skipped;
        self.pos - start
    }

    pub fn take_token(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let remaining = &self.line[self.pos..];
        if remaining.is_empty() {
            return None;
        }

        let len = remaining.find(char::is_whitespace).unwrap_or(remaining.len());
        self.pos += len;
        Some(&remaining[..len])
    }

    /// Everything after the cursor, untouched.
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }
}

/// Byte offset of the first `<ws>0x<hexdigit>` that follows at least one
/// non-whitespace character. The offset points at the whitespace.
pub fn find_hex_after_text(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut seen_text = false;
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_whitespace() {
            seen_text = true;
            i += 1;
            continue;
        }

        let ws_start = i;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        if seen_text && starts_with_hex_literal(&bytes[i..]) {
            return Some(ws_start);
        }
    }

    None
}

fn starts_with_hex_literal(bytes: &[u8]) -> bool {
    bytes.len() >= 3 && bytes[0] == b'0' && bytes[1] == b'x' && bytes[2].is_ascii_hexdigit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_token() {
        let mut cursor = LineCursor::new("  .text   0x0800  tail end ");
        assert_eq!(cursor.take_token(), Some(".text"));
        assert_eq!(cursor.take_token(), Some("0x0800"));
        assert_eq!(cursor.rest(), "  tail end ");
        assert_eq!(cursor.take_token(), Some("tail"));
        assert_eq!(cursor.take_token(), Some("end"));
        assert_eq!(cursor.take_token(), None);
        assert_eq!(cursor.rest(), "");
    }

    #[test]
    fn test_skip_ws_counts() {
        let mut cursor = LineCursor::new("abc \t def");
        assert_eq!(cursor.skip_ws(), 0);
        cursor.take_token();
        assert_eq!(cursor.skip_ws(), 3);
        assert_eq!(cursor.rest(), "def");
    }

    #[test]
    fn test_find_hex_after_text() {
        assert_eq!(find_hex_after_text("main.o 0x08000100 foo"), Some(6));
        assert_eq!(find_hex_after_text("main.o"), None);
        assert_eq!(find_hex_after_text("0x08000100 foo"), None);
        assert_eq!(find_hex_after_text("lib.a(x.o)   0xz 0x1f"), Some(16));
        assert_eq!(find_hex_after_text("a 0x"), None);
    }
}
