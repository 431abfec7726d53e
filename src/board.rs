//! Board text model: the first nine physical lines of a board file, stripped.

/// Number of lines a normalized board keeps.
pub const BOARD_LINE_LIMIT: usize = 9;

/// Separator written between kept lines. No separator follows the last line.
pub const BOARD_LINE_SEPARATOR: &str = "\n";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardLines(Vec<String>);

impl BoardLines {
    /// Collect at most `BOARD_LINE_LIMIT` lines from `text`, stripping spaces and
    /// line feeds from both ends of each. Lines past the limit are ignored.
    pub fn from_text(text: &str) -> Self {
        let mut lines = Vec::with_capacity(BOARD_LINE_LIMIT);
        for line in physical_lines(text) {
            if lines.len() >= BOARD_LINE_LIMIT { break; }
            lines.push(strip_line(line).to_string());
        }
        BoardLines(lines)
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &str> { self.0.iter().map(|s| s.as_str()) }

    pub fn as_slice(&self) -> &[String] { &self.0 }

    /// File contents for this board: lines joined by `\n`, no trailing newline.
    pub fn render(&self) -> String { self.0.join(BOARD_LINE_SEPARATOR) }
}

/// Strip only spaces and line feeds; tabs and other whitespace stay.
pub fn strip_line(line: &str) -> &str {
    line.trim_matches(|c: char| c == ' ' || c == '\n')
}

/// Full transformation of one board's text.
pub fn normalize_text(text: &str) -> String {
    BoardLines::from_text(text).render()
}

/// Number of physical lines in `text`, counting past the board limit.
pub fn physical_line_count(text: &str) -> usize {
    physical_lines(text).count()
}

/// Iterate lines with universal-newline rules: `\n`, `\r\n` and a lone `\r`
/// each terminate a line. A trailing terminator does not open an empty line.
pub fn physical_lines(text: &str) -> PhysicalLines<'_> {
    PhysicalLines { rest: text }
}

pub struct PhysicalLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for PhysicalLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() { return None; }
        match self.rest.find(|c: char| c == '\n' || c == '\r') {
            Some(i) => {
                let line = &self.rest[..i];
                let term = if self.rest[i..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[i + term..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}
