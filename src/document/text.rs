//! Byte offset <-> LSP position conversion.
//!
//! Every analysis works on byte offsets into the document text. The editor
//! speaks in lines and UTF-16 columns, so all conversions go through here.

use std::ops::Range;

use tower_lsp::lsp_types::Position;

/// Number of UTF-16 code units needed to encode `text`.
pub fn utf16_len(text: &str) -> u32 {
    text.chars().map(|c| c.len_utf16() as u32).sum()
}

/// Line start table for a document.
///
/// Lookups are a binary search over line starts followed by a scan of the
/// single line that contains the offset.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the first character of every line.
    line_starts: Vec<usize>,
    source: String,
}

impl LineIndex {
    pub fn new(source: String) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            line_starts,
            source,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Zero-based line containing `offset`. Offsets past the end map to the
    /// last line.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }

    /// Byte range of `line`, excluding its terminating newline.
    pub fn line_span(&self, line: usize) -> Option<Range<usize>> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map(|&next| next - 1)
            .unwrap_or(self.source.len());
        Some(start..end)
    }

    /// Text of the line containing `offset`, up to (not including) `offset`.
    pub fn line_prefix(&self, offset: usize) -> &str {
        let offset = offset.min(self.source.len());
        let start = self.line_starts[self.line_of(offset)];
        self.source.get(start..offset).unwrap_or("")
    }

    pub fn offset_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let line = self.line_of(offset);
        let start = self.line_starts[line];
        let col = self
            .source
            .get(start..offset)
            .map(utf16_len)
            .unwrap_or_default();

        Position::new(line as u32, col)
    }

    /// Convert an LSP position to a byte offset.
    ///
    /// Returns `None` when the line does not exist. Columns past the end of
    /// the line clamp to the line end.
    pub fn position_to_offset(&self, position: Position) -> Option<usize> {
        let span = self.line_span(position.line as usize)?;

        let mut col = 0u32;
        for (i, c) in self.source[span.clone()].char_indices() {
            if col >= position.character {
                return Some(span.start + i);
            }
            col += c.len_utf16() as u32;
        }

        Some(span.end)
    }

    pub fn span_to_range(&self, span: &Range<usize>) -> tower_lsp::lsp_types::Range {
        tower_lsp::lsp_types::Range::new(
            self.offset_to_position(span.start),
            self.offset_to_position(span.end),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line() {
        let idx = LineIndex::new("@{concat('a')}".to_string());
        assert_eq!(idx.offset_to_position(0), Position::new(0, 0));
        assert_eq!(idx.offset_to_position(2), Position::new(0, 2));
        assert_eq!(idx.offset_to_position(14), Position::new(0, 14));
    }

    #[test]
    fn multi_line() {
        let idx = LineIndex::new("hello\nworld\ntest".to_string());
        assert_eq!(idx.offset_to_position(5), Position::new(0, 5));
        assert_eq!(idx.offset_to_position(6), Position::new(1, 0));
        assert_eq!(idx.offset_to_position(11), Position::new(1, 5));
        assert_eq!(idx.offset_to_position(12), Position::new(2, 0));
    }

    #[test]
    fn position_round_trip() {
        let idx = LineIndex::new("hello\nworld".to_string());
        assert_eq!(idx.position_to_offset(Position::new(0, 5)), Some(5));
        assert_eq!(idx.position_to_offset(Position::new(1, 0)), Some(6));
        assert_eq!(idx.position_to_offset(Position::new(1, 5)), Some(11));
    }

    #[test]
    fn utf16_columns() {
        // U+1F600 takes four bytes and two UTF-16 code units.
        let idx = LineIndex::new("a\u{1F600}b".to_string());
        assert_eq!(idx.offset_to_position(1), Position::new(0, 1));
        assert_eq!(idx.offset_to_position(5), Position::new(0, 3));
        assert_eq!(idx.position_to_offset(Position::new(0, 3)), Some(5));
        assert_eq!(utf16_len("a\u{1F600}b"), 4);
    }

    #[test]
    fn out_of_bounds() {
        let idx = LineIndex::new("hello".to_string());
        assert_eq!(idx.position_to_offset(Position::new(5, 0)), None);
        assert_eq!(idx.position_to_offset(Position::new(0, 99)), Some(5));
        assert_eq!(idx.offset_to_position(99), Position::new(0, 5));
    }

    #[test]
    fn line_spans_and_prefixes() {
        let idx = LineIndex::new("ab\n@{con".to_string());
        assert_eq!(idx.line_span(0), Some(0..2));
        assert_eq!(idx.line_span(1), Some(3..8));
        assert_eq!(idx.line_span(2), None);
        assert_eq!(idx.line_prefix(8), "@{con");
        assert_eq!(idx.line_prefix(3), "");
    }

    #[test]
    fn span_to_range() {
        let idx = LineIndex::new("hello\nworld".to_string());
        let range = idx.span_to_range(&(6..11));
        assert_eq!(range.start, Position::new(1, 0));
        assert_eq!(range.end, Position::new(1, 5));
    }
}
