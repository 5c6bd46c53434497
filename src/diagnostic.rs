use crate::error::ParseError;
use std::fmt;

/// Line number and offset within that line for a byte position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

/// A parse failure paired with the text it refers to, for human-readable output
///
/// The error position must be a byte offset into `source`, which is what the
/// tokenizer and the text-level expression entry points report.
#[derive(Debug, Clone, Copy)]
pub struct Diagnostic<'a> {
    source: &'a str,
    error: &'a ParseError,
}

impl<'a> Diagnostic<'a> {
    pub fn new(source: &'a str, error: &'a ParseError) -> Self {
        Self { source, error }
    }

    /// Calculate line number and byte offset within that line
    ///
    /// Note: We return byte offset instead of column number because column
    /// calculation depends on encoding width, tab stops and rendering, while
    /// the byte offset within the line is unambiguous.
    pub fn readable_position(&self) -> ReadablePosition {
        let loc = self.error.position.min(self.source.len());
        let mut line = 1;
        let mut line_start = 0;

        for (i, byte) in self.source.bytes().enumerate() {
            if i >= loc {
                break;
            }
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            byte_offset: loc - line_start,
        }
    }

    /// Get lines of context around the error position
    /// Returns up to 2 lines before and after the error line
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2).max(1);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        for (index, content) in self.source.split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < first {
                continue;
            }
            if current_line > last {
                break;
            }

            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content.trim_end_matches('\r')));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        writeln!(
            f,
            "{} at line {}, byte offset {} (absolute position: {})",
            self.error.kind, pos.line, pos.byte_offset, self.error.position
        )?;
        writeln!(f)?;
        for line in self.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
