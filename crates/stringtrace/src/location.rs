//! Source locations and their display form

use crate::tracker::StringTracker;
use serde::{Deserialize, Serialize};
use std::fmt;
use stringtrace_pool::Span;

/// The location of a character in a source file.
///
/// Every part may be unknown: text added without an anchor has no file and
/// no position, and text synthesized at runtime may have a known column
/// but no line, or vice versa. `file` refers to the interned file-name
/// buffer inside the tracker that issued it; use
/// [`display`](SourceLocation::display) to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Span of the interned file name, if known.
    pub file: Option<Span>,
    /// 1-based line number, if known.
    pub line: Option<u32>,
    /// 1-based column number, if known.
    pub column: Option<u32>,
}

impl SourceLocation {
    pub const UNKNOWN: SourceLocation = SourceLocation {
        file: None,
        line: None,
        column: None,
    };

    /// The anchor for the first character of a file.
    pub fn file_start(file: Span) -> Self {
        SourceLocation {
            file: Some(file),
            line: Some(1),
            column: Some(1),
        }
    }

    /// Advance this location over `skipped`, the bytes between the anchor
    /// and the position of interest.
    ///
    /// Each newline in `skipped` advances the line (when known) and resets
    /// the column to the distance from the last newline to the end of the
    /// skipped bytes. With no newline, only the column advances. Columns
    /// count bytes, so `skipped` may end mid-character.
    pub(crate) fn advance(mut self, skipped: &[u8]) -> Self {
        match memchr::memrchr(b'\n', skipped) {
            Some(last) => {
                let newlines = memchr::memchr_iter(b'\n', skipped).count() as u32;
                if let Some(line) = &mut self.line {
                    *line += newlines;
                }
                self.column = Some((skipped.len() - last) as u32);
            }
            None => {
                if let Some(column) = &mut self.column {
                    *column += skipped.len() as u32;
                }
            }
        }
        self
    }

    /// Render this location against the tracker that produced it.
    ///
    /// Unknown parts print as `?`: `file:3:7`, `file:3`, `file:?:7`, or a
    /// bare `?` when nothing is known.
    pub fn display<'a>(&'a self, tracker: &'a StringTracker) -> DisplayLocation<'a> {
        DisplayLocation {
            location: self,
            tracker,
        }
    }
}

/// Displayable form of a [`SourceLocation`], borrowing the tracker for the
/// file name text.
pub struct DisplayLocation<'a> {
    location: &'a SourceLocation,
    tracker: &'a StringTracker,
}

impl fmt::Display for DisplayLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self
            .location
            .file
            .and_then(|span| self.tracker.text(span))
            .unwrap_or("?");
        match (self.location.line, self.location.column) {
            (Some(line), Some(column)) => write!(f, "{file}:{line}:{column}"),
            (Some(line), None) => write!(f, "{file}:{line}"),
            (None, Some(column)) => write!(f, "{file}:?:{column}"),
            (None, None) => f.write_str(file),
        }
    }
}
