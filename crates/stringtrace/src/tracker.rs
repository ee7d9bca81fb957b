//! The provenance tracker

use crate::builder::StringBuilder;
use crate::error::{Result, TrackerError};
use crate::location::SourceLocation;
use crate::origin::{SourceMap, SourceOrigin};
use std::collections::HashMap;
use stringtrace_pool::{Span, StringPool};

/// Owns tracked text buffers and resolves any span into them back to a
/// concrete source location.
///
/// Text enters the tracker three ways: a direct add (with or without a
/// location anchor), a whole-file load, or a [`StringBuilder`] finalize.
/// Built buffers carry a piecewise origin map instead of a location;
/// [`locate`](StringTracker::locate) walks those maps recursively until it
/// bottoms out at a direct location.
///
/// The tracker is single-threaded and performs no internal
/// synchronization; callers needing concurrent access must lock
/// externally or keep one tracker per thread.
#[derive(Debug, Default)]
pub struct StringTracker {
    pub(crate) pool: StringPool<SourceOrigin>,
    file_names: HashMap<String, Span>,
}

/// A fully resolved position: the location, plus the root span the
/// resolution bottomed out at (when it bottomed out in tracked text).
///
/// The root span lets callers quote the original fragment via
/// [`StringTracker::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub location: SourceLocation,
    pub source: Option<Span>,
}

impl StringTracker {
    pub fn new() -> Self {
        StringTracker::default()
    }

    /// Track `text` with no location anchor.
    pub fn add(&mut self, text: impl Into<String>) -> Span {
        self.add_at(text.into(), SourceLocation::UNKNOWN)
    }

    /// Track `text` anchored at `location`.
    pub fn add_at(&mut self, text: impl Into<String>, location: SourceLocation) -> Span {
        self.pool.put(text.into(), SourceOrigin::Location(location))
    }

    /// Track `text` as derived verbatim from `source`, e.g. a copy of
    /// already-tracked text. Locations inside it resolve through `source`.
    pub fn add_derived(&mut self, text: impl Into<String>, source: Span) -> Span {
        let mut map = SourceMap::default();
        map.push(0, Some(source));
        self.pool.put(text.into(), SourceOrigin::Map(map))
    }

    /// Read the named file in full and track its contents, anchored at
    /// line 1, column 1 of that file.
    ///
    /// The file name itself is interned at most once per distinct name;
    /// repeated loads of the same name share one name buffer. A failed
    /// read is reported as [`TrackerError::Io`] and tracks nothing.
    pub fn add_file(&mut self, path: &str) -> Result<Span> {
        let contents = std::fs::read_to_string(path).map_err(|source| TrackerError::Io {
            path: path.to_string(),
            source,
        })?;
        tracing::debug!(path, bytes = contents.len(), "loaded source file");
        let name = self.intern_file_name(path);
        Ok(self
            .pool
            .put(contents, SourceOrigin::Location(SourceLocation::file_start(name))))
    }

    fn intern_file_name(&mut self, path: &str) -> Span {
        if let Some(&span) = self.file_names.get(path) {
            return span;
        }
        let span = self.pool.put(path.to_owned(), SourceOrigin::default());
        self.file_names.insert(path.to_owned(), span);
        span
    }

    /// The text a span denotes, or `None` if the span is not tracked here,
    /// overruns its buffer, or does not start and end on character
    /// boundaries. Use [`bytes`](StringTracker::bytes) for spans that cut
    /// into a multi-byte character.
    pub fn text(&self, span: Span) -> Option<&str> {
        let owner = self.pool.get(span)?;
        owner.text.get(owner.offset..owner.offset + span.len())
    }

    /// The bytes a span denotes, regardless of character boundaries, or
    /// `None` if the span is not tracked here or overruns its buffer.
    pub fn bytes(&self, span: Span) -> Option<&[u8]> {
        let owner = self.pool.get(span)?;
        owner
            .text
            .as_bytes()
            .get(owner.offset..owner.offset + span.len())
    }

    /// Whether `span` points into a buffer owned by this tracker.
    pub fn is_tracked(&self, span: Span) -> bool {
        self.pool.get(span).is_some()
    }

    /// Resolve `span` to the source location of its first character.
    pub fn locate(&self, span: Span) -> Result<SourceLocation> {
        Ok(self.resolve(span)?.location)
    }

    /// Like [`locate`](StringTracker::locate), but also reports the root
    /// span the position bottomed out at.
    ///
    /// Resolution walks each built buffer's origin map: the segment whose
    /// offset range covers the position names the span it derives from,
    /// and resolution recurses on that span. Positions inside a segment
    /// report the segment start's location. At a direct-location buffer,
    /// the anchor is advanced over the skipped prefix by counting
    /// newlines.
    pub fn resolve(&self, span: Span) -> Result<Resolved> {
        let owner = self.pool.get(span).ok_or(TrackerError::Untracked)?;
        match owner.meta {
            SourceOrigin::Location(location) => Ok(Resolved {
                // Spans are byte-addressed, so the prefix may end inside a
                // multi-byte character; advance works on bytes.
                location: location.advance(&owner.text.as_bytes()[..owner.offset]),
                source: Some(span),
            }),
            SourceOrigin::Map(map) => match map.segment_at(owner.offset).source {
                Some(parent) => self.resolve(parent),
                None => Ok(Resolved {
                    location: SourceLocation::UNKNOWN,
                    source: None,
                }),
            },
        }
    }

    /// Remove the buffer containing `span` from the tracker, transferring
    /// its text and origin to the caller. Spans into it stop resolving.
    pub fn take(&mut self, span: Span) -> Option<(String, SourceOrigin)> {
        self.pool.take(span)
    }

    /// Start assembling a new tracked buffer out of fragments.
    pub fn builder(&mut self) -> StringBuilder<'_> {
        StringBuilder::new(self)
    }
}
