//! Provenance tracking for sliced and recombined text
//!
//! This crate lets tools (lexers, parsers, text transformers) slice, copy,
//! and recombine text freely while keeping the ability to report the
//! original source location (file, line, column) any given piece of text
//! ultimately came from, through however many layers of recombination.
//!
//! The core types are:
//! - [`StringTracker`]: owns the text buffers and resolves locations
//! - [`Span`]: a lightweight non-owning reference into tracked text
//! - [`StringBuilder`]: assembles a new tracked buffer out of fragments,
//!   recording per-fragment provenance
//! - [`SourceLocation`]: a file/line/column triple, each possibly unknown
//!
//! # Example
//!
//! ```rust
//! use stringtrace::{SourceLocation, StringTracker};
//!
//! let mut tracker = StringTracker::new();
//! let text = tracker.add_at(
//!     "hello\nworld",
//!     SourceLocation { file: None, line: Some(1), column: Some(1) },
//! );
//!
//! // Slice out "world" and ask where it came from.
//! let world = text.slice(6..11);
//! let loc = tracker.locate(world).unwrap();
//! assert_eq!(loc.line, Some(2));
//! assert_eq!(loc.column, Some(1));
//!
//! // Recombine pieces; provenance survives the recombination.
//! let mut builder = tracker.builder();
//! builder.push_str("<<");
//! builder.push_span(world).unwrap();
//! builder.push_str(">>");
//! let combined = builder.build();
//!
//! let loc = tracker.locate(combined.slice(2..7)).unwrap();
//! assert_eq!((loc.line, loc.column), (Some(2), Some(1)));
//! ```

pub mod builder;
pub mod error;
pub mod location;
pub mod origin;
pub mod tracker;

pub use builder::StringBuilder;
pub use error::{Result, TrackerError};
pub use location::{DisplayLocation, SourceLocation};
pub use origin::{Segment, SourceMap, SourceOrigin};
pub use stringtrace_pool::{Span, StringPool};
pub use tracker::{Resolved, StringTracker};
