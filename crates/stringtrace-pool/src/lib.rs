//! Address-ordered string storage
//!
//! This crate provides [`StringPool`], an owning store for immutable text
//! buffers tagged with caller-chosen metadata, and [`Span`], a lightweight
//! non-owning reference into a pooled buffer. Each buffer is assigned a
//! range in a virtual address space when it enters the pool, so any span,
//! including one sliced out of another span, can always be mapped back to
//! its owning buffer with a floor search over the base addresses.
//!
//! # Example
//!
//! ```rust
//! use stringtrace_pool::StringPool;
//!
//! let mut pool: StringPool<&str> = StringPool::new();
//! let span = pool.put("hello world".into(), "greeting");
//!
//! let word = span.slice(6..11);
//! let owner = pool.get(word).unwrap();
//! assert_eq!(owner.meta, &"greeting");
//! assert_eq!(owner.offset, 6);
//! assert_eq!(&owner.text[owner.offset..], "world");
//! ```

pub mod pool;
pub mod span;

pub use pool::{Owner, StringPool};
pub use span::Span;
