//! Whole-document JSON persistence.
//!
//! This crate keeps one JSON document on disk and hands it back as a typed
//! value. Every write replaces the complete document, so readers always see
//! either the previous or the next version, never a partial one.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Opening a document path, creating its parent directory when missing
//! - Reading the document into any `serde` type
//! - Initialising a missing document with the type's default value
//! - Atomic, pretty-printed writes using a temp file and rename
//!
//! # Example
//!
//! ```
//! use json_document::JsonDocument;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! struct Counters {
//!     hits: u32,
//! }
//!
//! let dir = tempfile::tempdir().expect("temp dir");
//! let document = JsonDocument::open(&dir.path().join("data").join("counters.json"))
//!     .expect("open document");
//!
//! let initial: Counters = document.read_or_init().expect("initialise");
//! assert_eq!(initial, Counters::default());
//!
//! document.write(&Counters { hits: 3 }).expect("write");
//! let reloaded: Option<Counters> = document.read().expect("read");
//! assert_eq!(reloaded, Some(Counters { hits: 3 }));
//! ```

mod atomic_io;
mod document;
mod error;

pub use document::JsonDocument;
pub use error::DocumentError;
