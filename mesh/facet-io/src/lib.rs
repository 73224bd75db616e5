//! Facet ingestion from STL files and in-memory facet lists.
//!
//! This crate fills a [`MeshStore`](facet_types::MeshStore) from:
//!
//! - **ASCII STL** - line-oriented text, lenient about malformed blocks
//! - **Binary STL** - 80-byte header, `u32` count, 50-byte records
//! - **Structured lists** - `[[normal, v0, v1, v2], ...]` supplied by a host
//!
//! and writes a store back out as binary or ASCII STL.
//!
//! Every load takes the store it appends to explicitly. Loads never share
//! state, and facets decoded before a failure stay in the caller's store.
//!
//! # Example
//!
//! ```no_run
//! use facet_io::{load_stl, save_stl};
//! use facet_types::MeshStore;
//!
//! // Load a mesh
//! let mut store = MeshStore::new();
//! let summary = load_stl("model.stl", &mut store).unwrap();
//! println!("{summary}");
//!
//! // Save it back
//! save_stl(&store, "output.stl", true).unwrap();
//! ```
//!
//! # Format Detection
//!
//! The first line decides: if it contains `solid` the stream is ASCII,
//! otherwise binary. [`LoadParams`] can force a format, or for path loads
//! let a matching binary file size win over a `solid` header.
//!
//! # Logging
//!
//! Progress and skipped facets are reported through `tracing`. The crate
//! never installs a subscriber.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod ascii;
mod binary;
mod error;
mod params;
mod result;
mod sniff;
mod stl;
mod structured;

pub use ascii::{read_stl_ascii, write_stl_ascii};
pub use binary::{read_stl_binary, write_stl_binary, COUNT_SIZE, HEADER_SIZE, TRIANGLE_SIZE};
pub use error::{IoError, IoResult};
pub use params::{LoadParams, DEFAULT_MAX_PREALLOCATED_FACETS};
pub use result::{LoadSummary, SkippedFacet, SourceFormat};
pub use sniff::{classify_first_line, sniff_format, Sniffed, StlFormat, ASCII_MARKER};
pub use stl::{load_stl, load_stl_with, read_stl, save_stl};
pub use structured::{load_structured, FACET_RECORD_LEN};
