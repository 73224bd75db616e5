//! Error types for facet I/O operations.

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for facet I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while loading or saving facets.
///
/// Every variant except [`IoError::MalformedFacet`] aborts the load that
/// raised it. Facets appended to the caller's store before the failure are
/// kept, so a caller can decide whether a partial result is usable.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// ASCII stream ended without an `endsolid` line.
    #[error("ASCII STL ended without endsolid after {facets} facets and {vertices} vertices")]
    UnterminatedSolid {
        /// Facets stored before the stream ended.
        facets: usize,
        /// Vertex lines seen before the stream ended.
        vertices: usize,
    },

    /// A token that had to be a float was not.
    #[error("invalid number {token:?} on line {line}: {source}")]
    NumericParse {
        /// 1-based line number in the ASCII stream.
        line: usize,
        /// The offending token.
        token: String,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError,
    },

    /// ASCII facet block closed with a vertex count other than three.
    ///
    /// Never returned from a load; it is logged and recorded in the
    /// load summary while parsing continues.
    #[error("facet ending on line {line} has {vertices} vertices, expected 3")]
    MalformedFacet {
        /// 1-based line number of the `endfacet` line.
        line: usize,
        /// Number of vertex lines in the block.
        vertices: usize,
    },

    /// No facets were declared or supplied.
    #[error("mesh contains no facets")]
    EmptyMesh,

    /// Binary stream ended before the declared triangle count was read.
    #[error("binary STL truncated: declared {expected} triangles, read {got}")]
    TruncatedStream {
        /// Declared triangle count.
        expected: u32,
        /// Complete records read.
        got: u32,
    },

    /// Binary stream too short to hold the header and triangle count.
    #[error("invalid STL header: expected {expected} bytes, got {got}")]
    InvalidHeader {
        /// Expected header size.
        expected: usize,
        /// Actual bytes available.
        got: usize,
    },

    /// Store holds more facets than a binary STL count can describe.
    #[error("cannot encode {count} facets in binary STL (limit is u32::MAX)")]
    TooManyFacets {
        /// Number of facets in the store.
        count: usize,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Whether this error ends the load that produced it.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::MalformedFacet { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_facet_is_the_only_recoverable_error() {
        assert!(!IoError::MalformedFacet { line: 3, vertices: 2 }.is_fatal());
        assert!(IoError::EmptyMesh.is_fatal());
        assert!(IoError::TruncatedStream { expected: 2, got: 1 }.is_fatal());
    }

    #[test]
    fn messages_carry_context() {
        let err = IoError::UnterminatedSolid {
            facets: 4,
            vertices: 12,
        };
        assert!(err.to_string().contains("4 facets"));

        let source = "abc".parse::<f32>().unwrap_err();
        let err = IoError::NumericParse {
            line: 7,
            token: "abc".to_string(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("\"abc\""));
    }
}
