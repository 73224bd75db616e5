//! Core facet types for STL mesh ingestion.
//!
//! This crate provides the value types that every ingestion path produces:
//!
//! - [`Vertex3`] - A single-precision `x, y, z` triple
//! - [`Facet`] - An immutable triangle (normal + three vertices)
//! - [`MeshStore`] - The ordered collection that owns loaded facets
//! - [`VertexComponents`] - Positional access for host-supplied triples
//!
//! # Units
//!
//! This library is **unit-agnostic**. Coordinates are `f32`, matching the
//! precision of the STL format.
//!
//! # Example
//!
//! ```
//! use facet_types::{Facet, MeshStore, Vertex3};
//!
//! let mut store = MeshStore::new();
//! store.append(Facet::new(
//!     Vertex3::new(0.0, 0.0, 1.0),
//!     Vertex3::new(0.0, 0.0, 0.0),
//!     Vertex3::new(1.0, 0.0, 0.0),
//!     Vertex3::new(0.0, 1.0, 0.0),
//! ));
//!
//! assert_eq!(store.facets().len(), 1);
//! assert!(!store.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod facet;
mod store;
mod traits;
mod vertex;

pub use facet::Facet;
pub use store::MeshStore;
pub use traits::VertexComponents;
pub use vertex::Vertex3;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
