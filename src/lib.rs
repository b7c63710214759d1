//! Topology queries and editing helpers for polygon meshes with full adjacency.
//!
//! The algorithms are written against the [`MeshGraph`] trait and work on any mesh that
//! exposes vertex / edge / face adjacency; [`BMesh`] is the bundled implementation.
//!
//! - [`neighbors`]: face, vertex and edge neighbor queries, with manifold-only variants
//! - [`flood`]: breadth-first region growing with barriers and iteration caps
//! - [`partition`]: loose parts (islands) of faces, edges or vertices
//! - [`loops`]: edge loop assembly, region boundaries, face loops and parallel loops
//! - [`join`]: merging meshes through a persistent vertex remap table
//! - [`measure`]: centroids and bounds of vertex sets
//!
//! ```
//! use meshtopo::{BMesh, MeshGraph, VertId};
//! use meshtopo::loops::find_face_loop;
//!
//! let strip = BMesh::grid(4, 1, 1.0);
//! let cap = strip.edge_between(VertId(0), VertId(5)).unwrap();
//! let face_loop = find_face_loop(&strip, cap).unwrap();
//! assert_eq!(face_loop.len(), strip.face_count());
//! assert!(!face_loop.closed);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![warn(clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod traits;
pub mod mesh;
pub mod neighbors;
pub mod flood;
pub mod partition;
pub mod loops;
pub mod join;
pub mod measure;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{TopologyError, TopologyResult};
pub use mesh::BMesh;
pub use mesh::element::{EdgeId, Element, FaceId, VertId};
pub use traits::{MeshGraph, MeshGraphMut};
