#![cfg_attr(feature = "simd", feature(portable_simd))]

//! voxel_dualmc - Quad mesh extraction from density volumes
//!
//! This crate extracts quadrilateral iso-surface meshes from regular 3D
//! grids of 8-bit density samples using the Dual Marching Cubes
//! algorithm. Faces and vertices of classic marching cubes correspond
//! to vertices and faces of the dual mesh, so the output consists
//! entirely of quads, one dual vertex per marching-cubes face patch.
//!
//! # Features
//!
//! - **Shared-vertex meshes**: dual vertices deduplicated through a
//!   cache keyed by cell and dual point code
//! - **Quad soup**: index-free 4-vertices-per-quad output
//! - **Manifold correction**: pairwise inversion of the ambiguous
//!   C16/C19 cell configurations guarantees 2-manifold topology
//! - **Topology analysis**: quad-edge incidence classification for
//!   verifying extracted meshes
//!
//! # Example
//!
//! ```ignore
//! use voxel_dualmc::{extract, MeshConfig, VolumeView};
//!
//! // Wrap a caller-owned density grid (sphere, scan, noise, ...)
//! let volume = VolumeView::new(&samples, [64, 64, 64])?;
//!
//! let config = MeshConfig::new().with_iso_value(128).with_manifold(true);
//! let output = extract(&volume, &config);
//!
//! println!("{} vertices, {} quads", output.vertices.len(), output.quad_count());
//! ```

pub mod tables;
pub mod types;
pub mod volume;

// Re-export commonly used items
pub use tables::{DualPointCode, NO_AMBIGUOUS_FACE};
pub use types::{Density, MeshConfig, MeshMode, MeshOutput, MinMaxAABB, Quad, Vertex};
pub use volume::{VolumeError, VolumeView};

// Dual marching cubes extraction
pub mod dualmc;
pub use dualmc::extract;

// Mesh topology verification
pub mod topology;
pub use topology::TopologyReport;

// Engine-agnostic extraction metrics
pub mod metrics;
