//! CPU-side triangle meshes.
//!
//! A [`TriMesh`] holds the flat vertex sequence, the index sequence that
//! defines draw order (and lets shared vertices appear once in storage), and
//! the per-triangle shading basis. [`generators`] builds the primitive
//! shapes the scene is composed from.

mod data;
pub mod generators;

pub use data::{DrawData, TriMesh};
