//! # Bindless Graphics
//!
//! GPU-facing data model and bindless resource addressing for a textured
//! tri-mesh renderer.
//!
//! The rendering host (pipeline construction, buffer upload, command
//! submission) lives elsewhere; this crate owns the contract between that
//! host and the shader stages:
//!
//! - [`types`] - `#[repr(C)]` POD structs matching the shader-side buffer
//!   layouts (vertices, per-triangle basis, camera block, object table)
//! - [`bindless`] - the descriptor-array registry and the unified
//!   direct/indirect texture resolution strategy
//! - [`bindings`] - set layouts grouped by update frequency, with
//!   non-uniform indexing flags on the descriptor arrays
//! - [`mesh`] - CPU-side meshes with shared-vertex index sequences and
//!   shape generators
//! - [`shader`] - the embedded GLSL stage sources those layouts describe
//! - [`validate`] - the pre-dispatch bounds checks the GPU never performs

pub mod bindings;
pub mod bindless;
pub mod error;
pub mod mesh;
pub mod shader;
pub mod types;
pub mod validate;

pub use bindings::{mesh_pipeline_bindings, BindingFlags, PipelineBindings, UpdateFrequency};
pub use bindless::{BindlessTable, ResolvedBinding, SamplerHandle, TextureHandle, TextureResolve};
pub use error::{LayoutError, TableError, ValidationError};
pub use mesh::TriMesh;
pub use types::{Camera, DrawParams, GpuCamera, GpuTriangle, GpuVertex, ObjectInfo};
pub use validate::validate_draw;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the crate, logging version info.
pub fn init() {
    log::info!("Bindless Graphics v{} initialized", VERSION);
}
