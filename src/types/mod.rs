//! GPU-facing data types.
//!
//! Every struct here is `#[repr(C)]` and [`bytemuck::Pod`], sized and padded
//! to match the std430/std140 declarations in the shader sources. Buffers are
//! populated by the host before a draw and are read-only for its duration.

mod camera;
mod object;
mod triangle;
mod vertex;

pub use camera::{flip_clip_y, Camera, GpuCamera};
pub use object::{DrawParams, ObjectInfo};
pub use triangle::GpuTriangle;
pub use vertex::GpuVertex;
