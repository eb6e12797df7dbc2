//! Vertex storage format.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};

/// A single vertex as stored in the vertex storage buffer.
///
/// Vertices are kept in a flat ordered sequence and addressed indirectly
/// through the index buffer, so a vertex shared by several triangles is
/// stored once. The `obj_id` ties the vertex to an entry in the
/// [`ObjectInfo`](super::ObjectInfo) table and is propagated to the fragment
/// stage as a flat (non-interpolated) integer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    /// World-space position (w = 1).
    pub position: Vec4,
    /// Vertex normal (w unused).
    pub normal: Vec4,
    /// Texture coordinates.
    pub uv: Vec2,
    /// Index into the object table.
    pub obj_id: u32,
    /// Padding to a 16-byte multiple for std430.
    pub _padding: u32,
}

impl GpuVertex {
    /// Create a vertex with the given position, normal, and uv.
    pub fn new(position: Vec4, normal: Vec4, uv: Vec2, obj_id: u32) -> Self {
        Self {
            position,
            normal,
            uv,
            obj_id,
            _padding: 0,
        }
    }

    /// Size in bytes of one vertex in the storage buffer.
    pub const STRIDE: usize = std::mem::size_of::<Self>();
}

// Layout contract with the shader-side `struct Vertex`.
static_assertions::const_assert_eq!(std::mem::size_of::<GpuVertex>(), 48);
static_assertions::const_assert_eq!(std::mem::align_of::<GpuVertex>(), 16);
