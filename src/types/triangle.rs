//! Per-triangle shading basis.

use bytemuck::{Pod, Zeroable};
use glam::Vec4;

/// Per-face normal/tangent/bitangent basis, used for normal mapping.
///
/// The triangle buffer parallels the index sequence: entry `i` belongs to
/// the triangle built from indices `3*i .. 3*i+3`, and the fragment stage
/// fetches it through `gl_PrimitiveID`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuTriangle {
    /// Face normal (w unused).
    pub normal: Vec4,
    /// Face tangent, aligned with the U texture axis (w unused).
    pub tangent: Vec4,
    /// Face bitangent, aligned with the V texture axis (w unused).
    pub bitangent: Vec4,
}

impl GpuTriangle {
    /// Create a triangle basis from its three vectors.
    pub fn new(normal: Vec4, tangent: Vec4, bitangent: Vec4) -> Self {
        Self {
            normal,
            tangent,
            bitangent,
        }
    }
}

static_assertions::const_assert_eq!(std::mem::size_of::<GpuTriangle>(), 48);
