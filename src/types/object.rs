//! Per-object material metadata and the per-draw push block.

use bytemuck::{Pod, Zeroable};

/// One entry in the per-object metadata table.
///
/// Indexed by the `obj_id` carried on each vertex. The fragment stage uses
/// the entry to index the separate sampler and texture descriptor arrays
/// (the indirect resolution path). Out-of-range ids are never checked on the
/// GPU; the host validates the table before dispatch.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct ObjectInfo {
    /// Index into the sampler descriptor array.
    pub sampler_id: u32,
    /// Index into the texture descriptor array.
    pub texture_id: u32,
    /// Padding to a 16-byte multiple for std430.
    pub _padding: [u32; 2],
}

impl ObjectInfo {
    /// Create an entry selecting the given texture and sampler slots.
    pub fn new(texture_id: u32, sampler_id: u32) -> Self {
        Self {
            sampler_id,
            texture_id,
            _padding: [0; 2],
        }
    }
}

/// Small frequently-changing parameter block supplied per draw.
///
/// Used by the direct resolution path when a combined draw needs to select
/// one specific texture outside the per-vertex `obj_id` path. Uploaded as a
/// push block; matches the shader's `DrawParams` declaration.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct DrawParams {
    /// Index into the combined image-sampler array.
    pub tex_id: u32,
}

impl DrawParams {
    /// Size in bytes of the push block.
    pub const SIZE: u32 = std::mem::size_of::<Self>() as u32;
}

static_assertions::const_assert_eq!(std::mem::size_of::<ObjectInfo>(), 16);
