//! Handles into the bindless descriptor arrays.

/// Index of a texture slot in the sampled-image descriptor array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub(crate) u32);

impl TextureHandle {
    /// The raw array index, as written into GPU-visible tables.
    pub fn index(&self) -> u32 {
        self.0
    }
}

/// Index of a sampler slot in the sampler descriptor array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplerHandle(pub(crate) u32);

impl SamplerHandle {
    /// The raw array index, as written into GPU-visible tables.
    pub fn index(&self) -> u32 {
        self.0
    }
}
