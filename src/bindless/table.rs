//! The host-side bindless registry.

use crate::error::TableError;
use crate::types::ObjectInfo;

use super::handle::{SamplerHandle, TextureHandle};

/// Texture filtering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    /// Nearest neighbor filtering.
    Nearest,
    /// Linear filtering.
    #[default]
    Linear,
}

/// Texture address mode (wrapping behavior).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressMode {
    /// Clamp to edge.
    #[default]
    ClampToEdge,
    /// Repeat.
    Repeat,
    /// Mirrored repeat.
    MirrorRepeat,
}

/// Host-side description of a sampler slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SamplerDesc {
    /// Magnification filter.
    pub mag_filter: FilterMode,
    /// Minification filter.
    pub min_filter: FilterMode,
    /// Address mode for all coordinates.
    pub address_mode: AddressMode,
    /// Optional label for debugging.
    pub label: Option<String>,
}

impl SamplerDesc {
    /// Linear filtering, clamp to edge.
    pub fn linear() -> Self {
        Self::default()
    }

    /// Nearest neighbor filtering, clamp to edge.
    pub fn nearest() -> Self {
        Self {
            mag_filter: FilterMode::Nearest,
            min_filter: FilterMode::Nearest,
            ..Default::default()
        }
    }

    /// Set the address mode for all coordinates.
    pub fn with_address_mode(mut self, mode: AddressMode) -> Self {
        self.address_mode = mode;
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Host-side description of a texture slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDesc {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Optional label for debugging.
    pub label: Option<String>,
}

impl TextureDesc {
    /// Create a texture description with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            label: None,
        }
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Registry assigning dense descriptor-array indices to textures and
/// samplers, and recording the per-object metadata table.
///
/// The table is built once during scene construction and flattened into the
/// GPU-visible [`ObjectInfo`] buffer. Registration is bounds-checked against
/// the declared array capacities, and object entries may only reference
/// handles this table issued — together this guarantees that every id the
/// shaders consume is in range, which the GPU itself never verifies.
#[derive(Debug)]
pub struct BindlessTable {
    max_samplers: u32,
    max_textures: u32,
    samplers: Vec<SamplerDesc>,
    textures: Vec<TextureDesc>,
    objects: Vec<ObjectInfo>,
}

impl BindlessTable {
    /// Create an empty table with the given descriptor-array capacities.
    pub fn new(max_samplers: u32, max_textures: u32) -> Self {
        Self {
            max_samplers,
            max_textures,
            samplers: Vec::new(),
            textures: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Rebuild a table from previously flattened parts.
    ///
    /// Unlike [`push_object`](Self::push_object), the object entries are
    /// taken as-is, so a table deserialized from an untrusted scene file may
    /// hold out-of-range descriptor indices. Run
    /// [`validate_object_table`](crate::validate::validate_object_table)
    /// before uploading it.
    pub fn from_raw_parts(
        max_samplers: u32,
        max_textures: u32,
        samplers: Vec<SamplerDesc>,
        textures: Vec<TextureDesc>,
        objects: Vec<ObjectInfo>,
    ) -> Self {
        Self {
            max_samplers,
            max_textures,
            samplers,
            textures,
            objects,
        }
    }

    /// Register a sampler, assigning it the next free array slot.
    pub fn register_sampler(&mut self, desc: SamplerDesc) -> Result<SamplerHandle, TableError> {
        if self.samplers.len() as u32 >= self.max_samplers {
            return Err(TableError::SamplerCapacityExceeded {
                capacity: self.max_samplers,
            });
        }
        let handle = SamplerHandle(self.samplers.len() as u32);
        log::debug!(
            "registered sampler {} ({:?})",
            handle.index(),
            desc.label.as_deref().unwrap_or("unlabeled")
        );
        self.samplers.push(desc);
        Ok(handle)
    }

    /// Register a texture, assigning it the next free array slot.
    pub fn register_texture(&mut self, desc: TextureDesc) -> Result<TextureHandle, TableError> {
        if self.textures.len() as u32 >= self.max_textures {
            return Err(TableError::TextureCapacityExceeded {
                capacity: self.max_textures,
            });
        }
        let handle = TextureHandle(self.textures.len() as u32);
        log::debug!(
            "registered texture {} ({}x{}, {:?})",
            handle.index(),
            desc.width,
            desc.height,
            desc.label.as_deref().unwrap_or("unlabeled")
        );
        self.textures.push(desc);
        Ok(handle)
    }

    /// Add an object entry and return its id (the `obj_id` vertices carry).
    ///
    /// Fails if either handle was not issued by this table, so a valid table
    /// can never produce an out-of-range `texture_id` or `sampler_id`.
    pub fn push_object(
        &mut self,
        texture: TextureHandle,
        sampler: SamplerHandle,
    ) -> Result<u32, TableError> {
        if texture.index() >= self.textures.len() as u32 {
            return Err(TableError::UnknownTextureHandle {
                index: texture.index(),
                count: self.textures.len() as u32,
            });
        }
        if sampler.index() >= self.samplers.len() as u32 {
            return Err(TableError::UnknownSamplerHandle {
                index: sampler.index(),
                count: self.samplers.len() as u32,
            });
        }
        let obj_id = self.objects.len() as u32;
        self.objects
            .push(ObjectInfo::new(texture.index(), sampler.index()));
        Ok(obj_id)
    }

    /// Maximum number of samplers the descriptor array holds.
    pub fn max_samplers(&self) -> u32 {
        self.max_samplers
    }

    /// Maximum number of textures the descriptor array holds.
    pub fn max_textures(&self) -> u32 {
        self.max_textures
    }

    /// Number of registered samplers.
    pub fn sampler_count(&self) -> u32 {
        self.samplers.len() as u32
    }

    /// Number of registered textures.
    pub fn texture_count(&self) -> u32 {
        self.textures.len() as u32
    }

    /// Number of object entries.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// The registered sampler descriptions, in array order.
    pub fn samplers(&self) -> &[SamplerDesc] {
        &self.samplers
    }

    /// The registered texture descriptions, in array order.
    pub fn textures(&self) -> &[TextureDesc] {
        &self.textures
    }

    /// The flattened object table, in `obj_id` order.
    pub fn object_infos(&self) -> &[ObjectInfo] {
        &self.objects
    }

    /// Get an object entry by id.
    pub fn object(&self, obj_id: u32) -> Option<&ObjectInfo> {
        self.objects.get(obj_id as usize)
    }

    /// The object table as bytes, ready for buffer upload.
    pub fn object_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.objects)
    }
}

static_assertions::assert_impl_all!(BindlessTable: Send, Sync);
