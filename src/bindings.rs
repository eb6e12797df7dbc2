//! Binding and set layout model for the textured-mesh pipeline.
//!
//! Describes the descriptor interface the shader stages expect, grouped by
//! update frequency: per-frame camera data in set 0, per-draw geometry and
//! object metadata in set 1, and the high-cardinality bindless arrays in
//! set 2. Descriptor arrays carry explicit flags because their indices
//! diverge between invocations within a draw; a binding missing
//! [`BindingFlags::NON_UNIFORM_INDEXING`] would yield undefined results on
//! hardware that assumes uniform indexing.

use crate::bindless::TextureResolve;
use crate::error::LayoutError;
use crate::types::DrawParams;

// ============================================================================
// Set and binding numbers (shared with the shader sources)
// ============================================================================

/// Set 0: per-frame data.
pub const SET_FRAME: u32 = 0;
/// Camera uniform block.
pub const BINDING_CAMERA: u32 = 0;

/// Set 1: per-draw geometry and object metadata.
pub const SET_GEOMETRY: u32 = 1;
/// Vertex storage buffer.
pub const BINDING_VERTICES: u32 = 0;
/// Index storage buffer.
pub const BINDING_INDICES: u32 = 1;
/// Triangle metadata storage buffer.
pub const BINDING_TRIANGLES: u32 = 2;
/// Object metadata storage buffer.
pub const BINDING_OBJECTS: u32 = 3;

/// Set 2: bindless descriptor arrays.
pub const SET_BINDLESS: u32 = 2;
/// Sampler array (indirect path) or combined image-sampler array (direct path).
pub const BINDING_SAMPLERS: u32 = 0;
/// Sampled-image array (indirect path only).
pub const BINDING_TEXTURES: u32 = 1;

// ============================================================================
// Binding model
// ============================================================================

/// Type of resource expected at a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingType {
    /// Uniform buffer (small, updated per frame).
    UniformBuffer,
    /// Read-only storage buffer.
    StorageBuffer,
    /// Sampled texture.
    Texture,
    /// Texture sampler.
    Sampler,
    /// Combined texture and sampler.
    CombinedTextureSampler,
}

bitflags::bitflags! {
    /// Shader stages that can access a binding.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StageFlags: u32 {
        /// Vertex shader stage.
        const VERTEX = 1 << 0;
        /// Fragment shader stage.
        const FRAGMENT = 1 << 1;
    }
}

bitflags::bitflags! {
    /// Behavior flags for descriptor-array bindings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BindingFlags: u32 {
        /// The binding is indexed with values that differ between
        /// invocations executing in lockstep. Must be declared to the
        /// execution model, and matched by `nonuniformEXT` in the shader.
        const NON_UNIFORM_INDEXING = 1 << 0;
        /// Not every array slot needs a valid descriptor at draw time.
        const PARTIALLY_BOUND = 1 << 1;
        /// Descriptors may be written after the set is bound.
        const UPDATE_AFTER_BIND = 1 << 2;
    }
}

/// A single binding slot within a set layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingEntry {
    /// Binding index within the set.
    pub binding: u32,
    /// Type of resource expected at this binding.
    pub binding_type: BindingType,
    /// Descriptor count (> 1 means a descriptor array).
    pub count: u32,
    /// Shader stages that can access this binding.
    pub visibility: StageFlags,
    /// Array behavior flags.
    pub flags: BindingFlags,
}

impl BindingEntry {
    /// Create a single-descriptor binding visible to both stages.
    pub fn new(binding: u32, binding_type: BindingType) -> Self {
        Self {
            binding,
            binding_type,
            count: 1,
            visibility: StageFlags::VERTEX | StageFlags::FRAGMENT,
            flags: BindingFlags::empty(),
        }
    }

    /// Turn the binding into a descriptor array of `count` slots.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the shader stage visibility.
    pub fn with_visibility(mut self, visibility: StageFlags) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set array behavior flags.
    pub fn with_flags(mut self, flags: BindingFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Whether this binding is a descriptor array.
    pub fn is_array(&self) -> bool {
        self.count > 1
    }
}

/// How often the descriptors in a set are expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateFrequency {
    /// Written once per frame (camera data).
    PerFrame,
    /// Written when scene geometry changes (vertex/index/object buffers).
    PerScene,
    /// High-cardinality arrays, sparsely updated (bindless resources).
    Bindless,
}

/// Layout of one descriptor set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetLayout {
    /// Set number the shaders bind this layout to.
    pub set: u32,
    /// Expected update frequency.
    pub frequency: UpdateFrequency,
    /// The binding entries in this set.
    pub entries: Vec<BindingEntry>,
}

impl SetLayout {
    /// Create an empty set layout.
    pub fn new(set: u32, frequency: UpdateFrequency) -> Self {
        Self {
            set,
            frequency,
            entries: Vec::new(),
        }
    }

    /// Add a binding entry.
    pub fn with_entry(mut self, entry: BindingEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Get an entry by binding number.
    pub fn entry(&self, binding: u32) -> Option<&BindingEntry> {
        self.entries.iter().find(|e| e.binding == binding)
    }

    /// Check that binding numbers are unique and array flags only appear on
    /// descriptor arrays.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|e| e.binding == entry.binding) {
                return Err(LayoutError::DuplicateBinding {
                    set: self.set,
                    binding: entry.binding,
                });
            }
            if !entry.flags.is_empty() && !entry.is_array() {
                return Err(LayoutError::ArrayFlagsOnNonArray {
                    set: self.set,
                    binding: entry.binding,
                });
            }
        }
        Ok(())
    }
}

/// The full descriptor interface of a pipeline: set layouts plus the
/// optional push block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineBindings {
    /// Set layouts, ordered by set number.
    pub sets: Vec<SetLayout>,
    /// Size in bytes of the push block, if the pipeline uses one.
    pub push_block_size: Option<u32>,
}

impl PipelineBindings {
    /// Get a set layout by set number.
    pub fn set(&self, set: u32) -> Option<&SetLayout> {
        self.sets.iter().find(|s| s.set == set)
    }

    /// Validate every set layout.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for layout in &self.sets {
            layout.validate()?;
        }
        Ok(())
    }
}

// ============================================================================
// Canonical textured-mesh pipeline layouts
// ============================================================================

/// Flags every bindless descriptor array carries.
fn bindless_array_flags() -> BindingFlags {
    BindingFlags::NON_UNIFORM_INDEXING
        | BindingFlags::PARTIALLY_BOUND
        | BindingFlags::UPDATE_AFTER_BIND
}

/// Build the descriptor interface of the textured-mesh pipeline for a
/// resolution strategy.
///
/// Sets 0 and 1 are identical for both strategies; set 2 holds either
/// separate sampler/texture arrays (indirect) or one combined
/// image-sampler array (direct). The direct strategy additionally uses the
/// [`DrawParams`] push block to carry the selecting index.
pub fn mesh_pipeline_bindings(
    strategy: &TextureResolve,
    max_samplers: u32,
    max_textures: u32,
) -> PipelineBindings {
    let frame_set = SetLayout::new(SET_FRAME, UpdateFrequency::PerFrame).with_entry(
        BindingEntry::new(BINDING_CAMERA, BindingType::UniformBuffer)
            .with_visibility(StageFlags::VERTEX),
    );

    let geometry_set = SetLayout::new(SET_GEOMETRY, UpdateFrequency::PerScene)
        .with_entry(
            BindingEntry::new(BINDING_VERTICES, BindingType::StorageBuffer)
                .with_visibility(StageFlags::VERTEX),
        )
        .with_entry(
            BindingEntry::new(BINDING_INDICES, BindingType::StorageBuffer)
                .with_visibility(StageFlags::VERTEX),
        )
        .with_entry(
            BindingEntry::new(BINDING_TRIANGLES, BindingType::StorageBuffer)
                .with_visibility(StageFlags::FRAGMENT),
        )
        .with_entry(
            BindingEntry::new(BINDING_OBJECTS, BindingType::StorageBuffer)
                .with_visibility(StageFlags::FRAGMENT),
        );

    let bindless_set = match strategy {
        TextureResolve::Indirect { .. } => SetLayout::new(SET_BINDLESS, UpdateFrequency::Bindless)
            .with_entry(
                BindingEntry::new(BINDING_SAMPLERS, BindingType::Sampler)
                    .with_count(max_samplers)
                    .with_visibility(StageFlags::FRAGMENT)
                    .with_flags(bindless_array_flags()),
            )
            .with_entry(
                BindingEntry::new(BINDING_TEXTURES, BindingType::Texture)
                    .with_count(max_textures)
                    .with_visibility(StageFlags::FRAGMENT)
                    .with_flags(bindless_array_flags()),
            ),
        TextureResolve::Direct(_) => SetLayout::new(SET_BINDLESS, UpdateFrequency::Bindless)
            .with_entry(
                BindingEntry::new(BINDING_SAMPLERS, BindingType::CombinedTextureSampler)
                    .with_count(max_textures)
                    .with_visibility(StageFlags::FRAGMENT)
                    .with_flags(bindless_array_flags()),
            ),
    };

    PipelineBindings {
        sets: vec![frame_set, geometry_set, bindless_set],
        push_block_size: match strategy {
            TextureResolve::Direct(_) => Some(DrawParams::SIZE),
            TextureResolve::Indirect { .. } => None,
        },
    }
}
