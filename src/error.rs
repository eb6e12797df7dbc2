//! Error types for table construction and draw-data validation.

use thiserror::Error;

/// Errors raised while building a [`BindlessTable`](crate::bindless::BindlessTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The sampler array is full.
    #[error("sampler capacity exceeded: table holds at most {capacity} samplers")]
    SamplerCapacityExceeded {
        /// Maximum number of samplers the table accepts.
        capacity: u32,
    },

    /// The texture array is full.
    #[error("texture capacity exceeded: table holds at most {capacity} textures")]
    TextureCapacityExceeded {
        /// Maximum number of textures the table accepts.
        capacity: u32,
    },

    /// An object entry references a texture handle this table never issued.
    #[error("unknown texture handle {index} (table holds {count} textures)")]
    UnknownTextureHandle {
        /// Index carried by the offending handle.
        index: u32,
        /// Number of textures currently registered.
        count: u32,
    },

    /// An object entry references a sampler handle this table never issued.
    #[error("unknown sampler handle {index} (table holds {count} samplers)")]
    UnknownSamplerHandle {
        /// Index carried by the offending handle.
        index: u32,
        /// Number of samplers currently registered.
        count: u32,
    },
}

/// Errors found while checking a [`SetLayout`](crate::bindings::SetLayout).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A set declares the same binding number twice.
    #[error("set {set} declares binding {binding} more than once")]
    DuplicateBinding {
        /// Set number of the offending layout.
        set: u32,
        /// The duplicated binding number.
        binding: u32,
    },

    /// Array behavior flags on a single-descriptor binding.
    #[error("set {set} binding {binding} carries array flags but is not an array")]
    ArrayFlagsOnNonArray {
        /// Set number of the offending layout.
        set: u32,
        /// The offending binding number.
        binding: u32,
    },
}

/// A draw-data invariant violation found by [`validate_draw`](crate::validate::validate_draw).
///
/// Any of these would be undefined behavior on the GPU; the shader performs
/// no bounds checks, so the host must reject the draw before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An index buffer entry points past the end of the vertex buffer.
    #[error("index {index} at slot {slot} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds {
        /// Position of the offending entry in the index buffer.
        slot: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the vertex buffer.
        vertex_count: usize,
    },

    /// The index count does not describe whole triangles.
    #[error("index count {index_count} is not a multiple of 3")]
    IndexCountNotTriangles {
        /// Number of entries in the index buffer.
        index_count: usize,
    },

    /// The triangle metadata buffer does not parallel the index sequence.
    #[error("triangle table holds {triangles} entries but the index buffer describes {expected} triangles")]
    TriangleCountMismatch {
        /// Number of entries in the triangle buffer.
        triangles: usize,
        /// Triangle count implied by the index buffer.
        expected: usize,
    },

    /// A vertex carries an object id with no entry in the object table.
    #[error("vertex {vertex} has obj_id {obj_id} but the object table holds {object_count} entries")]
    ObjectIdOutOfBounds {
        /// Position of the offending vertex in the vertex buffer.
        vertex: usize,
        /// The out-of-range object id.
        obj_id: u32,
        /// Number of entries in the object table.
        object_count: usize,
    },

    /// An object entry indexes past the end of the texture array.
    #[error("object {object} has texture_id {texture_id} but only {texture_count} textures are bound")]
    TextureIdOutOfBounds {
        /// Position of the offending entry in the object table.
        object: usize,
        /// The out-of-range texture index.
        texture_id: u32,
        /// Number of textures registered in the bindless table.
        texture_count: u32,
    },

    /// An object entry indexes past the end of the sampler array.
    #[error("object {object} has sampler_id {sampler_id} but only {sampler_count} samplers are bound")]
    SamplerIdOutOfBounds {
        /// Position of the offending entry in the object table.
        object: usize,
        /// The out-of-range sampler index.
        sampler_id: u32,
        /// Number of samplers registered in the bindless table.
        sampler_count: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::IndexOutOfBounds {
            slot: 4,
            index: 12,
            vertex_count: 6,
        };
        assert_eq!(
            err.to_string(),
            "index 12 at slot 4 out of bounds for 6 vertices"
        );

        let err = TableError::SamplerCapacityExceeded { capacity: 16 };
        assert_eq!(
            err.to_string(),
            "sampler capacity exceeded: table holds at most 16 samplers"
        );
    }
}
