//! Embedded shader stage sources.
//!
//! The GLSL sources in `shaders/` are the other half of the contract this
//! crate describes: they declare the same set/binding numbers as
//! [`bindings`](crate::bindings), read the same struct layouts as
//! [`types`](crate::types), and wrap every divergent descriptor-array index
//! in `nonuniformEXT`. Tests at the bottom pin those agreements.

use crate::bindless::TextureResolve;

/// Vertex stage: storage-buffer vertex pulling and the clip-space Y flip.
pub const TEXTURED_MESH_VERT: &str = include_str!("../../shaders/textured_mesh.vert");

/// Fragment stage for the indirect path: `obj_id` through the object table
/// into separate sampler/texture arrays.
pub const TEXTURED_MESH_INDIRECT_FRAG: &str =
    include_str!("../../shaders/textured_mesh_indirect.frag");

/// Fragment stage for the direct path: push-block `tex_id` into the
/// combined image-sampler array.
pub const TEXTURED_MESH_DIRECT_FRAG: &str =
    include_str!("../../shaders/textured_mesh_direct.frag");

/// The pair of stage sources making up one pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSources {
    /// Vertex stage GLSL.
    pub vertex: &'static str,
    /// Fragment stage GLSL.
    pub fragment: &'static str,
}

/// Select the stage sources for a resolution strategy.
///
/// Both strategies share the vertex stage; only the fragment-side lookup
/// differs.
pub fn stage_sources(strategy: &TextureResolve) -> StageSources {
    StageSources {
        vertex: TEXTURED_MESH_VERT,
        fragment: match strategy {
            TextureResolve::Direct(_) => TEXTURED_MESH_DIRECT_FRAG,
            TextureResolve::Indirect { .. } => TEXTURED_MESH_INDIRECT_FRAG,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{
        BINDING_CAMERA, BINDING_INDICES, BINDING_OBJECTS, BINDING_SAMPLERS, BINDING_TEXTURES,
        BINDING_TRIANGLES, BINDING_VERTICES, SET_BINDLESS, SET_FRAME, SET_GEOMETRY,
    };
    use crate::bindless::TextureHandle;

    fn declares(source: &str, set: u32, binding: u32) -> bool {
        source.contains(&format!("layout(set = {set}, binding = {binding}"))
    }

    #[test]
    fn test_vertex_stage_bindings_match_constants() {
        assert!(declares(TEXTURED_MESH_VERT, SET_FRAME, BINDING_CAMERA));
        assert!(declares(TEXTURED_MESH_VERT, SET_GEOMETRY, BINDING_VERTICES));
        assert!(declares(TEXTURED_MESH_VERT, SET_GEOMETRY, BINDING_INDICES));
    }

    #[test]
    fn test_indirect_fragment_bindings_match_constants() {
        let frag = TEXTURED_MESH_INDIRECT_FRAG;
        assert!(declares(frag, SET_GEOMETRY, BINDING_TRIANGLES));
        assert!(declares(frag, SET_GEOMETRY, BINDING_OBJECTS));
        assert!(declares(frag, SET_BINDLESS, BINDING_SAMPLERS));
        assert!(declares(frag, SET_BINDLESS, BINDING_TEXTURES));
    }

    #[test]
    fn test_direct_fragment_uses_combined_array_and_push_block() {
        let frag = TEXTURED_MESH_DIRECT_FRAG;
        assert!(declares(frag, SET_BINDLESS, BINDING_SAMPLERS));
        assert!(frag.contains("layout(push_constant) uniform DrawParams"));
        assert!(frag.contains("uint tex_id"));
    }

    #[test]
    fn test_divergent_indices_are_marked_non_uniform() {
        for frag in [TEXTURED_MESH_INDIRECT_FRAG, TEXTURED_MESH_DIRECT_FRAG] {
            assert!(frag.contains("#extension GL_EXT_nonuniform_qualifier : require"));
        }

        // Every descriptor-array lookup in the indirect path diverges.
        assert!(TEXTURED_MESH_INDIRECT_FRAG.contains("textures[nonuniformEXT(info.texture_id)]"));
        assert!(TEXTURED_MESH_INDIRECT_FRAG.contains("samplers[nonuniformEXT(info.sampler_id)]"));
        assert!(TEXTURED_MESH_INDIRECT_FRAG.contains("objects[nonuniformEXT(in_obj_id)]"));
        assert!(TEXTURED_MESH_DIRECT_FRAG.contains("textures[nonuniformEXT(params.tex_id)]"));
    }

    #[test]
    fn test_vertex_stage_pulls_through_index_buffer() {
        assert!(TEXTURED_MESH_VERT.contains("vertices[indices[gl_VertexIndex]]"));
    }

    #[test]
    fn test_y_flip_happens_after_projection() {
        let body = TEXTURED_MESH_VERT;
        let multiply = body.find("camera.view_proj *").unwrap();
        let flip = body.find("clip.y = -clip.y").unwrap();
        assert!(multiply < flip);

        // Exactly one negation.
        assert_eq!(body.matches("clip.y = -clip.y").count(), 1);
    }

    #[test]
    fn test_obj_id_is_flat() {
        assert!(TEXTURED_MESH_VERT.contains("flat out uint out_obj_id"));
        assert!(TEXTURED_MESH_INDIRECT_FRAG.contains("flat in uint in_obj_id"));
    }

    #[test]
    fn test_stage_selection() {
        let direct = stage_sources(&TextureResolve::Direct(TextureHandle(0)));
        let indirect = stage_sources(&TextureResolve::Indirect { obj_id: 0 });

        assert_eq!(direct.vertex, indirect.vertex);
        assert_eq!(direct.fragment, TEXTURED_MESH_DIRECT_FRAG);
        assert_eq!(indirect.fragment, TEXTURED_MESH_INDIRECT_FRAG);
    }
}
