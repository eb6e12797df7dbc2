//! Host-side draw-data validation.
//!
//! The shader stages resolve every index unchecked; an out-of-range vertex
//! index, object id, or descriptor-array index is undefined behavior at the
//! GPU level with no safe failure. These checks are therefore the host's
//! job, run during scene construction rather than at draw time. A draw that
//! passes [`validate_draw`] satisfies every bounds invariant the shaders
//! rely on.

use crate::bindless::BindlessTable;
use crate::error::ValidationError;
use crate::mesh::DrawData;

/// Check the geometry buffers alone: index bounds, whole triangles, and the
/// triangle-table parallel invariant.
pub fn validate_geometry(draw: &DrawData<'_>) -> Result<(), ValidationError> {
    if draw.indices.len() % 3 != 0 {
        return Err(ValidationError::IndexCountNotTriangles {
            index_count: draw.indices.len(),
        });
    }

    for (slot, &index) in draw.indices.iter().enumerate() {
        if index as usize >= draw.vertices.len() {
            return Err(ValidationError::IndexOutOfBounds {
                slot,
                index,
                vertex_count: draw.vertices.len(),
            });
        }
    }

    if let Some(triangles) = draw.triangles {
        let expected = draw.indices.len() / 3;
        if triangles.len() != expected {
            return Err(ValidationError::TriangleCountMismatch {
                triangles: triangles.len(),
                expected,
            });
        }
    }

    Ok(())
}

/// Check the object table against the descriptor arrays: every entry's
/// `texture_id` and `sampler_id` must land inside the registered ranges.
///
/// A table built exclusively through
/// [`BindlessTable::push_object`](crate::bindless::BindlessTable) cannot
/// fail this, but one rebuilt with
/// [`BindlessTable::from_raw_parts`](crate::bindless::BindlessTable::from_raw_parts)
/// from a deserialized scene can.
pub fn validate_object_table(table: &BindlessTable) -> Result<(), ValidationError> {
    for (object, info) in table.object_infos().iter().enumerate() {
        if info.texture_id >= table.texture_count() {
            return Err(ValidationError::TextureIdOutOfBounds {
                object,
                texture_id: info.texture_id,
                texture_count: table.texture_count(),
            });
        }
        if info.sampler_id >= table.sampler_count() {
            return Err(ValidationError::SamplerIdOutOfBounds {
                object,
                sampler_id: info.sampler_id,
                sampler_count: table.sampler_count(),
            });
        }
    }
    Ok(())
}

/// Validate everything a draw consumes: geometry buffers, per-vertex object
/// ids, and the object table's descriptor indices.
pub fn validate_draw(draw: &DrawData<'_>, table: &BindlessTable) -> Result<(), ValidationError> {
    validate_geometry(draw)?;

    for (vertex, v) in draw.vertices.iter().enumerate() {
        if v.obj_id as usize >= table.object_count() {
            return Err(ValidationError::ObjectIdOutOfBounds {
                vertex,
                obj_id: v.obj_id,
                object_count: table.object_count(),
            });
        }
    }

    validate_object_table(table)?;

    log::trace!(
        "draw validated: {} vertices, {} indices, {} objects",
        draw.vertices.len(),
        draw.indices.len(),
        table.object_count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindless::{SamplerDesc, TextureDesc};
    use crate::mesh::TriMesh;
    use crate::types::GpuVertex;
    use glam::{vec4, Vec2, Vec4};

    fn vertex(x: f32, obj_id: u32) -> GpuVertex {
        GpuVertex::new(vec4(x, 0.0, 0.0, 1.0), Vec4::Y, Vec2::ZERO, obj_id)
    }

    fn one_object_table() -> BindlessTable {
        let mut table = BindlessTable::new(4, 4);
        let s = table.register_sampler(SamplerDesc::linear()).unwrap();
        let t = table.register_texture(TextureDesc::new(64, 64)).unwrap();
        table.push_object(t, s).unwrap();
        table
    }

    #[test]
    fn test_valid_triangle_passes() {
        let mesh = TriMesh {
            vertices: vec![vertex(0.0, 0), vertex(1.0, 0), vertex(2.0, 0)],
            indices: vec![0, 1, 2],
            triangles: vec![],
        };
        let table = one_object_table();
        assert!(validate_draw(&mesh.draw_data(), &table).is_ok());
    }

    #[test]
    fn test_index_out_of_bounds() {
        let mesh = TriMesh {
            vertices: vec![vertex(0.0, 0), vertex(1.0, 0), vertex(2.0, 0)],
            indices: vec![0, 1, 3],
            triangles: vec![],
        };
        assert_eq!(
            validate_geometry(&mesh.draw_data()),
            Err(ValidationError::IndexOutOfBounds {
                slot: 2,
                index: 3,
                vertex_count: 3,
            })
        );
    }

    #[test]
    fn test_partial_triangle_is_rejected() {
        let mesh = TriMesh {
            vertices: vec![vertex(0.0, 0), vertex(1.0, 0)],
            indices: vec![0, 1],
            triangles: vec![],
        };
        assert_eq!(
            validate_geometry(&mesh.draw_data()),
            Err(ValidationError::IndexCountNotTriangles { index_count: 2 })
        );
    }

    #[test]
    fn test_triangle_table_must_parallel_indices() {
        let mut mesh = crate::mesh::generators::rect(glam::Vec3::ZERO, glam::Vec3::X, glam::Vec3::Y);
        mesh.triangles.pop();
        assert_eq!(
            validate_geometry(&mesh.draw_data()),
            Err(ValidationError::TriangleCountMismatch {
                triangles: 1,
                expected: 2,
            })
        );
    }

    #[test]
    fn test_unknown_obj_id_is_rejected() {
        let mesh = TriMesh {
            vertices: vec![vertex(0.0, 0), vertex(1.0, 1), vertex(2.0, 0)],
            indices: vec![0, 1, 2],
            triangles: vec![],
        };
        let table = one_object_table();
        assert_eq!(
            validate_draw(&mesh.draw_data(), &table),
            Err(ValidationError::ObjectIdOutOfBounds {
                vertex: 1,
                obj_id: 1,
                object_count: 1,
            })
        );
    }

    #[test]
    fn test_raw_object_entry_with_bad_texture_id() {
        let table = BindlessTable::from_raw_parts(
            4,
            4,
            vec![SamplerDesc::linear()],
            vec![TextureDesc::new(8, 8)],
            vec![crate::types::ObjectInfo::new(3, 0)],
        );
        assert_eq!(
            validate_object_table(&table),
            Err(ValidationError::TextureIdOutOfBounds {
                object: 0,
                texture_id: 3,
                texture_count: 1,
            })
        );
    }

    #[test]
    fn test_raw_object_entry_with_bad_sampler_id() {
        let table = BindlessTable::from_raw_parts(
            4,
            4,
            vec![SamplerDesc::linear()],
            vec![TextureDesc::new(8, 8)],
            vec![crate::types::ObjectInfo::new(0, 2)],
        );
        assert_eq!(
            validate_object_table(&table),
            Err(ValidationError::SamplerIdOutOfBounds {
                object: 0,
                sampler_id: 2,
                sampler_count: 1,
            })
        );
    }

    #[test]
    fn test_empty_draw_is_valid() {
        let mesh = TriMesh::new();
        let table = one_object_table();
        assert!(validate_draw(&mesh.draw_data(), &table).is_ok());
    }
}
