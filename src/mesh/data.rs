//! Mesh data and the draw-ready buffer view.

use crate::types::{GpuTriangle, GpuVertex};

/// A triangle mesh in the exact layout the GPU buffers use.
///
/// - `vertices` is the flat ordered vertex sequence, indexed indirectly,
/// - `indices` is the triangle-list index sequence; a vertex used by
///   several triangles appears once in `vertices` and many times here,
/// - `triangles` parallels the index sequence: entry `i` is the shading
///   basis for indices `3*i .. 3*i+3`.
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    /// Flat vertex sequence.
    pub vertices: Vec<GpuVertex>,
    /// Triangle-list index sequence.
    pub indices: Vec<u32>,
    /// Per-triangle basis, parallel to the index sequence.
    pub triangles: Vec<GpuTriangle>,
}

impl TriMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles described by the index sequence.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Assign the same object id to every vertex.
    pub fn set_object(&mut self, obj_id: u32) {
        for vertex in &mut self.vertices {
            vertex.obj_id = obj_id;
        }
    }

    /// Append another mesh, rebasing its indices past this mesh's vertices.
    pub fn merge(&mut self, other: TriMesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base));
        self.triangles.extend(other.triangles);
    }

    /// Vertex data as bytes, ready for buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as bytes, ready for buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Triangle data as bytes, ready for buffer upload.
    pub fn triangle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Borrow the buffers for validation.
    pub fn draw_data(&self) -> DrawData<'_> {
        DrawData {
            vertices: &self.vertices,
            indices: &self.indices,
            triangles: if self.triangles.is_empty() {
                None
            } else {
                Some(&self.triangles)
            },
        }
    }
}

/// Borrowed view of the buffers consumed by one draw.
///
/// This is what the host hands to [`validate_draw`](crate::validate::validate_draw)
/// right before upload; the triangle buffer is optional because the direct
/// resolution path does not read it.
#[derive(Debug, Clone, Copy)]
pub struct DrawData<'a> {
    /// Vertex buffer contents.
    pub vertices: &'a [GpuVertex],
    /// Index buffer contents.
    pub indices: &'a [u32],
    /// Triangle metadata buffer contents, if bound.
    pub triangles: Option<&'a [GpuTriangle]>,
}
