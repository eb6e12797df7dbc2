//! Generators for common shapes.
//!
//! Shapes are described by a center point and two half-extent vectors, so a
//! cube is just six rects sharing one call site. Generated meshes use shared
//! vertices: the rect stores 4 vertices and indexes them as two triangles.

use glam::{vec2, Vec2, Vec3};

use crate::types::{GpuTriangle, GpuVertex};

use super::data::TriMesh;

/// Compute the face tangent basis from positions and UVs.
///
/// Solves the UV-space edge equations for the tangent/bitangent pair; the
/// normal comes from the edge cross product. Degenerate UV mappings (zero
/// determinant) fall back to a zero tangent/bitangent rather than producing
/// non-finite values.
pub fn triangle_basis(positions: [Vec3; 3], uvs: [Vec2; 3]) -> GpuTriangle {
    let edge1 = positions[1] - positions[0];
    let edge2 = positions[2] - positions[0];
    let duv1 = uvs[1] - uvs[0];
    let duv2 = uvs[2] - uvs[0];

    let normal = edge1.cross(edge2).normalize_or_zero();

    let det = duv1.x * duv2.y - duv2.x * duv1.y;
    let (tangent, bitangent) = if det.abs() > f32::EPSILON {
        let f = 1.0 / det;
        let t = f * (duv2.y * edge1 - duv1.y * edge2);
        let bt = f * (duv1.x * edge2 - duv2.x * edge1);
        (t, bt)
    } else {
        (Vec3::ZERO, Vec3::ZERO)
    };

    GpuTriangle::new(
        normal.extend(0.0),
        tangent.extend(0.0),
        bitangent.extend(0.0),
    )
}

/// Generate a rectangle centered at `c`, spanned by half-extents `u` and `v`.
///
/// Produces 4 shared vertices and the index sequence `[0, 1, 2, 2, 3, 0]`;
/// the face normal is `u x v` normalized. UVs cover the full texture once.
pub fn rect(c: Vec3, u: Vec3, v: Vec3) -> TriMesh {
    let positions = [c + u + v, c - u + v, c - u - v, c + u - v];
    let uvs = [
        vec2(1.0, 0.0),
        vec2(0.0, 0.0),
        vec2(0.0, 1.0),
        vec2(1.0, 1.0),
    ];
    let normal = u.cross(v).normalize_or_zero().extend(0.0);

    let vertices = positions
        .iter()
        .zip(uvs.iter())
        .map(|(&p, &uv)| GpuVertex::new(p.extend(1.0), normal, uv, 0))
        .collect();

    let indices = vec![0, 1, 2, 2, 3, 0];
    let triangles = [[0usize, 1, 2], [2, 3, 0]]
        .iter()
        .map(|tri| {
            triangle_basis(
                [positions[tri[0]], positions[tri[1]], positions[tri[2]]],
                [uvs[tri[0]], uvs[tri[1]], uvs[tri[2]]],
            )
        })
        .collect();

    TriMesh {
        vertices,
        indices,
        triangles,
    }
}

/// Generate a box centered at `c`.
///
/// The `u` and `v` half-extents span one face; the box extends `half_depth`
/// along `u x v` in both directions. Built from six rects merged together,
/// so each face keeps its own 4 shared vertices.
pub fn cube(c: Vec3, u: Vec3, v: Vec3, half_depth: f32) -> TriMesh {
    let h = half_depth * u.cross(v).normalize_or_zero();

    let mut mesh = TriMesh::new();
    for face in [
        rect(c + h, u, v),
        rect(c - h, -u, v),
        rect(c + u, v, h),
        rect(c - u, -v, h),
        rect(c + v, h, u),
        rect(c - v, -h, u),
    ] {
        mesh.merge(face);
    }
    mesh
}
