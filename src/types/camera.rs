//! Camera state and its GPU uniform block.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

/// Host-side camera.
///
/// Holds the look-to parameters and builds the combined view-projection
/// matrix uploaded once per frame. Projection uses a right-handed Y-up
/// convention with `[0, 1]` depth; reconciling that with the device's
/// Y-down clip space is the vertex stage's job (see [`flip_clip_y`]).
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Eye position in world space.
    pub eye: Vec3,
    /// View direction (not a target point).
    pub dir: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            dir: Vec3::NEG_Z,
            up: Vec3::Y,
            fov_y: std::f32::consts::FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    /// Create a camera looking from `eye` along `dir`.
    pub fn looking_along(eye: Vec3, dir: Vec3) -> Self {
        Self {
            eye,
            dir,
            ..Default::default()
        }
    }

    /// Set the aspect ratio.
    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    /// Set the vertical field of view in radians.
    pub fn with_fov_y(mut self, fov_y: f32) -> Self {
        self.fov_y = fov_y;
        self
    }

    /// View matrix.
    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, self.dir, self.up)
    }

    /// Projection matrix.
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix.
    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Transform a world-space position to device clip space.
    ///
    /// Applies the view-projection matrix and then the single Y negation,
    /// mirroring exactly what the vertex stage does.
    pub fn clip_position(&self, world: Vec4) -> Vec4 {
        flip_clip_y(self.view_proj() * world)
    }

    /// Build the per-frame uniform block.
    pub fn to_gpu(&self) -> GpuCamera {
        GpuCamera {
            position: self.eye.extend(1.0),
            look_at: self.dir.extend(0.0),
            up: self.up.extend(0.0),
            view_proj: self.view_proj(),
        }
    }
}

/// Negate the vertical axis of a post-projection position.
///
/// The projection matrix produces Y-up clip coordinates while the target
/// device expects Y-down. This must be applied exactly once, after the
/// view-projection multiply, never before.
#[inline]
pub fn flip_clip_y(clip: Vec4) -> Vec4 {
    Vec4::new(clip.x, -clip.y, clip.z, clip.w)
}

/// Per-frame camera uniform block.
///
/// Read-only in shaders; matches the `CameraBlock` uniform declaration.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuCamera {
    /// Eye position (w = 1).
    pub position: Vec4,
    /// View direction (w unused).
    pub look_at: Vec4,
    /// Up vector (w unused).
    pub up: Vec4,
    /// Combined view-projection matrix.
    pub view_proj: Mat4,
}

static_assertions::const_assert_eq!(std::mem::size_of::<GpuCamera>(), 112);
