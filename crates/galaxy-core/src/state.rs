//! Visual-side state types shared with the frontends.
//!
//! These types avoid referencing platform-specific APIs and are suitable for
//! use on both native and web targets. The frontends consume them to build
//! camera matrices and to pack GPU buffers.

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: camera_start_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// World-space edge length of a point quad so that its on-screen size
    /// matches `size * (viewport_height / 2) / depth` pixels.
    pub fn point_world_size(&self, size: f32) -> f32 {
        size * (self.fovy_radians * 0.5).tan()
    }

    /// On-screen edge of a point quad at view depth `depth`, as `vs_points`
    /// draws it: attenuated by distance but never below [`MIN_POINT_PIXELS`].
    pub fn point_edge_pixels(&self, size: f32, depth: f32, viewport_height: f32) -> f32 {
        let pixels_per_unit = viewport_height / (2.0 * depth * (self.fovy_radians * 0.5).tan());
        (self.point_world_size(size) * pixels_per_unit).max(MIN_POINT_PIXELS)
    }
}

/// Display toggles that do not feed the generator.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneOptions {
    pub axes_visible: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            axes_visible: false,
        }
    }
}

/// Position + color pair used for both point instances and axis lines.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Uniform block shared by the point and line pipelines in `scene.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    // x: point quad size in view space, y: viewport height in pixels,
    // z: minimum quad edge in pixels, w unused
    pub point: [f32; 4],
}

impl SceneUniforms {
    pub fn new(camera: &Camera, point_size: f32, viewport_height: u32) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
            point: [
                camera.point_world_size(point_size),
                viewport_height.max(1) as f32,
                MIN_POINT_PIXELS,
                0.0,
            ],
        }
    }
}

/// Two triangles forming a unit quad centred on the origin; each point
/// instance is expanded from these corners in the vertex shader.
pub const POINT_QUAD: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];
