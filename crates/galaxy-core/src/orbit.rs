//! Orbit camera controls with optional damping.
//!
//! Pointer drags queue rotation (or pan) deltas and wheel notches queue a
//! dolly scale; [`OrbitControls::update`] applies them to a [`Camera`] once
//! per frame. With damping on, each update applies only a fraction of the queued
//! rotation and the rest decays over the following frames.

use crate::constants::*;
use crate::state::Camera;
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

/// Polar coordinates around the orbit target, Y up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    /// Polar angle from +Y.
    pub phi: f32,
    /// Azimuth around Y, 0 along +Z.
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self {
                radius: 0.0,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            // acos loses the small angles near the poles in f32
            phi: offset.x.hypot(offset.z).atan2(offset.y),
        }
    }

    pub fn to_offset(&self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    pending_pan: Vec2,
    pan_offset: Vec3,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            pan_speed: ORBIT_PAN_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            pending_pan: Vec2::ZERO,
            pan_offset: Vec3::ZERO,
        }
    }
}

impl OrbitControls {
    pub fn rotate_left(&mut self, angle: f32) {
        self.delta_theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta_phi -= angle;
    }

    /// Map a pointer drag in pixels to rotation. A drag across the full
    /// viewport height turns the camera once around.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.rotate_left(TAU * dx / h * self.rotate_speed);
        self.rotate_up(TAU * dy / h * self.rotate_speed);
    }

    /// Screen-space pan: the point at the target's depth follows the pointer.
    /// Moves the target and the eye together on the next update.
    pub fn pan_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.pending_pan += Vec2::new(dx, dy) / h * self.pan_speed;
    }

    // Turn queued screen pans into a world offset in the camera's plane.
    fn resolve_pan(&mut self, camera: &Camera) {
        if self.pending_pan == Vec2::ZERO {
            return;
        }
        let offset = camera.eye - self.target;
        let target_distance = offset.length() * (camera.fovy_radians * 0.5).tan();
        let forward = -offset.normalize_or_zero();
        let right = forward.cross(camera.up).normalize_or_zero();
        let up = right.cross(forward);
        let pan = std::mem::take(&mut self.pending_pan) * 2.0 * target_distance;
        self.pan_offset += up * pan.y - right * pan.x;
    }

    /// Wheel input: negative `delta_y` (scroll up) moves in, positive moves out.
    pub fn dolly_wheel(&mut self, delta_y: f32) {
        let zoom_scale = ORBIT_ZOOM_BASE.powf(self.zoom_speed);
        if delta_y < 0.0 {
            self.scale *= zoom_scale;
        } else if delta_y > 0.0 {
            self.scale /= zoom_scale;
        }
    }

    /// True while queued rotation, pan or dolly is still being applied.
    pub fn is_moving(&self) -> bool {
        self.delta_theta.abs() > 1e-6
            || self.delta_phi.abs() > 1e-6
            || self.pending_pan != Vec2::ZERO
            || self.pan_offset.length_squared() > 1e-12
            || self.scale != 1.0
    }

    /// Apply queued input to `camera`. `dt_sec` scales the damping so the
    /// motion decays at the same speed regardless of frame rate.
    pub fn update(&mut self, camera: &mut Camera, dt_sec: f32) {
        self.resolve_pan(camera);
        let mut spherical = Spherical::from_offset(camera.eye - self.target);

        let (applied, retained) = if self.enable_damping {
            let frames = (dt_sec * ORBIT_REFERENCE_FPS).max(0.0);
            let retained = (1.0 - self.damping_factor).powf(frames);
            (1.0 - retained, retained)
        } else {
            (1.0, 0.0)
        };

        spherical.theta += self.delta_theta * applied;
        spherical.phi += self.delta_phi * applied;
        let min_phi = self.min_polar_angle.max(ORBIT_POLE_EPSILON);
        let max_phi = self.max_polar_angle.min(PI - ORBIT_POLE_EPSILON);
        spherical.phi = spherical.phi.clamp(min_phi, max_phi);

        spherical.radius = (spherical.radius * self.scale).clamp(self.min_distance, self.max_distance);

        self.target += self.pan_offset * applied;
        camera.eye = self.target + spherical.to_offset();
        camera.target = self.target;

        self.delta_theta *= retained;
        self.delta_phi *= retained;
        self.pan_offset *= retained;
        self.scale = 1.0;
    }
}
