use glam::Vec3;

// Shared scene tuning constants used by both web and native frontends.

// Galaxy defaults
pub const DEFAULT_COUNT: u32 = 100_000;
pub const DEFAULT_SIZE: f32 = 0.01;
pub const DEFAULT_RADIUS: f32 = 5.0;
pub const DEFAULT_BRANCHES: u32 = 3;
pub const DEFAULT_SPIN: f32 = 1.0;
pub const DEFAULT_RANDOMNESS: f32 = 0.2;
pub const DEFAULT_RANDOMNESS_POWER: f32 = 3.0;
pub const DEFAULT_INSIDE_COLOR: &str = "#ff6030";
pub const DEFAULT_OUTSIDE_COLOR: &str = "#1b3984";

// Upper bound the display layer is sized for
pub const MAX_COUNT: u32 = 1_000_000;

// Camera
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_START: [f32; 3] = [0.0, 0.0, 3.0];

// Orbit controls
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_REFERENCE_FPS: f32 = 60.0; // damping factor is defined per frame at this rate
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_BASE: f32 = 0.95; // per wheel notch, raised to zoom speed
pub const ORBIT_MIN_DISTANCE: f32 = 0.1;
pub const ORBIT_MAX_DISTANCE: f32 = 50.0;
// Keeps the eye off the Y axis; smaller values vanish in f32 and let the
// view roll at the poles
pub const ORBIT_POLE_EPSILON: f32 = 1e-3;
pub const ORBIT_PAN_SPEED: f32 = 1.0;

// Point quads never shrink below this many pixels on screen
pub const MIN_POINT_PIXELS: f32 = 1.0;

// Viewport
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Axes helper
pub const AXES_LENGTH: f32 = 2.0;

// Background (three.js renderer default clear)
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

#[inline]
pub fn camera_start_vec3() -> Vec3 {
    Vec3::from(CAMERA_START)
}
