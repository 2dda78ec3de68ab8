// Desktop host constants

pub const WINDOW_TITLE: &str = "Galaxy Generator (native)";
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 800;

// Shift multiplies a keyboard nudge by this many steps
pub const SHIFT_STEP_MULTIPLIER: f64 = 10.0;

// Color presets cycled with I / O; the first entry is the default
pub const INSIDE_PRESETS: [&str; 5] = ["#ff6030", "#ffd166", "#ff3366", "#7cf29c", "#ffffff"];
pub const OUTSIDE_PRESETS: [&str; 5] = ["#1b3984", "#3a0ca3", "#0b6e4f", "#14213d", "#6a0572"];

// Clamp long stalls (window drag, debugger) so damping does not jump
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Overlapping points brighten each other in every channel
pub const POINT_BLEND: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};
