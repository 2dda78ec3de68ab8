// Web host tuning constants: DOM ids, panel layout, input mapping.

// Element the canvas and panel are mounted into (falls back to <body>)
pub const ROOT_ELEMENT_ID: &str = "galaxy-root";
pub const CANVAS_ID: &str = "galaxy-canvas";
pub const PANEL_ID: &str = "galaxy-panel";

// Debug panel layout
pub const PANEL_WIDTH_PX: u32 = 360;
pub const PANEL_ROW_HEIGHT_PX: u32 = 27;
pub const PANEL_LABEL_WIDTH_PCT: u32 = 40;
pub const AXES_TOGGLE_LABEL: &str = "AxesHelper";

// Pointer input
pub const PRIMARY_BUTTON: i16 = 0;
pub const SECONDARY_BUTTON: i16 = 2;
// Wheel deltas reported in lines/pages are scaled to roughly pixel units
pub const WHEEL_LINE_PX: f64 = 16.0;
pub const WHEEL_PAGE_PX: f64 = 800.0;

// Frame timing: clamp huge gaps (tab in background) so damping does not jump
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
