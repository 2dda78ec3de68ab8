/// What a drag does to the camera.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    Rotate,
    Pan,
}

/// Mouse button (`PointerEvent.button`) to drag mode: left rotates, right
/// pans, anything else is ignored.
#[inline]
pub fn drag_mode_for_button(button: i16, primary: i16, secondary: i16) -> Option<DragMode> {
    if button == primary {
        Some(DragMode::Rotate)
    } else if button == secondary {
        Some(DragMode::Pan)
    } else {
        None
    }
}

/// Tracks the pointer that is currently moving the camera.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub pointer_id: Option<i32>,
    pub mode: DragMode,
    pub last_x: f32,
    pub last_y: f32,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, mode: DragMode, x: f32, y: f32) {
        self.pointer_id = Some(pointer_id);
        self.mode = mode;
        self.last_x = x;
        self.last_y = y;
    }

    /// Movement since the last sample for the tracked pointer; other
    /// pointers (and moves while not dragging) yield `None`.
    pub fn advance(&mut self, pointer_id: i32, x: f32, y: f32) -> Option<(f32, f32)> {
        if self.pointer_id != Some(pointer_id) {
            return None;
        }
        let delta = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.pointer_id == Some(pointer_id) {
            self.pointer_id = None;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn active(&self) -> bool {
        self.pointer_id.is_some()
    }
}

/// Normalize a wheel delta to pixels given its `deltaMode`
/// (0 = pixels, 1 = lines, 2 = pages).
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, line_px: f64, page_px: f64) -> f64 {
    match delta_mode {
        1 => delta_y * line_px,
        2 => delta_y * page_px,
        _ => delta_y,
    }
}

/// Host-level keyboard commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    TogglePanel,
}

#[inline]
pub fn key_action(key: &str, ctrl_or_meta: bool) -> Option<KeyAction> {
    if ctrl_or_meta {
        return None;
    }
    match key {
        "h" | "H" => Some(KeyAction::TogglePanel),
        _ => None,
    }
}
