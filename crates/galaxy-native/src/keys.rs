// Keyboard parameter editing for the desktop host.
// Holding a key behaves like dragging a slider: each press (including
// auto-repeat) changes the record, and the release commits it.

use galaxy_core::{ColorField, GalaxyParameters, ParamField, Rgb, SceneOptions};
use winit::keyboard::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyCommand {
    Select(ParamField),
    Nudge(f64),
    CycleColor(ColorField),
    ToggleAxes,
    Regenerate,
}

/// What the host should do after a key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The record changed; wait for the release to rebuild.
    Pending,
    /// Rebuild the galaxy now.
    Commit,
}

pub fn command_for_key(code: KeyCode, shift: bool, step_multiplier: f64) -> Option<KeyCommand> {
    let steps = if shift { step_multiplier } else { 1.0 };
    let field = |i: usize| ParamField::ALL.get(i).copied().map(KeyCommand::Select);
    match code {
        KeyCode::Digit1 => field(0),
        KeyCode::Digit2 => field(1),
        KeyCode::Digit3 => field(2),
        KeyCode::Digit4 => field(3),
        KeyCode::Digit5 => field(4),
        KeyCode::Digit6 => field(5),
        KeyCode::Digit7 => field(6),
        KeyCode::ArrowUp => Some(KeyCommand::Nudge(steps)),
        KeyCode::ArrowDown => Some(KeyCommand::Nudge(-steps)),
        KeyCode::KeyI => Some(KeyCommand::CycleColor(ColorField::Inside)),
        KeyCode::KeyO => Some(KeyCommand::CycleColor(ColorField::Outside)),
        KeyCode::KeyA => Some(KeyCommand::ToggleAxes),
        KeyCode::KeyR => Some(KeyCommand::Regenerate),
        _ => None,
    }
}

/// The preset after `current`, wrapping around. Unknown colors restart at
/// the first preset.
pub fn next_preset(current: Rgb, presets: &[&str]) -> Option<Rgb> {
    let parsed: Vec<Rgb> = presets.iter().filter_map(|p| Rgb::from_hex(p).ok()).collect();
    if parsed.is_empty() {
        return None;
    }
    let hex = current.to_hex();
    let next = parsed
        .iter()
        .position(|p| p.to_hex() == hex)
        .map(|i| (i + 1) % parsed.len())
        .unwrap_or(0);
    Some(parsed[next])
}

pub struct Editor {
    pub selected: ParamField,
    dirty: bool,
    inside_presets: &'static [&'static str],
    outside_presets: &'static [&'static str],
}

impl Editor {
    pub fn new(inside_presets: &'static [&'static str], outside_presets: &'static [&'static str]) -> Self {
        Self {
            selected: ParamField::Count,
            dirty: false,
            inside_presets,
            outside_presets,
        }
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn press(
        &mut self,
        command: KeyCommand,
        params: &mut GalaxyParameters,
        options: &mut SceneOptions,
    ) -> Effect {
        match command {
            KeyCommand::Select(field) => {
                self.selected = field;
                log::info!("[keys] editing {} = {}", field.key(), field.format(params));
                Effect::None
            }
            KeyCommand::Nudge(steps) => {
                let field = self.selected;
                field.nudge(params, steps);
                self.dirty = true;
                log::info!("[keys] {} -> {}", field.key(), field.format(params));
                Effect::Pending
            }
            KeyCommand::CycleColor(field) => {
                let presets = match field {
                    ColorField::Inside => self.inside_presets,
                    ColorField::Outside => self.outside_presets,
                };
                if let Some(color) = next_preset(params.color(field), presets) {
                    params.set_color(field, color);
                    self.dirty = true;
                    log::info!("[keys] {} -> {}", field.key(), color);
                    Effect::Pending
                } else {
                    Effect::None
                }
            }
            KeyCommand::ToggleAxes => {
                options.axes_visible = !options.axes_visible;
                log::info!("[keys] axes visible={}", options.axes_visible);
                Effect::None
            }
            KeyCommand::Regenerate => {
                self.dirty = false;
                Effect::Commit
            }
        }
    }

    /// Any key release completes a pending edit.
    pub fn release(&mut self) -> Effect {
        if std::mem::take(&mut self.dirty) {
            Effect::Commit
        } else {
            Effect::None
        }
    }
}
