// Tests for keyboard parameter editing and host constants.
// The host is a binary crate, so the pure key module is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod keys {
    include!("../src/keys.rs");
}

use constants::*;
use galaxy_core::{ColorField, GalaxyParameters, ParamField, Rgb, SceneOptions};
use keys::*;
use winit::keyboard::KeyCode;

fn editor() -> Editor {
    Editor::new(&INSIDE_PRESETS, &OUTSIDE_PRESETS)
}

#[test]
fn digits_select_fields_in_panel_order() {
    for (i, code) in [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
    ]
    .into_iter()
    .enumerate()
    {
        assert_eq!(
            command_for_key(code, false, SHIFT_STEP_MULTIPLIER),
            Some(KeyCommand::Select(ParamField::ALL[i]))
        );
    }
    assert_eq!(command_for_key(KeyCode::Digit8, false, SHIFT_STEP_MULTIPLIER), None);
}

#[test]
fn arrows_nudge_and_shift_multiplies() {
    assert_eq!(
        command_for_key(KeyCode::ArrowUp, false, SHIFT_STEP_MULTIPLIER),
        Some(KeyCommand::Nudge(1.0))
    );
    assert_eq!(
        command_for_key(KeyCode::ArrowDown, true, SHIFT_STEP_MULTIPLIER),
        Some(KeyCommand::Nudge(-10.0))
    );
}

#[test]
fn nudges_wait_for_release_before_committing() {
    let mut ed = editor();
    let mut params = GalaxyParameters::default();
    let mut options = SceneOptions::default();

    assert_eq!(
        ed.press(KeyCommand::Select(ParamField::Branches), &mut params, &mut options),
        Effect::None
    );
    // Auto-repeat presses keep editing without rebuilding
    for _ in 0..3 {
        assert_eq!(ed.press(KeyCommand::Nudge(1.0), &mut params, &mut options), Effect::Pending);
    }
    assert_eq!(params.branches, 6);
    assert!(ed.is_dirty());

    assert_eq!(ed.release(), Effect::Commit);
    assert_eq!(ed.release(), Effect::None);
}

#[test]
fn nudge_respects_the_field_range() {
    let mut ed = editor();
    let mut params = GalaxyParameters::default();
    let mut options = SceneOptions::default();
    ed.press(KeyCommand::Select(ParamField::Count), &mut params, &mut options);
    ed.press(KeyCommand::Nudge(-10_000.0), &mut params, &mut options);
    assert_eq!(params.count, 100);
}

#[test]
fn color_presets_cycle_and_wrap() {
    let first = Rgb::from_hex(INSIDE_PRESETS[0]).unwrap();
    let second = Rgb::from_hex(INSIDE_PRESETS[1]).unwrap();
    let last = Rgb::from_hex(INSIDE_PRESETS[INSIDE_PRESETS.len() - 1]).unwrap();
    assert_eq!(next_preset(first, &INSIDE_PRESETS), Some(second));
    assert_eq!(next_preset(last, &INSIDE_PRESETS), Some(first));
    assert_eq!(next_preset(Rgb::new(0.123, 0.4, 0.9), &INSIDE_PRESETS), Some(first));
    assert_eq!(next_preset(first, &[]), None);
}

#[test]
fn default_colors_are_the_first_presets() {
    let params = GalaxyParameters::default();
    assert_eq!(params.inside_color.to_hex(), INSIDE_PRESETS[0]);
    assert_eq!(params.outside_color.to_hex(), OUTSIDE_PRESETS[0]);
}

#[test]
fn cycling_a_color_commits_on_release() {
    let mut ed = editor();
    let mut params = GalaxyParameters::default();
    let mut options = SceneOptions::default();
    let effect = ed.press(KeyCommand::CycleColor(ColorField::Outside), &mut params, &mut options);
    assert_eq!(effect, Effect::Pending);
    assert_eq!(params.outside_color.to_hex(), OUTSIDE_PRESETS[1]);
    assert_eq!(ed.release(), Effect::Commit);
}

#[test]
fn axes_toggle_never_rebuilds() {
    let mut ed = editor();
    let mut params = GalaxyParameters::default();
    let mut options = SceneOptions::default();
    assert_eq!(ed.press(KeyCommand::ToggleAxes, &mut params, &mut options), Effect::None);
    assert!(options.axes_visible);
    assert_eq!(ed.release(), Effect::None);
}

#[test]
fn regenerate_commits_immediately() {
    let mut ed = editor();
    let mut params = GalaxyParameters::default();
    let mut options = SceneOptions::default();
    ed.press(KeyCommand::Nudge(1.0), &mut params, &mut options);
    assert_eq!(ed.press(KeyCommand::Regenerate, &mut params, &mut options), Effect::Commit);
    // The pending nudge was folded into that rebuild
    assert_eq!(ed.release(), Effect::None);
}

#[test]
fn points_blend_additively() {
    let add = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    };
    assert_eq!(POINT_BLEND.color, add);
    assert_eq!(POINT_BLEND.alpha, add);
}
