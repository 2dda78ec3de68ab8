use std::time::Instant;
use winit::{
    dpi::{LogicalSize, PhysicalPosition},
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, ModifiersState, PhysicalKey},
    window::WindowBuilder,
};

use galaxy_core::{Camera, GalaxyParameters, GalaxySlot, OrbitControls, SceneOptions};

mod constants;
mod keys;
mod render;

use constants::*;
use keys::{Editor, Effect};
use render::{GpuState, PointsBuffer};

fn regenerate(slot: &mut GalaxySlot<PointsBuffer>, gpu: &mut GpuState<'_>, params: &GalaxyParameters) {
    if let Err(e) = slot.regenerate(gpu, params) {
        log::warn!("[galaxy] rejected parameters: {}", e);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let mut slot: GalaxySlot<PointsBuffer> = GalaxySlot::new();
    let mut params = GalaxyParameters::default();
    let mut options = SceneOptions::default();
    let mut camera = Camera::default();
    let mut controls = OrbitControls::default();
    let mut editor = Editor::new(&INSIDE_PRESETS, &OUTSIDE_PRESETS);
    let mut modifiers = ModifiersState::empty();
    let mut rotating = false;
    let mut panning = false;
    let mut cursor: Option<PhysicalPosition<f64>> = None;
    let mut last = Instant::now();

    regenerate(&mut slot, &mut state, &params);
    log::info!("[keys] 1-7 select, Up/Down edit (Shift x10), I/O colors, A axes, R regenerate");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => {
                slot.clear(&mut state);
                elwt.exit();
            }
            WindowEvent::ModifiersChanged(m) => modifiers = m.state(),
            WindowEvent::MouseInput {
                state: button_state,
                button,
                ..
            } => {
                let pressed = button_state == ElementState::Pressed;
                match button {
                    MouseButton::Left => rotating = pressed,
                    MouseButton::Right => panning = pressed,
                    _ => {}
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(prev) = cursor {
                    let (dx, dy) = ((position.x - prev.x) as f32, (position.y - prev.y) as f32);
                    let height = state.size().1 as f32;
                    if rotating {
                        controls.rotate_by_pixels(dx, dy, height);
                    } else if panning {
                        controls.pan_by_pixels(dx, dy, height);
                    }
                }
                cursor = Some(position);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports scroll-up as positive; the controls expect DOM sign
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y,
                    MouseScrollDelta::PixelDelta(p) => -p.y as f32,
                };
                controls.dolly_wheel(dy);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                if code == KeyCode::Escape {
                    slot.clear(&mut state);
                    elwt.exit();
                    return;
                }
                let effect = match event.state {
                    ElementState::Pressed => {
                        match keys::command_for_key(code, modifiers.shift_key(), SHIFT_STEP_MULTIPLIER) {
                            Some(cmd) => editor.press(cmd, &mut params, &mut options),
                            None => Effect::None,
                        }
                    }
                    ElementState::Released => editor.release(),
                };
                if effect == Effect::Commit {
                    regenerate(&mut slot, &mut state, &params);
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt_sec = (now - last).as_secs_f32().min(MAX_FRAME_DT_SEC);
            last = now;
            let (width, height) = state.size();
            camera.set_aspect(width as f32, height as f32);
            controls.update(&mut camera, dt_sec);
            match state.render(slot.current(), &camera, &options) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}
