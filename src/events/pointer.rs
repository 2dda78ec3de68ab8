use crate::constants::{PRIMARY_BUTTON, SECONDARY_BUTTON, WHEEL_LINE_PX, WHEEL_PAGE_PX};
use crate::dom::EventListener;
use crate::input::{self, DragMode, DragState};
use galaxy_core::OrbitControls;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub drag: Rc<RefCell<DragState>>,
}

/// Orbit drag (left), pan drag (right) and wheel dolly on the canvas.
/// Move/up listen on the window so a drag that leaves the canvas keeps
/// tracking.
pub fn wire_pointer_handlers(w: PointerWiring) -> anyhow::Result<Vec<EventListener>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    Ok(vec![
        wire_pointerdown(&w)?,
        wire_pointermove(&w, &window)?,
        wire_pointerup(&w, &window, "pointerup")?,
        wire_pointerup(&w, &window, "pointercancel")?,
        wire_wheel(&w)?,
        wire_contextmenu(&w)?,
    ])
}

#[inline]
fn client_xy(ev: &web::PointerEvent) -> (f32, f32) {
    (ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_pointerdown(w: &PointerWiring) -> anyhow::Result<EventListener> {
    let w = w.clone();
    let target = w.canvas.clone();
    EventListener::new(&target, "pointerdown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let Some(mode) = input::drag_mode_for_button(ev.button(), PRIMARY_BUTTON, SECONDARY_BUTTON)
        else {
            return;
        };
        let (x, y) = client_xy(ev);
        w.drag.borrow_mut().begin(ev.pointer_id(), mode, x, y);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    })
}

fn wire_pointermove(w: &PointerWiring, window: &web::Window) -> anyhow::Result<EventListener> {
    let w = w.clone();
    EventListener::new(window, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let (x, y) = client_xy(ev);
        let mut drag = w.drag.borrow_mut();
        let Some((dx, dy)) = drag.advance(ev.pointer_id(), x, y) else {
            return;
        };
        let height = w.canvas.client_height() as f32;
        let mut controls = w.controls.borrow_mut();
        match drag.mode {
            DragMode::Rotate => controls.rotate_by_pixels(dx, dy, height),
            DragMode::Pan => controls.pan_by_pixels(dx, dy, height),
        }
    })
}

fn wire_pointerup(
    w: &PointerWiring,
    window: &web::Window,
    event: &'static str,
) -> anyhow::Result<EventListener> {
    let w = w.clone();
    EventListener::new(window, event, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if w.drag.borrow_mut().end(ev.pointer_id()) {
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
    })
}

fn wire_wheel(w: &PointerWiring) -> anyhow::Result<EventListener> {
    let w = w.clone();
    let target = w.canvas.clone();
    EventListener::new(&target, "wheel", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), WHEEL_LINE_PX, WHEEL_PAGE_PX);
        w.controls.borrow_mut().dolly_wheel(delta as f32);
        ev.prevent_default();
    })
}

// Right-drag pans, so the browser menu stays out of the way on the canvas
fn wire_contextmenu(w: &PointerWiring) -> anyhow::Result<EventListener> {
    EventListener::new(&w.canvas, "contextmenu", |ev| ev.prevent_default())
}
