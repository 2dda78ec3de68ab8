use crate::constants::MAX_FRAME_DT_SEC;
use crate::render::{GpuState, PointsBuffer};
use galaxy_core::{Camera, GalaxyParameters, GalaxySlot, OrbitControls, SceneOptions};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub gpu: Option<GpuState>,
    pub slot: GalaxySlot<PointsBuffer>,
    pub camera: Camera,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub options: Rc<RefCell<SceneOptions>>,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl FrameContext {
    /// Replace the displayed galaxy with one built from `params`.
    /// Rejected parameters leave the current cloud in place.
    pub fn regenerate(&mut self, params: &GalaxyParameters) {
        let Some(gpu) = self.gpu.as_mut() else {
            log::warn!("[galaxy] no GPU; skipping regenerate");
            return;
        };
        match self.slot.regenerate(gpu, params) {
            Ok(n) => log::debug!("[galaxy] regenerated {} points", n),
            Err(e) => log::warn!("[galaxy] rejected parameters: {}", e),
        }
    }

    pub fn release(&mut self) {
        if let Some(gpu) = self.gpu.as_mut() {
            self.slot.clear(gpu);
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.camera.set_aspect(w as f32, h as f32);
        self.controls.borrow_mut().update(&mut self.camera, dt_sec);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(self.slot.current(), &self.camera, &self.options.borrow()) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuState> {
    match GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling `requestAnimationFrame` loop that can be stopped.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let running = Rc::new(Cell::new(true));
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let running_tick = running.clone();
        let raf_tick = raf_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running_tick.get() {
                return;
            }
            frame_ctx.borrow_mut().frame();
            raf_tick.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));
        raf_id.set(request_frame(&tick));

        Self {
            running,
            raf_id,
            tick,
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Dropping the closure breaks the tick -> slot -> tick cycle
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}
