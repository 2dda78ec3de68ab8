#![cfg(target_arch = "wasm32")]
use galaxy_core::{Camera, GalaxyParameters, GalaxySlot, OrbitControls, SceneOptions};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod panel;
mod render;

use constants::ROOT_ELEMENT_ID;
use dom::EventListener;

/// Everything the running viewport owns; dropping it in `teardown` order
/// releases the galaxy buffer, listeners, panel and canvas.
struct App {
    frame_loop: frame::FrameLoop,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    listeners: Vec<EventListener>,
    panel: Rc<RefCell<Option<panel::Panel>>>,
    canvas: web::HtmlCanvasElement,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

static STARTED: AtomicBool = AtomicBool::new(false);

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) -> anyhow::Result<EventListener> {
    dom::sync_canvas_backing_size(canvas);
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let canvas_resize = canvas.clone();
    EventListener::new(&window, "resize", move |_| {
        if let Some(vp) = dom::sync_canvas_backing_size(&canvas_resize) {
            log::debug!(
                "[resize] {}x{} css @ {:.2}x",
                vp.css_width,
                vp.css_height,
                vp.pixel_ratio()
            );
        }
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("galaxy-web starting");

    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let parent = dom::mount_parent(&document, ROOT_ELEMENT_ID)?;

    let canvas = dom::create_canvas(&document, &parent)?;
    let mut listeners = vec![wire_canvas_resize(&canvas)?];

    let gpu = frame::init_gpu(&canvas).await;

    let params = Rc::new(RefCell::new(GalaxyParameters::default()));
    let options = Rc::new(RefCell::new(SceneOptions::default()));
    let controls = Rc::new(RefCell::new(OrbitControls::default()));
    let drag = Rc::new(RefCell::new(input::DragState::default()));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        gpu,
        slot: GalaxySlot::new(),
        camera: Camera::default(),
        controls: controls.clone(),
        options: options.clone(),
        canvas: canvas.clone(),
        last_instant: Instant::now(),
    }));
    frame_ctx.borrow_mut().regenerate(&params.borrow());

    let ctx_commit = frame_ctx.clone();
    let on_commit: panel::CommitFn = Rc::new(move |snapshot: &GalaxyParameters| {
        ctx_commit.borrow_mut().regenerate(snapshot);
    });
    let panel = Rc::new(RefCell::new(Some(panel::Panel::mount(
        &document,
        &parent,
        params.clone(),
        options.clone(),
        on_commit,
    )?)));

    listeners.extend(events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        controls,
        drag,
    })?);
    listeners.push(events::wire_global_keydown(&document, panel.clone())?);

    let frame_loop = frame::FrameLoop::start(frame_ctx.clone());
    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            frame_loop,
            frame_ctx,
            listeners,
            panel,
            canvas,
        });
    });
    log::info!("[init] viewport ready");
    Ok(())
}

/// Stop rendering and remove everything `start` added to the page.
#[wasm_bindgen]
pub fn teardown() {
    let Some(app) = APP.with(|app| app.borrow_mut().take()) else {
        return;
    };
    app.frame_loop.stop();
    drop(app.listeners);
    app.panel.borrow_mut().take();
    {
        let mut ctx = app.frame_ctx.borrow_mut();
        ctx.release();
        ctx.gpu = None;
    }
    app.canvas.remove();
    STARTED.store(false, Ordering::SeqCst);
    log::info!("[teardown] done");
}
