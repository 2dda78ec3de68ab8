use crate::constants::CANVAS_ID;
use galaxy_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// A DOM listener that unregisters itself when dropped.
///
/// Keeping these in a `Vec` and dropping it is how the host tears down
/// everything it wired.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Current window size in CSS pixels and its device pixel ratio.
pub fn window_viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0)
    };
    Viewport::new(
        dim(window.inner_width()),
        dim(window.inner_height()),
        window.device_pixel_ratio(),
    )
}

/// Match the canvas backing store to the window, with the pixel ratio
/// clamped. Returns the viewport that was applied.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Option<Viewport> {
    let window = web::window()?;
    let viewport = window_viewport(&window);
    let (w_px, h_px) = viewport.physical_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    Some(viewport)
}

/// Create the render canvas and append it to `parent`.
pub fn create_canvas(
    document: &web::Document,
    parent: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a canvas: {:?}", e))?;
    canvas.set_id(CANVAS_ID);
    _ = canvas.set_attribute(
        "style",
        "display:block;position:fixed;top:0;left:0;width:100vw;height:100vh;touch-action:none;outline:none",
    );
    parent
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

/// Mount point by id, falling back to `<body>`.
pub fn mount_parent(document: &web::Document, element_id: &str) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(element_id) {
        return Ok(el);
    }
    document
        .body()
        .map(web::Element::from)
        .ok_or_else(|| anyhow::anyhow!("no #{} and no <body>", element_id))
}
