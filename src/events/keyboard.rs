use crate::dom::EventListener;
use crate::input::{key_action, KeyAction};
use crate::panel::Panel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Global shortcuts. Keys typed into panel inputs are left alone.
pub fn wire_global_keydown(
    document: &web::Document,
    panel: Rc<RefCell<Option<Panel>>>,
) -> anyhow::Result<EventListener> {
    EventListener::new(document, "keydown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if is_text_entry(ev.target()) {
            return;
        }
        match key_action(&ev.key(), ev.ctrl_key() || ev.meta_key()) {
            Some(KeyAction::TogglePanel) => {
                if let Some(p) = panel.borrow().as_ref() {
                    p.toggle_visibility();
                    log::info!("[keys] panel hidden={}", p.is_hidden());
                }
            }
            None => {}
        }
    })
}

fn is_text_entry(target: Option<web::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| matches!(input.type_().as_str(), "text" | "number"))
        .unwrap_or(false)
}
