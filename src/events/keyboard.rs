use crate::listener::Listeners;
use crate::overlay;
use crate::pager::{NavRequest, PagerController};
use portfolio_core::step_for_key;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys typed into form controls belong to the control, not the pager.
fn typing_in_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| {
            matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
                || el.has_attribute("contenteditable")
        })
        .unwrap_or(false)
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    pager: &PagerController,
    document: &web::Document,
) {
    let key = ev.key();
    if key == "Escape" {
        if overlay::menu_is_open(document) {
            overlay::close_menu(document);
        }
        return;
    }
    if typing_in_field(ev) {
        return;
    }
    if let Some(step) = step_for_key(&key) {
        // Ignored by the pager while a slide is in flight.
        pager.request(NavRequest::Step(step));
    }
}

pub fn wire_global_keydown(
    listeners: &mut Listeners,
    pager: Rc<PagerController>,
    document: web::Document,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    listeners.add_typed(&window, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &pager, &document);
    });
    Ok(())
}
