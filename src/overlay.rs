use crate::constants::*;
use crate::dom;
use portfolio_core::ScrollState;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn open_menu(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MOBILE_MENU_ID) {
        dom::set_hidden(&el, false);
        _ = el.set_attribute("aria-hidden", "false");
        lock_body_scroll(document, true);
    }
}

#[inline]
pub fn close_menu(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MOBILE_MENU_ID) {
        dom::set_hidden(&el, true);
        _ = el.set_attribute("aria-hidden", "true");
        lock_body_scroll(document, false);
    }
}

#[inline]
pub fn menu_is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(MOBILE_MENU_ID)
        .map(|el| !el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(false)
}

#[inline]
pub fn toggle_menu(document: &web::Document) {
    if menu_is_open(document) {
        close_menu(document);
    } else {
        open_menu(document);
    }
}

fn lock_body_scroll(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        dom::set_style(&body, "overflow", if locked { "hidden" } else { "" });
    }
}

/// Show the up/down affordances for the active section's scroll position.
pub fn update_scroll_hints(document: &web::Document, state: ScrollState) {
    if let Some(el) = document.get_element_by_id(SCROLL_HINT_UP_ID) {
        dom::set_hidden(&el, !state.show_up_hint());
    }
    if let Some(el) = document.get_element_by_id(SCROLL_HINT_DOWN_ID) {
        dom::set_hidden(&el, !state.show_down_hint());
    }
}

/// Write an inline status line (contact form feedback and the like).
pub fn set_status(document: &web::Document, id: &str, text: &str, kind: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
        _ = el.set_attribute("data-status", kind);
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            html.set_hidden(text.is_empty());
        }
    }
}
