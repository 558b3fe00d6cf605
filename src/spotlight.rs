use crate::constants::*;
use crate::dom;
use crate::listener::Listeners;
use glam::Vec2;
use portfolio_core::spotlight_properties;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep each `[data-spotlight]` card's highlight under the pointer. One
/// delegated listener serves every card, including ones added later.
pub fn mount(document: &web::Document) -> Option<Listeners> {
    if dom::query_all(document, SPOTLIGHT_SELECTOR).is_empty() {
        return None;
    }
    let mut listeners = Listeners::default();
    listeners.add_typed(document, "pointermove", |ev: web::PointerEvent| {
        let Some(card) = dom::closest_target(&ev, SPOTLIGHT_SELECTOR) else {
            return;
        };
        let Ok(card) = card.dyn_into::<web::HtmlElement>() else {
            return;
        };
        let rect = card.get_bounding_client_rect();
        let color = card.get_attribute(SPOTLIGHT_ATTR);
        let properties = spotlight_properties(
            Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
            Vec2::new(rect.left() as f32, rect.top() as f32),
            color.as_deref(),
        );
        for (name, value) in properties {
            dom::set_style(&card, name, &value);
        }
    });
    Some(listeners)
}
