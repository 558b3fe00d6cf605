use crate::dom;
use crate::listener::Listeners;
use portfolio_core::{CursorFollower, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Track the pointer over a field canvas. Moves anywhere in the window count
/// (the canvases are full-bleed backgrounds); leaving the page deactivates.
pub fn wire_field_pointer(
    listeners: &mut Listeners,
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let root = dom::window_document()
        .and_then(|d| d.document_element())
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;

    let canvas_move = canvas.clone();
    let pointer_move = pointer.clone();
    listeners.add_typed(&window, "pointermove", move |ev: web::PointerEvent| {
        let pos = dom::pointer_canvas_px(&ev, &canvas_move);
        *pointer_move.borrow_mut() = PointerState { pos, active: true };
    });

    let pointer_leave = pointer.clone();
    listeners.add(&root, "pointerleave", move |_| {
        pointer_leave.borrow_mut().active = false;
    });

    listeners.add(&window, "blur", move |_| {
        pointer.borrow_mut().active = false;
    });
    Ok(())
}

pub fn wire_cursor(
    listeners: &mut Listeners,
    cursor: Rc<RefCell<CursorFollower>>,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;

    let c = cursor.clone();
    listeners.add_typed(&window, "pointermove", move |ev: web::PointerEvent| {
        c.borrow_mut()
            .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
    });
    let c = cursor.clone();
    listeners.add(&window, "pointerdown", move |_| c.borrow_mut().clicked = true);
    let c = cursor.clone();
    listeners.add(&window, "pointerup", move |_| c.borrow_mut().clicked = false);

    // Delegated hover detection also covers links added after mount.
    let c = cursor.clone();
    listeners.add(&document, "pointerover", move |ev| {
        c.borrow_mut().hovering_link =
            dom::closest_target(ev, crate::constants::CURSOR_LINK_SELECTOR).is_some();
    });

    let c = cursor.clone();
    listeners.add(&root, "pointerleave", move |_| c.borrow_mut().hidden = true);
    listeners.add(&root, "pointerenter", move |_| cursor.borrow_mut().hidden = false);
    Ok(())
}
