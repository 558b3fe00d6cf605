use crate::constants::*;
use crate::dom;
use crate::events;
use crate::frame::AnimationLoop;
use crate::listener::Listeners;
use portfolio_core::CursorFollower;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct MountedCursor {
    frame_loop: AnimationLoop,
    _listeners: Listeners,
    body: Option<web::HtmlElement>,
}

impl Drop for MountedCursor {
    fn drop(&mut self) {
        self.frame_loop.stop();
        if let Some(body) = &self.body {
            dom::set_style(body, "cursor", "");
        }
    }
}

/// Replace the system cursor with the dot/ring pair when both are present.
pub fn mount(document: &web::Document) -> anyhow::Result<Option<MountedCursor>> {
    let (Some(dot), Some(ring)) = (
        dom::element_by_id::<web::HtmlElement>(document, CURSOR_DOT_ID),
        dom::element_by_id::<web::HtmlElement>(document, CURSOR_RING_ID),
    ) else {
        return Ok(None);
    };

    let cursor = Rc::new(RefCell::new(CursorFollower::default()));
    let mut listeners = Listeners::default();
    events::wire_cursor(&mut listeners, cursor.clone())?;

    let body = document.body();
    if let Some(body) = &body {
        dom::set_style(body, "cursor", "none");
    }

    let frame_loop = AnimationLoop::new(move || {
        let c = {
            let mut c = cursor.borrow_mut();
            c.step();
            *c
        };
        dom::set_style(&dot, "transform", &c.dot_transform());
        dom::set_style(&ring, "transform", &c.ring_transform());
        let (dot_alpha, ring_alpha) = if c.hidden {
            (0.0, 0.0)
        } else {
            (1.0, CURSOR_RING_OPACITY)
        };
        dom::set_style(&dot, "opacity", &dot_alpha.to_string());
        dom::set_style(&ring, "opacity", &ring_alpha.to_string());
    });
    frame_loop.start();

    Ok(Some(MountedCursor {
        frame_loop,
        _listeners: listeners,
        body,
    }))
}
