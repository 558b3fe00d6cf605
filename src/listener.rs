use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Owns a group of DOM listeners; clearing (or dropping) removes all of them.
#[derive(Default)]
pub struct Listeners(Vec<EventListener>);

impl Listeners {
    /// Passive listener; `preventDefault` inside `handler` has no effect.
    pub fn add<T, F>(&mut self, target: &T, kind: &'static str, handler: F)
    where
        T: AsRef<web::EventTarget>,
        F: FnMut(&web::Event) + 'static,
    {
        self.0.push(EventListener::new(target.as_ref(), kind, handler));
    }

    /// Listener that may cancel the event's default action.
    pub fn add_blocking<T, F>(&mut self, target: &T, kind: &'static str, handler: F)
    where
        T: AsRef<web::EventTarget>,
        F: FnMut(&web::Event) + 'static,
    {
        self.0.push(EventListener::new_with_options(
            target.as_ref(),
            kind,
            EventListenerOptions::enable_prevent_default(),
            handler,
        ));
    }

    /// Like [`Listeners::add`] but hands the handler the concrete event type;
    /// events of any other type are skipped.
    pub fn add_typed<T, E, F>(&mut self, target: &T, kind: &'static str, mut handler: F)
    where
        T: AsRef<web::EventTarget>,
        E: JsCast,
        F: FnMut(E) + 'static,
    {
        self.add(target, kind, move |ev: &web::Event| {
            if let Ok(ev) = ev.clone().dyn_into::<E>() {
                handler(ev);
            }
        });
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
