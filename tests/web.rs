#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_test::*;

#[allow(dead_code)]
mod listener {
    include!("../src/listener.rs");
}

use listener::Listeners;

wasm_bindgen_test_configure!(run_in_browser);

fn cancelable(kind: &str) -> web_sys::Event {
    let init = web_sys::EventInit::new();
    init.set_cancelable(true);
    web_sys::Event::new_with_event_init_dict(kind, &init).unwrap()
}

/// Returns `false` when a handler cancelled the event.
fn fire(target: &web_sys::EventTarget, kind: &str) -> bool {
    target.dispatch_event(&cancelable(kind)).unwrap()
}

fn div() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    document.create_element("div").unwrap()
}

#[wasm_bindgen_test]
fn listeners_detach_on_clear() {
    let el = div();
    let target: &web_sys::EventTarget = el.as_ref();
    let hits = Rc::new(Cell::new(0));

    let mut listeners = Listeners::default();
    let h = hits.clone();
    listeners.add(&el, "ping", move |_| h.set(h.get() + 1));
    assert_eq!(listeners.len(), 1);

    fire(target, "ping");
    assert_eq!(hits.get(), 1);

    listeners.clear();
    assert_eq!(listeners.len(), 0);
    fire(target, "ping");
    assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
fn listeners_detach_on_drop() {
    let el = div();
    let hits = Rc::new(Cell::new(0));
    {
        let mut listeners = Listeners::default();
        let h = hits.clone();
        listeners.add(&el, "ping", move |_| h.set(h.get() + 1));
        fire(el.as_ref(), "ping");
    }
    fire(el.as_ref(), "ping");
    assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
fn typed_listener_skips_other_event_types() {
    let el = div();
    let target: &web_sys::EventTarget = el.as_ref();
    let hits = Rc::new(Cell::new(0));

    let mut listeners = Listeners::default();
    let h = hits.clone();
    listeners.add_typed(&el, "poke", move |_: web_sys::KeyboardEvent| h.set(h.get() + 1));

    // A plain Event is not a KeyboardEvent.
    fire(target, "poke");
    assert_eq!(hits.get(), 0);

    let key = web_sys::KeyboardEvent::new("poke").unwrap();
    target.dispatch_event(&key).unwrap();
    assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
fn only_blocking_listeners_cancel_default() {
    let el = div();
    let mut listeners = Listeners::default();
    listeners.add(&el, "passive", |ev| ev.prevent_default());
    listeners.add_blocking(&el, "blocking", |ev| ev.prevent_default());

    assert!(fire(el.as_ref(), "passive"));
    assert!(!fire(el.as_ref(), "blocking"));
}
