use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::wasm_bindgen_test_configure;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

/// Resolves on the next animation frame, after callbacks requested earlier.
pub async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(resolve.unchecked_ref());
        }
    });
    _ = JsFuture::from(promise).await;
}

pub fn document() -> web::Document {
    web::window().unwrap().document().unwrap()
}
