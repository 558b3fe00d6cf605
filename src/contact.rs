use crate::constants::*;
use crate::dom;
use crate::listener::Listeners;
use crate::overlay;
use portfolio_core::constants::CONTACT_SUBMIT_DELAY_MS;
use portfolio_core::{ContactError, ContactForm, Field};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn control_value(el: &web::Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<web::HtmlTextAreaElement>().map(|t| t.value())
}

fn clear_control(el: &web::Element) {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_value("");
    } else if let Some(text) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        text.set_value("");
    }
}

/// Resolves after `ms` milliseconds via `setTimeout`.
async fn sleep_ms(ms: i32) -> anyhow::Result<()> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let scheduled = web::window().map(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
        });
        if !matches!(scheduled, Some(Ok(_))) {
            _ = reject.call0(&JsValue::NULL);
        }
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("timer: {:?}", e))?;
    Ok(())
}

struct ContactView {
    document: web::Document,
    form: RefCell<ContactForm>,
    controls: Vec<(Field, web::Element)>,
    submit: Option<web::Element>,
}

impl ContactView {
    fn sync_from_dom(&self) {
        let mut form = self.form.borrow_mut();
        for (field, el) in &self.controls {
            if let Some(v) = control_value(el) {
                form.set(*field, v);
            }
        }
    }

    fn set_busy(&self, busy: bool) {
        let Some(button) = &self.submit else {
            return;
        };
        if busy {
            _ = button.set_attribute("disabled", "");
            button.set_text_content(Some(CONTACT_SENDING_TEXT));
        } else {
            _ = button.remove_attribute("disabled");
            button.set_text_content(Some(CONTACT_SEND_TEXT));
        }
    }

    fn submit(self: &Rc<Self>) {
        self.sync_from_dom();
        let result = self.form.borrow_mut().begin_submit();
        match result {
            Ok(()) => {
                overlay::set_status(&self.document, CONTACT_STATUS_ID, "", "idle");
                self.set_busy(true);
                let view = self.clone();
                spawn_local(async move {
                    if let Err(e) = sleep_ms(CONTACT_SUBMIT_DELAY_MS).await {
                        log::warn!("[contact] {}", e);
                    }
                    view.complete();
                });
            }
            Err(ContactError::Busy) => {}
            Err(e @ ContactError::MissingField(_)) => {
                overlay::set_status(&self.document, CONTACT_STATUS_ID, &e.to_string(), "error");
            }
        }
    }

    fn complete(&self) {
        self.form.borrow_mut().finish_submit();
        for (_, el) in &self.controls {
            clear_control(el);
        }
        self.set_busy(false);
        overlay::set_status(&self.document, CONTACT_STATUS_ID, CONTACT_SUCCESS_TEXT, "success");
        log::info!("[contact] message accepted");
    }
}

/// Wire the contact form if the page has one. Returns `Ok(None)` otherwise.
pub fn mount(document: &web::Document) -> anyhow::Result<Option<Listeners>> {
    let Some(form_el) = document.get_element_by_id(CONTACT_FORM_ID) else {
        return Ok(None);
    };
    let controls = dom::query_all(document, &format!("#{} [name]", CONTACT_FORM_ID))
        .into_iter()
        .filter_map(|el| {
            let field = el.get_attribute("name").and_then(|n| Field::from_name(&n))?;
            Some((field, el))
        })
        .collect::<Vec<_>>();
    let view = Rc::new(ContactView {
        document: document.clone(),
        form: RefCell::new(ContactForm::new()),
        controls,
        submit: document.get_element_by_id(CONTACT_SUBMIT_ID),
    });

    let mut listeners = Listeners::default();
    let v = view.clone();
    listeners.add(&form_el, "input", move |ev| {
        let Some(el) = dom::closest_target(ev, "[name]") else {
            return;
        };
        let Some(field) = el.get_attribute("name").and_then(|n| Field::from_name(&n)) else {
            return;
        };
        if let Some(value) = control_value(&el) {
            v.form.borrow_mut().set(field, value);
        }
    });
    listeners.add_blocking(&form_el, "submit", move |ev| {
        ev.prevent_default();
        view.submit();
    });
    Ok(Some(listeners))
}
