#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::field::Renderer;
use crate::listener::Listeners;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
mod cursor;
mod dom;
mod events;
mod field;
mod frame;
mod gallery;
mod listener;
mod overlay;
mod pager;
mod projects;
mod render;
mod spotlight;
#[cfg(test)]
mod test_util;

/// A canvas renderer and the id of the section it lives in, if any.
/// Renderers outside every section run regardless of navigation.
struct Mounted {
    section: Option<String>,
    renderer: Renderer,
}

type Renderers = Rc<RefCell<Vec<Mounted>>>;

struct App {
    _pager: Option<pager::MountedPager>,
    renderers: Renderers,
    _contact: Option<Listeners>,
    _projects: Option<Listeners>,
    _gallery: Option<Listeners>,
    _spotlight: Option<Listeners>,
    _cursor: Option<cursor::MountedCursor>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn mount_renderers(document: &web::Document) -> Renderers {
    let mut mounted = Vec::new();
    for el in dom::query_all(document, CANVAS_SELECTOR) {
        let section = el
            .closest(SECTION_SELECTOR)
            .ok()
            .flatten()
            .map(|s| s.id())
            .filter(|id| !id.is_empty());
        let Ok(canvas) = el.dyn_into::<web::HtmlCanvasElement>() else {
            continue;
        };
        match Renderer::create(canvas) {
            Ok(renderer) => mounted.push(Mounted { section, renderer }),
            // A broken canvas only costs its own animation.
            Err(e) => log::warn!("[field] skipping canvas: {:#}", e),
        }
    }
    log::info!("[field] {} renderers", mounted.len());
    Rc::new(RefCell::new(mounted))
}

/// Run the renderers of the active section (and section-less ones); park the rest.
fn activate_renderers(renderers: &Renderers, active: Option<&str>) {
    for m in renderers.borrow_mut().iter_mut() {
        let wanted = match (&m.section, active) {
            (None, _) => true,
            (Some(s), Some(a)) => s == a,
            (Some(_), None) => true,
        };
        if wanted {
            if let Err(e) = m.renderer.start() {
                log::warn!("[field] start failed: {:#}", e);
            }
        } else {
            m.renderer.stop();
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let renderers = mount_renderers(&document);

    let pager = match pager::mount(&document) {
        Ok(p) => Some(p),
        Err(e) => {
            log::warn!("[pager] disabled: {:#}", e);
            None
        }
    };

    match &pager {
        Some(p) => {
            let ctl = &p.controller;
            activate_renderers(&renderers, ctl.section_id(ctl.current_index()).as_deref());
            let on_change = renderers.clone();
            let ids: Vec<Option<String>> = (0..ctl.len()).map(|i| ctl.section_id(i)).collect();
            ctl.set_on_section_change(move |i| {
                activate_renderers(&on_change, ids.get(i).and_then(|id| id.as_deref()));
            });
        }
        None => activate_renderers(&renderers, None),
    }

    let contact = contact::mount(&document).unwrap_or_else(|e| {
        log::warn!("[contact] disabled: {:#}", e);
        None
    });
    let projects = projects::mount(&document).unwrap_or_else(|e| {
        log::warn!("[projects] disabled: {:#}", e);
        None
    });
    let gallery = gallery::mount(&document).unwrap_or_else(|e| {
        log::warn!("[gallery] disabled: {:#}", e);
        None
    });
    let spotlight = spotlight::mount(&document);
    let cursor = cursor::mount(&document).unwrap_or_else(|e| {
        log::warn!("[cursor] disabled: {:#}", e);
        None
    });

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            _pager: pager,
            renderers,
            _contact: contact,
            _projects: projects,
            _gallery: gallery,
            _spotlight: spotlight,
            _cursor: cursor,
        });
    });
    Ok(())
}

/// Stop every animation loop and remove every listener registered by `start`.
#[wasm_bindgen]
pub fn teardown() {
    APP.with(|app| {
        if let Some(app) = app.borrow_mut().take() {
            for m in app.renderers.borrow_mut().iter_mut() {
                m.renderer.stop();
            }
            // The menu locks body scrolling; leave the page scrollable.
            if let Some(document) = dom::window_document() {
                overlay::close_menu(&document);
            }
            log::info!("portfolio-web torn down");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::document;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn teardown_closes_the_menu_and_unlocks_scrolling() {
        let document = document();
        let menu = document.create_element("div").unwrap();
        menu.set_id(MOBILE_MENU_ID);
        document.body().unwrap().append_child(&menu).unwrap();
        overlay::open_menu(&document);
        assert!(overlay::menu_is_open(&document));

        APP.with(|app| {
            *app.borrow_mut() = Some(App {
                _pager: None,
                renderers: Rc::new(RefCell::new(Vec::new())),
                _contact: None,
                _projects: None,
                _gallery: None,
                _spotlight: None,
                _cursor: None,
            });
        });
        teardown();

        assert!(!overlay::menu_is_open(&document));
        let body = document.body().unwrap();
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "");
        assert!(APP.with(|app| app.borrow().is_none()));
        menu.remove();
    }
}
