use crate::constants::*;
use crate::dom;
use crate::listener::Listeners;
use portfolio_core::GalleryState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct GalleryView {
    document: web::Document,
    state: RefCell<GalleryState>,
    images: Vec<web::Element>,
    tabs: Vec<web::Element>,
    groups: Vec<web::Element>,
    lightbox: Option<web::Element>,
}

impl GalleryView {
    fn render(&self) {
        let state = self.state.borrow();
        let visible = state.visible();
        for (i, image) in self.images.iter().enumerate() {
            dom::set_hidden(image, !visible.contains(&i));
        }
        // Event groups with nothing on the active tab disappear with their heading.
        for group in &self.groups {
            let any = visible.iter().any(|&i| {
                let node: &web::Node = &self.images[i];
                group.contains(Some(node))
            });
            dom::set_hidden(group, !any);
        }
        for tab in &self.tabs {
            let active = tab
                .get_attribute(GALLERY_TAB_ATTR)
                .is_some_and(|c| c.trim().eq_ignore_ascii_case(state.category()));
            let cl = tab.class_list();
            if active {
                _ = cl.add_1(ACTIVE_CLASS);
            } else {
                _ = cl.remove_1(ACTIVE_CLASS);
            }
            _ = tab.set_attribute("aria-selected", if active { "true" } else { "false" });
        }
        self.render_lightbox(state.selected());
    }

    fn render_lightbox(&self, selected: Option<usize>) {
        let Some(lightbox) = &self.lightbox else {
            return;
        };
        let Some(card) = selected.and_then(|i| self.images.get(i)) else {
            dom::set_hidden(lightbox, true);
            _ = lightbox.set_attribute("aria-hidden", "true");
            return;
        };
        let img = card.query_selector("img").ok().flatten();
        let attr = |name: &str| img.as_ref().and_then(|i| i.get_attribute(name)).unwrap_or_default();
        let (src, alt) = (attr("src"), attr("alt"));
        if let Some(target) = self.document.get_element_by_id(LIGHTBOX_IMAGE_ID) {
            _ = target.set_attribute("src", &src);
            _ = target.set_attribute("alt", &alt);
        }
        let title = card.get_attribute(GALLERY_TITLE_ATTR).unwrap_or_else(|| alt.clone());
        if let Some(el) = self.document.get_element_by_id(LIGHTBOX_TITLE_ID) {
            el.set_text_content(Some(&title));
        }
        if let Some(el) = self.document.get_element_by_id(LIGHTBOX_CAPTION_ID) {
            el.set_text_content(card.get_attribute(GALLERY_CAPTION_ATTR).as_deref());
        }
        dom::set_hidden(lightbox, false);
        _ = lightbox.set_attribute("aria-hidden", "false");
    }

    /// Clicks on the dimmed backdrop close; clicks on the content do not.
    fn is_backdrop(&self, ev: &web::Event) -> bool {
        let (Some(lightbox), Some(target)) = (&self.lightbox, ev.target()) else {
            return false;
        };
        target
            .dyn_ref::<web::Node>()
            .is_some_and(|node| lightbox.is_same_node(Some(node)))
    }

    fn on_click(&self, ev: &web::Event) {
        if dom::closest_target(ev, GALLERY_CLOSE_SELECTOR).is_some() || self.is_backdrop(ev) {
            if self.state.borrow_mut().close() {
                self.render();
            }
        } else if let Some(card) = dom::closest_target(ev, GALLERY_IMAGE_SELECTOR) {
            let Some(index) = self.images.iter().position(|i| i.is_same_node(Some(card.as_ref()))) else {
                return;
            };
            if self.state.borrow_mut().select(index) {
                self.render();
            }
        } else if let Some(tab) = dom::closest_target(ev, &format!("[{}]", GALLERY_TAB_ATTR)) {
            let category = tab.get_attribute(GALLERY_TAB_ATTR).unwrap_or_default();
            self.state.borrow_mut().set_category(&category);
            self.render();
        }
    }
}

/// Category tabs and the lightbox for `[data-gallery-image]` cards, if any.
pub fn mount(document: &web::Document) -> anyhow::Result<Option<Listeners>> {
    let images = dom::query_all(document, GALLERY_IMAGE_SELECTOR);
    if images.is_empty() {
        return Ok(None);
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let categories = images
        .iter()
        .map(|c| {
            c.get_attribute(GALLERY_CATEGORY_ATTR)
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase()
        })
        .collect();
    let view = Rc::new(GalleryView {
        document: document.clone(),
        state: RefCell::new(GalleryState::new(categories)),
        tabs: dom::query_all(document, &format!("[{}]", GALLERY_TAB_ATTR)),
        groups: dom::query_all(document, GALLERY_GROUP_SELECTOR),
        lightbox: document.get_element_by_id(LIGHTBOX_ID),
        images,
    });
    if view.lightbox.is_none() {
        log::warn!("[gallery] no #{}; images will not open", LIGHTBOX_ID);
    }
    view.render();
    log::info!(
        "[gallery] {} images, tab `{}`",
        view.images.len(),
        view.state.borrow().category()
    );

    let mut listeners = Listeners::default();
    let v = view.clone();
    listeners.add(document, "click", move |ev| v.on_click(ev));
    listeners.add_typed(&window, "keydown", move |ev: web::KeyboardEvent| {
        if view.state.borrow_mut().handle_key(&ev.key()) {
            view.render();
        }
    });
    Ok(Some(listeners))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::document;
    use wasm_bindgen_test::*;

    fn element(document: &web::Document, html: &str) -> web::HtmlElement {
        let holder = document.create_element("div").unwrap();
        holder.set_inner_html(html);
        holder.first_element_child().unwrap().dyn_into().unwrap()
    }

    #[wasm_bindgen_test]
    fn cards_open_and_backdrop_closes_the_lightbox() {
        let document = document();
        let root = element(
            &document,
            r#"<div>
                <button data-gallery-tab="events">Events</button>
                <button data-gallery-tab="life">Life</button>
                <div data-gallery-image data-gallery-category="events" data-title="Summit">
                    <img src="/a.jpg" alt="Stage">
                </div>
                <div data-gallery-image data-gallery-category="life"><img src="/b.jpg" alt="Beach"></div>
                <div id="gallery-lightbox" class="hidden">
                    <div><img id="gallery-lightbox-image"><h3 id="gallery-lightbox-title"></h3></div>
                    <button data-gallery-close>x</button>
                </div>
            </div>"#,
        );
        document.body().unwrap().append_child(&root).unwrap();
        let listeners = mount(&document).unwrap().unwrap();

        let images = dom::query_all(&document, GALLERY_IMAGE_SELECTOR);
        let lightbox = document.get_element_by_id(LIGHTBOX_ID).unwrap();
        assert!(images[1].class_list().contains(HIDDEN_CLASS));

        images[0].unchecked_ref::<web::HtmlElement>().click();
        assert!(!lightbox.class_list().contains(HIDDEN_CLASS));
        let title = document.get_element_by_id(LIGHTBOX_TITLE_ID).unwrap();
        assert_eq!(title.text_content().as_deref(), Some("Summit"));

        // Clicking the content keeps it open; the backdrop closes it.
        title.unchecked_ref::<web::HtmlElement>().click();
        assert!(!lightbox.class_list().contains(HIDDEN_CLASS));
        lightbox.unchecked_ref::<web::HtmlElement>().click();
        assert!(lightbox.class_list().contains(HIDDEN_CLASS));

        let tab = document.query_selector("[data-gallery-tab=life]").unwrap().unwrap();
        tab.unchecked_ref::<web::HtmlElement>().click();
        assert!(images[0].class_list().contains(HIDDEN_CLASS));
        assert!(!images[1].class_list().contains(HIDDEN_CLASS));

        drop(listeners);
        root.remove();
    }
}
