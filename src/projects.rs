use crate::constants::*;
use crate::dom;
use crate::listener::Listeners;
use portfolio_core::{Filter, ProjectBrowser};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct ProjectView {
    document: web::Document,
    browser: RefCell<ProjectBrowser>,
    cards: Vec<web::Element>,
    filters: Vec<web::Element>,
}

impl ProjectView {
    fn render(&self) {
        let browser = self.browser.borrow();
        let visible = browser.visible();
        for (i, card) in self.cards.iter().enumerate() {
            dom::set_hidden(card, !visible.contains(&i));
        }
        let current = browser.filter();
        for button in &self.filters {
            let f: Filter = button
                .get_attribute(PROJECT_FILTER_ATTR)
                .unwrap_or_default()
                .parse()
                .unwrap_or_default();
            let cl = button.class_list();
            if &f == current {
                _ = cl.add_1(ACTIVE_CLASS);
            } else {
                _ = cl.remove_1(ACTIVE_CLASS);
            }
        }
        self.render_pages(&browser);
    }

    /// Previous, one button per page, Next.
    fn render_pages(&self, browser: &ProjectBrowser) {
        let Some(container) = self.document.get_element_by_id(PROJECT_PAGES_ID) else {
            return;
        };
        let total = browser.total_pages();
        container.set_inner_html("");
        dom::set_hidden(&container, total <= 1);
        if total <= 1 {
            return;
        }
        if let Some(prev) = self.page_button(PROJECT_STEP_ATTR, "-1", "Previous") {
            toggle_disabled(&prev, !browser.has_prev());
            _ = container.append_child(&prev);
        }
        for n in 1..=total {
            let label = n.to_string();
            let Some(button) = self.page_button(PROJECT_PAGE_ATTR, &label, &label) else {
                continue;
            };
            if n == browser.page() {
                _ = button.class_list().add_1(ACTIVE_CLASS);
                _ = button.set_attribute("aria-current", "page");
            }
            _ = container.append_child(&button);
        }
        if let Some(next) = self.page_button(PROJECT_STEP_ATTR, "1", "Next") {
            toggle_disabled(&next, !browser.has_next());
            _ = container.append_child(&next);
        }
    }

    fn page_button(&self, attr: &str, value: &str, text: &str) -> Option<web::Element> {
        let button = self.document.create_element("button").ok()?;
        _ = button.set_attribute("type", "button");
        _ = button.set_attribute(attr, value);
        button.set_text_content(Some(text));
        Some(button)
    }
}

fn toggle_disabled(button: &web::Element, disabled: bool) {
    if disabled {
        _ = button.set_attribute("disabled", "");
    } else {
        _ = button.remove_attribute("disabled");
    }
}

/// Filter and paginate `[data-project]` cards if the page has any.
pub fn mount(document: &web::Document) -> anyhow::Result<Option<Listeners>> {
    let cards = dom::query_all(document, PROJECT_CARD_SELECTOR);
    if cards.is_empty() {
        return Ok(None);
    }
    let categories = cards
        .iter()
        .map(|c| {
            c.get_attribute(PROJECT_CATEGORY_ATTR)
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase()
        })
        .collect();
    let view = Rc::new(ProjectView {
        document: document.clone(),
        browser: RefCell::new(ProjectBrowser::new(categories)),
        cards,
        filters: dom::query_all(document, &format!("[{}]", PROJECT_FILTER_ATTR)),
    });
    view.render();
    log::info!("[projects] {} cards", view.cards.len());

    let mut listeners = Listeners::default();
    // Page buttons are regenerated on every render, so clicks are delegated.
    listeners.add(document, "click", move |ev| {
        if let Some(el) = dom::closest_target(ev, &format!("[{}]", PROJECT_FILTER_ATTR)) {
            let filter: Filter = el
                .get_attribute(PROJECT_FILTER_ATTR)
                .unwrap_or_default()
                .parse()
                .unwrap_or_default();
            view.browser.borrow_mut().set_filter(filter);
            view.render();
        } else if let Some(el) = dom::closest_target(ev, &format!("#{} [{}]", PROJECT_PAGES_ID, PROJECT_STEP_ATTR)) {
            {
                let mut browser = view.browser.borrow_mut();
                match el.get_attribute(PROJECT_STEP_ATTR).as_deref() {
                    Some("-1") => browser.prev(),
                    Some("1") => browser.next(),
                    _ => return,
                }
            }
            view.render();
        } else if let Some(el) = dom::closest_target(ev, &format!("#{} [{}]", PROJECT_PAGES_ID, PROJECT_PAGE_ATTR)) {
            let Some(page) = el.get_attribute(PROJECT_PAGE_ATTR).and_then(|p| p.parse::<usize>().ok()) else {
                return;
            };
            view.browser.borrow_mut().set_page(page);
            view.render();
        }
    });
    Ok(Some(listeners))
}
