use crate::constants::*;
use crate::dom;
use crate::events;
use crate::frame::AnimationLoop;
use crate::listener::Listeners;
use crate::overlay;
use instant::Instant;
use portfolio_core::{
    enter_pose, Pager, ScrollMetrics, ScrollState, Section, SlidePose, Transition,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Clone, Debug)]
pub enum NavRequest {
    Index(usize),
    Step(isize),
    Id(String),
}

/// DOM side of the section pager: panels, indicator dots, URL fragment.
pub struct PagerController {
    pager: RefCell<Pager>,
    panels: Vec<web::HtmlElement>,
    dots: RefCell<Vec<web::Element>>,
    document: web::Document,
    last_instant: Cell<Instant>,
    on_section_change: RefCell<Option<Box<dyn Fn(usize)>>>,
}

impl PagerController {
    /// Collect `[data-section]` panels in document order and pick the initial
    /// one from the URL fragment.
    pub fn discover(document: &web::Document) -> anyhow::Result<Rc<Self>> {
        let mut sections = Vec::new();
        let mut panels = Vec::new();
        for el in dom::query_all(document, SECTION_SELECTOR) {
            let id = el.id();
            if id.is_empty() {
                log::warn!("[pager] skipping section without an id");
                continue;
            }
            let label = el.get_attribute(SECTION_LABEL_ATTR).unwrap_or_else(|| id.clone());
            let panel = el
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            sections.push(Section::new(id, label));
            panels.push(panel);
        }

        let fragment = web::window().and_then(|w| w.location().hash().ok());
        let pager = Pager::with_fragment(sections, fragment.as_deref())?;
        let initial = pager.current_index();
        log::info!(
            "[pager] {} sections, starting at `{}`",
            pager.len(),
            pager.current_section().id
        );

        for (i, panel) in panels.iter().enumerate() {
            dom::set_hidden(panel, i != initial);
            apply_pose(panel, SlidePose::REST);
        }

        Ok(Rc::new(Self {
            pager: RefCell::new(pager),
            panels,
            dots: RefCell::new(Vec::new()),
            document: document.clone(),
            last_instant: Cell::new(Instant::now()),
            on_section_change: RefCell::new(None),
        }))
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.pager.borrow().current_index()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pager.borrow().len()
    }

    pub fn section_id(&self, index: usize) -> Option<String> {
        self.pager.borrow().sections().get(index).map(|s| s.id.clone())
    }

    /// Called with the new index each time a section finishes sliding out.
    pub fn set_on_section_change(&self, f: impl Fn(usize) + 'static) {
        *self.on_section_change.borrow_mut() = Some(Box::new(f));
    }

    /// Returns whether the request started a transition.
    pub fn request(&self, req: NavRequest) -> bool {
        let transition = {
            let mut pager = self.pager.borrow_mut();
            match &req {
                NavRequest::Index(i) => pager.navigate(*i),
                NavRequest::Step(d) => pager.navigate_by(*d),
                NavRequest::Id(id) => pager.navigate_to_id(id),
            }
        };
        match transition {
            Some(t) => {
                self.begin(&t);
                true
            }
            None => false,
        }
    }

    fn begin(&self, t: &Transition) {
        log::info!("[pager] {} -> {} (`{}`)", t.from, t.to, t.section_id);
        self.push_fragment(&t.section_id);
        self.highlight_dot(t.to);
        self.last_instant.set(Instant::now());
    }

    /// Mirror the section into the URL without reloading or scrolling.
    fn push_fragment(&self, id: &str) {
        let Some(history) = web::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", id))) {
            log::warn!("[pager] pushState failed: {:?}", e);
        }
    }

    fn highlight_dot(&self, index: usize) {
        for (i, dot) in self.dots.borrow().iter().enumerate() {
            let cl = dot.class_list();
            if i == index {
                _ = cl.add_1(ACTIVE_CLASS);
                _ = dot.set_attribute("aria-current", "page");
            } else {
                _ = cl.remove_1(ACTIVE_CLASS);
                _ = dot.remove_attribute("aria-current");
            }
        }
    }

    /// One indicator button per section, in section order.
    fn build_dots(self: &Rc<Self>, listeners: &mut Listeners) -> anyhow::Result<()> {
        let Some(container) = self.document.get_element_by_id(NAV_DOTS_ID) else {
            return Ok(());
        };
        container.set_inner_html("");
        let sections = self.pager.borrow().sections().to_vec();
        let mut dots = Vec::with_capacity(sections.len());
        for (i, section) in sections.iter().enumerate() {
            let dot = self
                .document
                .create_element("button")
                .map_err(|e| anyhow::anyhow!("create dot: {:?}", e))?;
            _ = dot.set_attribute("type", "button");
            _ = dot.set_attribute("aria-label", &format!("Go to {}", section.label));
            _ = container.append_child(&dot);
            let ctl = self.clone();
            listeners.add(&dot, "click", move |_| {
                ctl.request(NavRequest::Index(i));
            });
            dots.push(dot);
        }
        *self.dots.borrow_mut() = dots;
        self.highlight_dot(self.current_index());
        Ok(())
    }

    /// Advance the slide by the wall-clock time since the previous frame.
    pub fn frame(&self) {
        let now = Instant::now();
        let dt = (now - self.last_instant.get())
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant.set(now);

        let (slide, direction) = {
            let mut pager = self.pager.borrow_mut();
            (pager.tick(dt), pager.direction())
        };

        if let Some(exit) = slide.exit {
            if let Some(panel) = self.panels.get(exit.index) {
                apply_pose(panel, exit.pose);
                if slide.completed.is_some() {
                    dom::set_hidden(panel, true);
                    apply_pose(panel, SlidePose::REST);
                }
            }
        }
        if let Some(index) = slide.completed {
            if let Some(panel) = self.panels.get(index) {
                panel.set_scroll_top(0);
                apply_pose(panel, enter_pose(direction, 0.0));
                dom::set_hidden(panel, false);
            }
            self.refresh_scroll_hints();
            if let Some(f) = self.on_section_change.borrow().as_ref() {
                f(index);
            }
        }
        if let Some(enter) = slide.enter {
            if let Some(panel) = self.panels.get(enter.index) {
                apply_pose(panel, enter.pose);
            }
        }
    }

    /// Recompute overflow/boundary state of the active section's content.
    pub fn refresh_scroll_hints(&self) {
        let Some(panel) = self.panels.get(self.current_index()) else {
            return;
        };
        let state = ScrollState::measure(ScrollMetrics {
            scroll_top: panel.scroll_top() as f64,
            client_height: panel.client_height() as f64,
            scroll_height: panel.scroll_height() as f64,
        });
        overlay::update_scroll_hints(&self.document, state);
    }
}

fn apply_pose(panel: &web::HtmlElement, pose: SlidePose) {
    if pose == SlidePose::REST {
        dom::set_style(panel, "transform", "");
        dom::set_style(panel, "opacity", "");
    } else {
        dom::set_style(
            panel,
            "transform",
            &format!("translateX({:.3}%)", pose.offset * 100.0),
        );
        dom::set_style(panel, "opacity", &format!("{:.3}", pose.opacity));
    }
}

/// The pager and everything it registered; dropping it tears all of it down.
pub struct MountedPager {
    pub controller: Rc<PagerController>,
    _frame_loop: AnimationLoop,
    _listeners: Listeners,
}

pub fn mount(document: &web::Document) -> anyhow::Result<MountedPager> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let controller = PagerController::discover(document)?;
    let mut listeners = Listeners::default();

    controller.build_dots(&mut listeners)?;

    // Delegated clicks: header/menu links, the "next" affordance, menu toggle.
    let ctl = controller.clone();
    let doc = document.clone();
    listeners.add_blocking(document, "click", move |ev| {
        if let Some(el) = dom::closest_target(ev, &format!("[{}]", NAV_TARGET_ATTR)) {
            ev.prevent_default();
            if let Some(id) = el.get_attribute(NAV_TARGET_ATTR) {
                ctl.request(NavRequest::Id(id));
            }
            overlay::close_menu(&doc);
        } else if dom::closest_target(ev, NAV_NEXT_SELECTOR).is_some() {
            ctl.request(NavRequest::Step(1));
        } else if dom::closest_target(ev, &format!("#{}", MOBILE_MENU_TOGGLE_ID)).is_some() {
            overlay::toggle_menu(&doc);
        }
    });

    events::wire_global_keydown(&mut listeners, controller.clone(), document.clone())?;

    for panel in controller.panels.iter() {
        let ctl = controller.clone();
        listeners.add(panel, "scroll", move |_| ctl.refresh_scroll_hints());
    }
    let ctl = controller.clone();
    listeners.add(&window, "resize", move |_| ctl.refresh_scroll_hints());

    let ctl = controller.clone();
    let frame_loop = AnimationLoop::new(move || ctl.frame());
    frame_loop.start();
    controller.refresh_scroll_hints();

    Ok(MountedPager {
        controller,
        _frame_loop: frame_loop,
        _listeners: listeners,
    })
}
