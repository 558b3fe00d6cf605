use crate::constants::*;
use crate::dom;
use crate::events;
use crate::frame::AnimationLoop;
use crate::listener::Listeners;
use crate::render::{self, Surface};
use portfolio_core::constants::THREAD_TRAIL_ALPHA;
use portfolio_core::{
    parse_rgb, ClearMode, Link, ParticleConfig, ParticleField, PointerState, Preset, ThreadConfig,
    ThreadField,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Something drawn onto a canvas once per frame.
pub trait Scene {
    fn resize(&mut self, width: f32, height: f32);
    /// Clear, advance, and draw one frame.
    fn frame(&mut self, surface: &Surface, pointer: PointerState);
}

pub struct ParticleScene {
    field: ParticleField,
    rng: StdRng,
    links: Vec<Link>,
}

impl ParticleScene {
    pub fn new(config: ParticleConfig, width: f32, height: f32) -> anyhow::Result<Self> {
        let mut rng = StdRng::from_entropy();
        let field = ParticleField::new(config, width, height, &mut rng)?;
        Ok(Self {
            field,
            rng,
            links: Vec::new(),
        })
    }
}

impl Scene for ParticleScene {
    fn resize(&mut self, width: f32, height: f32) {
        self.field.resize(width, height, &mut self.rng);
    }

    fn frame(&mut self, surface: &Surface, pointer: PointerState) {
        render::clear(surface, self.field.config().clear);
        self.field.step(pointer);
        render::draw_particles(surface, &self.field);
        if self.field.connections_due() {
            self.field.connections(&mut self.links);
            render::draw_links(surface, &self.field, &self.links);
        }
        if self.field.vignette_due() {
            render::draw_vignette(surface);
        }
    }
}

pub struct ThreadScene {
    field: ThreadField,
}

impl ThreadScene {
    pub fn new(config: ThreadConfig, width: f32, height: f32) -> anyhow::Result<Self> {
        let mut rng = StdRng::from_entropy();
        let field = ThreadField::new(config, width, height, &mut rng)?;
        Ok(Self { field })
    }
}

impl Scene for ThreadScene {
    fn resize(&mut self, width: f32, height: f32) {
        self.field.resize(width, height);
    }

    fn frame(&mut self, surface: &Surface, pointer: PointerState) {
        render::clear(surface, ClearMode::Trail(THREAD_TRAIL_ALPHA));
        let (w, h) = self.field.size();
        let normalized = (pointer.active && w > 0.0 && h > 0.0)
            .then(|| pointer.pos / glam::Vec2::new(w, h));
        self.field.step(normalized);
        render::draw_threads(surface, &self.field);
    }
}

/// Build the scene requested by a canvas's `data-*` attributes.
pub fn scene_for_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Box<dyn Scene>> {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    if let Some(name) = canvas.get_attribute(PARTICLES_ATTR) {
        let preset: Preset = name.parse()?;
        return Ok(Box::new(ParticleScene::new(
            ParticleConfig::preset(preset),
            w,
            h,
        )?));
    }
    if let Some(count) = canvas.get_attribute(THREADS_ATTR) {
        let mut config = ThreadConfig::default();
        if !count.trim().is_empty() {
            config.count = count
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("{}=\"{}\": {}", THREADS_ATTR, count, e))?;
        }
        if let Some(amp) = canvas.get_attribute(AMPLITUDE_ATTR) {
            config.amplitude = amp
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("{}=\"{}\": {}", AMPLITUDE_ATTR, amp, e))?;
        }
        if let Some(color) = canvas.get_attribute(COLOR_ATTR) {
            config.rgb = parse_rgb(&color)?;
        }
        return Ok(Box::new(ThreadScene::new(config, w, h)?));
    }
    anyhow::bail!("canvas has neither {} nor {}", PARTICLES_ATTR, THREADS_ATTR)
}

struct Shared {
    surface: Surface,
    scene: RefCell<Box<dyn Scene>>,
    pointer: Rc<RefCell<PointerState>>,
}

impl Shared {
    fn resize(&self) {
        let (w, h) = dom::sync_canvas_backing_size(&self.surface.canvas);
        self.scene.borrow_mut().resize(w as f32, h as f32);
    }
}

/// A scene bound to one canvas, with its frame loop and listeners.
pub struct Renderer {
    shared: Rc<Shared>,
    frame_loop: AnimationLoop,
    listeners: Listeners,
}

impl Renderer {
    pub fn create(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        dom::sync_canvas_backing_size(&canvas);
        let scene = scene_for_canvas(&canvas)?;
        let surface = Surface::acquire(canvas)?;
        let shared = Rc::new(Shared {
            surface,
            scene: RefCell::new(scene),
            pointer: Rc::new(RefCell::new(PointerState::default())),
        });
        let frame_shared = shared.clone();
        let frame_loop = AnimationLoop::new(move || {
            let pointer = *frame_shared.pointer.borrow();
            frame_shared
                .scene
                .borrow_mut()
                .frame(&frame_shared.surface, pointer);
        });
        Ok(Self {
            shared,
            frame_loop,
            listeners: Listeners::default(),
        })
    }

    /// Register listeners and begin drawing; a no-op while running.
    pub fn start(&mut self) -> anyhow::Result<()> {
        if self.is_running() {
            return Ok(());
        }
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let mut listeners = Listeners::default();
        events::wire_field_pointer(
            &mut listeners,
            &self.shared.surface.canvas,
            self.shared.pointer.clone(),
        )?;
        let resize_shared = self.shared.clone();
        listeners.add(&window, "resize", move |_| resize_shared.resize());
        log::debug!("[field] started with {} listeners", listeners.len());
        self.listeners = listeners;
        self.shared.resize();
        self.frame_loop.start();
        Ok(())
    }

    /// Cancel the frame loop and drop every listener. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        *self.shared.pointer.borrow_mut() = PointerState::default();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{document, next_frame};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    fn particle_canvas() -> web::HtmlCanvasElement {
        let document = document();
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        canvas.set_attribute(PARTICLES_ATTR, "ambient").unwrap();
        dom::set_style(&canvas, "width", "120px");
        dom::set_style(&canvas, "height", "80px");
        document.body().unwrap().append_child(&canvas).unwrap();
        canvas
    }

    fn move_pointer() {
        let ev = web::PointerEvent::new("pointermove").unwrap();
        web::window().unwrap().dispatch_event(&ev).unwrap();
    }

    #[wasm_bindgen_test]
    async fn stop_releases_listeners_and_pointer() {
        let canvas = particle_canvas();
        let mut renderer = Renderer::create(canvas.clone()).unwrap();
        renderer.start().unwrap();
        assert!(renderer.is_running());
        assert_ne!(renderer.listeners.len(), 0);

        move_pointer();
        assert!(renderer.shared.pointer.borrow().active);

        renderer.stop();
        renderer.stop();
        assert!(!renderer.is_running());
        assert_eq!(renderer.listeners.len(), 0);
        assert!(!renderer.shared.pointer.borrow().active);

        // Nothing is listening any more.
        move_pointer();
        assert!(!renderer.shared.pointer.borrow().active);
        next_frame().await;
        canvas.remove();
    }

    #[wasm_bindgen_test]
    fn start_twice_keeps_one_set_of_listeners() {
        let canvas = particle_canvas();
        let mut renderer = Renderer::create(canvas.clone()).unwrap();
        renderer.start().unwrap();
        let registered = renderer.listeners.len();
        renderer.start().unwrap();
        assert_eq!(renderer.listeners.len(), registered);
        renderer.stop();
        canvas.remove();
    }

    #[wasm_bindgen_test]
    fn canvas_without_scene_attributes_is_rejected() {
        let canvas: web::HtmlCanvasElement = document()
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        assert!(scene_for_canvas(&canvas).is_err());
    }
}
