use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopInner {
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    pending: Cell<Option<i32>>,
    running: Cell<bool>,
}

impl LoopInner {
    fn request(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(id) => self.pending.set(Some(id)),
                Err(e) => {
                    log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                    self.running.set(false);
                }
            }
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

/// A `requestAnimationFrame` cycle that can be started and stopped.
///
/// One callback runs per display refresh; the next frame is requested only
/// after the callback returns, so frames never overlap. Dropping the loop
/// cancels any pending frame.
pub struct AnimationLoop {
    inner: Rc<LoopInner>,
}

impl AnimationLoop {
    pub fn new(mut frame: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            tick: RefCell::new(None),
            pending: Cell::new(None),
            running: Cell::new(false),
        });
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if !inner.running.get() {
                return;
            }
            frame();
            if inner.running.get() {
                inner.request();
            }
        }) as Box<dyn FnMut()>));
        Self { inner }
    }

    /// Begin the cycle; a no-op while already running.
    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        self.inner.request();
    }

    /// Cancel the pending frame. Safe to call repeatedly.
    pub fn stop(&self) {
        self.inner.running.set(false);
        self.inner.cancel();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::next_frame;
    use wasm_bindgen_test::*;

    fn counting_loop() -> (AnimationLoop, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (AnimationLoop::new(move || c.set(c.get() + 1)), count)
    }

    #[wasm_bindgen_test]
    async fn double_start_runs_one_callback_per_frame() {
        let (frames, count) = counting_loop();
        frames.start();
        frames.start();
        assert!(frames.is_running());
        next_frame().await;
        assert_eq!(count.get(), 1);
        next_frame().await;
        assert_eq!(count.get(), 2);
    }

    #[wasm_bindgen_test]
    async fn stop_cancels_the_pending_frame() {
        let (frames, count) = counting_loop();
        frames.start();
        frames.stop();
        next_frame().await;
        next_frame().await;
        assert_eq!(count.get(), 0);

        frames.start();
        next_frame().await;
        assert_eq!(count.get(), 1);
        frames.stop();
        next_frame().await;
        assert_eq!(count.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn stop_is_idempotent() {
        let (frames, count) = counting_loop();
        frames.stop();
        frames.start();
        frames.stop();
        frames.stop();
        assert!(!frames.is_running());
        next_frame().await;
        assert_eq!(count.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn dropping_the_loop_stops_it() {
        let (frames, count) = counting_loop();
        frames.start();
        drop(frames);
        next_frame().await;
        assert_eq!(count.get(), 0);
    }
}
