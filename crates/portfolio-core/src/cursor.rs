//! Custom pointer follower: a small dot plus a larger ring.
//!
//! Pointer events only move the target; the drawn position eases toward it
//! once per frame, so position updates never go through markup re-rendering.

use crate::constants::{CURSOR_DOT_OFFSET, CURSOR_EASE, CURSOR_RING_OFFSET};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorFollower {
    pub target: Vec2,
    pub pos: Vec2,
    pub clicked: bool,
    pub hovering_link: bool,
    pub hidden: bool,
    initialized: bool,
}

impl CursorFollower {
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
        self.hidden = false;
        if !self.initialized {
            self.pos = self.target;
            self.initialized = true;
        }
    }

    /// Ease the drawn position toward the target.
    pub fn step(&mut self) {
        self.pos = self.pos.lerp(self.target, CURSOR_EASE);
    }

    pub fn dot_scale(&self) -> f32 {
        if self.clicked {
            0.75
        } else if self.hovering_link {
            1.5
        } else {
            1.0
        }
    }

    pub fn ring_scale(&self) -> f32 {
        if self.clicked {
            1.1
        } else if self.hovering_link {
            1.5
        } else {
            1.0
        }
    }

    pub fn dot_transform(&self) -> String {
        transform(self.pos, CURSOR_DOT_OFFSET, self.dot_scale())
    }

    pub fn ring_transform(&self) -> String {
        transform(self.pos, CURSOR_RING_OFFSET, self.ring_scale())
    }
}

fn transform(pos: Vec2, offset: f32, scale: f32) -> String {
    format!(
        "translate3d({:.1}px, {:.1}px, 0) scale({})",
        pos.x - offset,
        pos.y - offset,
        scale
    )
}
