//! Section pager: which full-viewport section is active and how the slide
//! between two sections progresses.
//!
//! Navigation is rejected while the outgoing section is still leaving. The
//! pager drives its own exit clock through [`Pager::tick`], so the
//! transition always completes as long as frames keep arriving; callers that
//! observe the real animation can also finish it early with
//! [`Pager::transition_complete`].

use crate::constants::{SLIDE_ENTER_SEC, SLIDE_EXIT_SEC};
use crate::error::PagerError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub label: String,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerState {
    Idle(usize),
    Transitioning {
        from: usize,
        to: usize,
        direction: Direction,
    },
}

/// An accepted navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    /// Id of the target section, to be mirrored into the URL fragment.
    pub section_id: String,
}

/// Horizontal offset (fraction of the viewport width) and opacity of a
/// section at some point of a slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlidePose {
    pub offset: f32,
    pub opacity: f32,
}

impl SlidePose {
    pub const REST: SlidePose = SlidePose {
        offset: 0.0,
        opacity: 1.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideTrack {
    pub index: usize,
    pub pose: SlidePose,
}

/// Poses to apply after a [`Pager::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlideFrame {
    pub exit: Option<SlideTrack>,
    pub enter: Option<SlideTrack>,
    /// Set on the tick that finished the exit phase.
    pub completed: Option<usize>,
}

#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// The vacated section leaves toward the side opposite the travel direction.
#[inline]
pub fn exit_pose(direction: Direction, t: f32) -> SlidePose {
    exit_pose_from(SlidePose::REST, direction, t)
}

/// Exit slide that starts wherever the section currently is, e.g. part-way
/// through its own entrance.
pub fn exit_pose_from(from: SlidePose, direction: Direction, t: f32) -> SlidePose {
    let e = ease_in_out(t);
    SlidePose {
        offset: from.offset + (-direction.sign() - from.offset) * e,
        opacity: from.opacity * (1.0 - e),
    }
}

/// The incoming section arrives from the edge it is travelling away from.
#[inline]
pub fn enter_pose(direction: Direction, t: f32) -> SlidePose {
    let e = ease_in_out(t);
    SlidePose {
        offset: direction.sign() * (1.0 - e),
        opacity: e,
    }
}

/// Relative step bound to a directional key, if any.
#[inline]
pub fn step_for_key(key: &str) -> Option<isize> {
    match key {
        "ArrowRight" | "ArrowDown" => Some(1),
        "ArrowLeft" | "ArrowUp" => Some(-1),
        _ => None,
    }
}

/// Index of the section named by a URL fragment (`#id` or `id`); unknown or
/// empty fragments select the first section.
pub fn resolve_initial(sections: &[Section], fragment: Option<&str>) -> usize {
    fragment
        .map(|f| f.trim_start_matches('#'))
        .filter(|id| !id.is_empty())
        .and_then(|id| sections.iter().position(|s| s.id == id))
        .unwrap_or(0)
}

pub struct Pager {
    sections: Vec<Section>,
    state: PagerState,
    direction: Direction,
    exit_elapsed: f32,
    exit_from: SlidePose,
    entering: Option<(usize, f32)>,
}

impl Pager {
    pub fn new(sections: Vec<Section>) -> Result<Self, PagerError> {
        Self::with_fragment(sections, None)
    }

    pub fn with_fragment(
        sections: Vec<Section>,
        fragment: Option<&str>,
    ) -> Result<Self, PagerError> {
        if sections.is_empty() {
            return Err(PagerError::NoSections);
        }
        for (i, s) in sections.iter().enumerate() {
            if sections[..i].iter().any(|o| o.id == s.id) {
                return Err(PagerError::DuplicateId(s.id.clone()));
            }
        }
        let initial = resolve_initial(&sections, fragment);
        Ok(Self {
            sections,
            state: PagerState::Idle(initial),
            direction: Direction::Forward,
            exit_elapsed: 0.0,
            exit_from: SlidePose::REST,
            entering: None,
        })
    }

    #[inline]
    pub fn state(&self) -> PagerState {
        self.state
    }

    /// Index of the section being shown or slid in.
    #[inline]
    pub fn current_index(&self) -> usize {
        match self.state {
            PagerState::Idle(i) => i,
            PagerState::Transitioning { to, .. } => to,
        }
    }

    #[inline]
    pub fn current_section(&self) -> &Section {
        &self.sections[self.current_index()]
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, PagerState::Transitioning { .. })
    }

    #[inline]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn navigate(&mut self, target: usize) -> Option<Transition> {
        let PagerState::Idle(current) = self.state else {
            log::debug!("[pager] navigate({}) ignored mid-transition", target);
            return None;
        };
        if target >= self.sections.len() || target == current {
            return None;
        }
        let exit_from = match self.entering {
            Some((index, elapsed)) if index == current => {
                enter_pose(self.direction, elapsed / SLIDE_ENTER_SEC)
            }
            _ => SlidePose::REST,
        };
        let direction = if target > current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.direction = direction;
        self.state = PagerState::Transitioning {
            from: current,
            to: target,
            direction,
        };
        self.exit_elapsed = 0.0;
        self.exit_from = exit_from;
        self.entering = None;
        log::debug!("[pager] {} -> {} ({:?})", current, target, direction);
        Some(Transition {
            from: current,
            to: target,
            direction,
            section_id: self.sections[target].id.clone(),
        })
    }

    /// Step relative to the current section; steps past either end are ignored.
    pub fn navigate_by(&mut self, delta: isize) -> Option<Transition> {
        let target = self.current_index().checked_add_signed(delta)?;
        self.navigate(target)
    }

    pub fn navigate_to_id(&mut self, id: &str) -> Option<Transition> {
        let target = self.index_of(id)?;
        self.navigate(target)
    }

    #[inline]
    pub fn next(&mut self) -> Option<Transition> {
        self.navigate_by(1)
    }

    #[inline]
    pub fn prev(&mut self) -> Option<Transition> {
        self.navigate_by(-1)
    }

    /// The outgoing section finished leaving; accept navigation again.
    pub fn transition_complete(&mut self) -> Option<usize> {
        let PagerState::Transitioning { to, .. } = self.state else {
            return None;
        };
        self.state = PagerState::Idle(to);
        self.exit_elapsed = 0.0;
        self.exit_from = SlidePose::REST;
        self.entering = Some((to, 0.0));
        Some(to)
    }

    /// Advance the slide clocks by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> SlideFrame {
        let dt = dt.max(0.0);
        let mut frame = SlideFrame::default();

        if let PagerState::Transitioning {
            from, direction, ..
        } = self.state
        {
            self.exit_elapsed += dt;
            let t = (self.exit_elapsed / SLIDE_EXIT_SEC).min(1.0);
            frame.exit = Some(SlideTrack {
                index: from,
                pose: exit_pose_from(self.exit_from, direction, t),
            });
            if t >= 1.0 {
                frame.completed = self.transition_complete();
            }
            return frame;
        }

        if let Some((index, elapsed)) = self.entering {
            let elapsed = elapsed + dt;
            let t = (elapsed / SLIDE_ENTER_SEC).min(1.0);
            frame.enter = Some(SlideTrack {
                index,
                pose: enter_pose(self.direction, t),
            });
            self.entering = (t < 1.0).then_some((index, elapsed));
        }
        frame
    }
}
