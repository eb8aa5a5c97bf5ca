//! One-shot reveal choreography for the certifications section.
//!
//! Every animated element (the heading and each grid cell) starts out
//! unrevealed and flips to revealed the first time the host reports it inside
//! the viewport. Revealed is terminal, later reports are ignored. Cells are
//! staggered by their index so a row entering together cascades.

use std::{collections::BTreeMap, collections::BTreeSet, fmt, time::Duration};

/// Length of a single reveal transition
pub const REVEAL_DURATION: Duration = Duration::from_millis(500);
/// Extra delay per cell index
pub const STAGGER_STEP: Duration = Duration::from_millis(100);
/// Vertical offset an unrevealed element is displaced by, in CSS pixels
pub const REVEAL_OFFSET_PX: u32 = 20;

/// Delay applied to cell `index` relative to its own visibility trigger.
pub fn stagger_delay(index: usize) -> Duration {
    let step = STAGGER_STEP.as_millis() as u64;
    Duration::from_millis(step.saturating_mul(index as u64))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RevealTarget {
    Heading,
    Cell(usize),
}

impl RevealTarget {
    pub fn delay(&self) -> Duration {
        match self {
            RevealTarget::Heading => Duration::ZERO,
            RevealTarget::Cell(index) => stagger_delay(*index),
        }
    }
}

impl fmt::Display for RevealTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevealTarget::Heading => f.write_str("heading"),
            RevealTarget::Cell(index) => write!(f, "cell-{index}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unrevealed,
    Revealed,
}

/// A transition the host should start playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTransition {
    pub target: RevealTarget,
    pub delay: Duration,
    pub duration: Duration,
}

/// Viewport visibility detection, supplied by whatever hosts the markup.
///
/// Once a target is observed the host calls [`RevealChoreography::entered_view`]
/// whenever it scrolls into view.
pub trait VisibilityTracker {
    fn observe(&mut self, target: RevealTarget);
    fn unobserve(&mut self, target: RevealTarget);
}

/// Tracker that only remembers which targets are currently subscribed.
#[derive(Debug, Clone, Default)]
pub struct ObservedSet {
    observed: BTreeSet<RevealTarget>,
}

impl ObservedSet {
    pub fn is_observed(&self, target: RevealTarget) -> bool {
        self.observed.contains(&target)
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }
}

impl VisibilityTracker for ObservedSet {
    fn observe(&mut self, target: RevealTarget) {
        self.observed.insert(target);
    }

    fn unobserve(&mut self, target: RevealTarget) {
        self.observed.remove(&target);
    }
}

/// Per-instance reveal flags for a heading and `cell_count` cells.
#[derive(Debug, Clone)]
pub struct RevealChoreography {
    states: BTreeMap<RevealTarget, RevealState>,
}

impl RevealChoreography {
    pub fn new(cell_count: usize) -> Self {
        let states = std::iter::once(RevealTarget::Heading)
            .chain((0..cell_count).map(RevealTarget::Cell))
            .map(|target| (target, RevealState::Unrevealed))
            .collect();
        Self { states }
    }

    /// Subscribes every element that has not been revealed yet.
    pub fn attach<T: VisibilityTracker + ?Sized>(&self, tracker: &mut T) {
        for (target, state) in &self.states {
            if *state == RevealState::Unrevealed {
                tracker.observe(*target);
            }
        }
    }

    /// Handles a visibility report for `target`.
    ///
    /// Returns the transition to play on the first report only.
    pub fn entered_view<T: VisibilityTracker + ?Sized>(
        &mut self,
        target: RevealTarget,
        tracker: &mut T,
    ) -> Option<RevealTransition> {
        let state = match self.states.get_mut(&target) {
            Some(state) => state,
            None => {
                debug!("visibility report for unknown reveal target {}", target);
                return None;
            }
        };
        match *state {
            RevealState::Revealed => {
                trace!("{} already revealed, ignoring", target);
                None
            }
            RevealState::Unrevealed => {
                *state = RevealState::Revealed;
                tracker.unobserve(target);
                Some(RevealTransition {
                    target,
                    delay: target.delay(),
                    duration: REVEAL_DURATION,
                })
            }
        }
    }

    pub fn state(&self, target: RevealTarget) -> Option<RevealState> {
        self.states.get(&target).copied()
    }

    pub fn targets(&self) -> impl Iterator<Item = RevealTarget> + '_ {
        self.states.keys().copied()
    }

    pub fn is_settled(&self) -> bool {
        self.states.values().all(|x| *x == RevealState::Revealed)
    }
}
