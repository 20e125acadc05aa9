// ABOUTME: Mala counter state machine — tap count, target, deity selection.
// ABOUTME: Fires the target-reached signal exactly once per session.

use crate::catalog::Deity;

/// Feedback signal produced by a single tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulse {
    /// Ordinary tap; short feedback only.
    Counted,
    /// This tap made the count reach the target. Fired at most once per
    /// session; continued tapping past the target goes back to Counted.
    TargetReached,
}

/// A finished counting session, emitted by `complete()`.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedSession {
    pub deity: String,
    pub count: u32,
}

/// The digital mala. The target is informational, not a hard stop.
pub struct MalaCounter {
    count: u32,
    target: u32,
    targets: Vec<u32>,
    deities: Vec<Deity>,
    deity_idx: usize,
}

impl MalaCounter {
    /// Create a counter with the given catalog and selectable targets.
    /// The first deity and the default target start selected.
    pub fn new(deities: Vec<Deity>, targets: Vec<u32>, default_target: u32) -> Self {
        debug_assert!(!deities.is_empty());
        debug_assert!(!targets.is_empty());
        let target = if targets.contains(&default_target) {
            default_target
        } else {
            targets[0]
        };
        Self {
            count: 0,
            target,
            targets,
            deities,
            deity_idx: 0,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn deity(&self) -> &Deity {
        &self.deities[self.deity_idx]
    }

    /// Increment the count by one and report the feedback pulse.
    pub fn tap(&mut self) -> Pulse {
        self.count += 1;
        if self.count == self.target {
            Pulse::TargetReached
        } else {
            Pulse::Counted
        }
    }

    /// Cycle to the next deity. Does not reset the current count.
    pub fn next_deity(&mut self) {
        self.deity_idx = (self.deity_idx + 1) % self.deities.len();
    }

    /// Cycle to the next selectable target. Does not reset the current count.
    pub fn next_target(&mut self) {
        let pos = self
            .targets
            .iter()
            .position(|t| *t == self.target)
            .unwrap_or(0);
        self.target = self.targets[(pos + 1) % self.targets.len()];
    }

    /// Finish the session. With a positive count, emits the finished session
    /// and resets to zero; with a zero count this is a silent no-op.
    pub fn complete(&mut self) -> Option<FinishedSession> {
        if self.count == 0 {
            return None;
        }
        let finished = FinishedSession {
            deity: self.deity().name.clone(),
            count: self.count,
        };
        self.count = 0;
        Some(finished)
    }
}
