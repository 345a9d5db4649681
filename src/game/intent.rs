use super::direction::Direction;

/// Buffer absorbing direction-change requests between ticks.
///
/// Holds at most one pending direction.  A request that would exactly
/// reverse the direction applied on the last tick is dropped, so a quick
/// two-key sequence inside one tick window cannot fold the snake onto its
/// own neck; a later valid request overwrites an earlier pending one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct IntentBuffer {
    pending: Option<Direction>,
    last_applied: Direction,
}

impl IntentBuffer {
    pub(super) fn new(initial: Direction) -> IntentBuffer {
        IntentBuffer {
            pending: None,
            last_applied: initial,
        }
    }

    /// Record a request to change direction.  Reversals are dropped
    /// silently; that is input debouncing, not an error.
    pub(super) fn request(&mut self, candidate: Direction) {
        if candidate != self.last_applied.opposite() {
            self.pending = Some(candidate);
        }
    }

    /// Commit the direction for the tick now starting: the pending request
    /// if one arrived, the last applied direction otherwise.
    pub(super) fn commit(&mut self) -> Direction {
        let direction = self.pending.take().unwrap_or(self.last_applied);
        self.last_applied = direction;
        direction
    }

    /// The direction applied on the most recent tick
    pub(super) fn last_applied(&self) -> Direction {
        self.last_applied
    }
}
