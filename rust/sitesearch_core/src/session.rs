//! Per-interaction suggestion state: current matches and the active row.

use std::time::Instant;

use crate::record::Record;

/// Where the suggestion surface currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing shown.
    Idle,
    /// Matches shown, no row selected.
    MatchesShown,
    /// Matches shown with a selected row.
    SelectionActive,
}

/// Suggestion state for one search box.
///
/// Matches are owned copies, so the session stays valid when the live
/// snapshot is replaced underneath it.
#[derive(Debug, Default)]
pub struct QuerySession {
    matches: Vec<Record>,
    active: Option<usize>,
    blur_deadline: Option<Instant>,
}

impl QuerySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (self.matches.is_empty(), self.active) {
            (true, _) => Phase::Idle,
            (false, None) => Phase::MatchesShown,
            (false, Some(_)) => Phase::SelectionActive,
        }
    }

    pub fn matches(&self) -> &[Record] {
        &self.matches
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_record(&self) -> Option<&Record> {
        self.active.and_then(|i| self.matches.get(i))
    }

    /// Replace the matches from a fresh query. Clears the selection.
    pub fn set_matches(&mut self, matches: Vec<Record>) {
        self.matches = matches;
        self.active = None;
        self.blur_deadline = None;
    }

    /// Back to idle.
    pub fn reset(&mut self) {
        self.matches.clear();
        self.active = None;
        self.blur_deadline = None;
    }

    /// Move the selection by `delta` rows, wrapping at both ends.
    ///
    /// With nothing selected, a forward move selects the first row and a
    /// backward move the last. Returns the new active row, or `None` when
    /// there is nothing to select.
    pub fn move_selection(&mut self, delta: isize) -> Option<usize> {
        let len = self.matches.len();
        if len == 0 || delta == 0 {
            return self.active;
        }
        let next = match self.active {
            None if delta > 0 => (delta - 1).rem_euclid(len as isize),
            None => delta.rem_euclid(len as isize),
            Some(current) => (current as isize + delta).rem_euclid(len as isize),
        };
        self.active = Some(next as usize);
        self.active
    }

    /// Start the blur grace window ending at `deadline`.
    pub fn begin_blur(&mut self, deadline: Instant) {
        if !self.matches.is_empty() {
            self.blur_deadline = Some(deadline);
        }
    }

    /// Cancel a pending blur (focus came back).
    pub fn cancel_blur(&mut self) {
        self.blur_deadline = None;
    }

    pub fn blur_pending(&self) -> bool {
        self.blur_deadline.is_some()
    }

    /// True once a pending blur's grace window has elapsed at `now`.
    pub fn blur_expired(&self, now: Instant) -> bool {
        self.blur_deadline.is_some_and(|deadline| now >= deadline)
    }
}
