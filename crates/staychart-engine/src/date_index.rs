//! Positional index over the visible date window.
//!
//! Built once per payload from `date_range` and shared by every unit's merge
//! pass. The index preserves input order and never sorts: the caller
//! guarantees an ascending window, and span merging operates strictly by
//! positional adjacency in this sequence, not by calendar-day subtraction.

use std::collections::HashMap;

/// Immutable ordered sequence of calendar days with O(1) positional lookup.
#[derive(Debug, Clone, Default)]
pub struct DateIndex {
    days: Vec<String>,
    positions: HashMap<String, usize>,
}

impl DateIndex {
    /// Build an index from the payload's `date_range`, preserving order.
    ///
    /// Duplicate days keep their first position. The input contract forbids
    /// duplicates; first-wins keeps lookups deterministic if one slips in.
    pub fn new(days: &[String]) -> Self {
        let mut positions = HashMap::with_capacity(days.len());
        for (position, day) in days.iter().enumerate() {
            positions.entry(day.clone()).or_insert(position);
        }
        Self {
            days: days.to_vec(),
            positions,
        }
    }

    /// Position of `day` in the window, or `None` when outside it.
    pub fn position_of(&self, day: &str) -> Option<usize> {
        self.positions.get(day).copied()
    }

    /// Day at `position`, or `None` when past the end of the window.
    pub fn day_at(&self, position: usize) -> Option<&str> {
        self.days.get(position).map(String::as_str)
    }

    /// The full window in order.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Number of days in the window.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
