//! Span merging -- compress a unit's per-day bookings into minimal visual runs.
//!
//! Walks the date window once, grouping consecutive days that resolve to the
//! same `reservation_no` into a single span. The produced spans partition the
//! window: no overlap, no gap, and the colspans sum to the window length.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::date_index::DateIndex;
use crate::payload::Booking;

/// A maximal run of contiguous days sharing one booking identity (or empty),
/// rendered as one merged cell. Computed per render pass, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Position of the span's first day in the window.
    pub position: usize,
    /// First day of the span.
    pub start_day: String,
    /// Number of contiguous days covered, `>= 1`.
    pub colspan: usize,
    /// The booking occupying the span, or `None` for a free run of one day.
    pub booking: Option<Booking>,
}

/// Merge one unit's day → booking map into an ordered span sequence.
///
/// Merge equality is by `reservation_no` only: adjacent days of the same
/// reservation always coalesce, and a change in reservation always breaks
/// the span. Unoccupied days emit single-day empty spans. The processed-day
/// array is local to this call and discarded with it.
pub fn merge_spans(index: &DateIndex, lookup: &HashMap<String, Booking>) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut processed = vec![false; index.len()];

    for (position, day) in index.days().iter().enumerate() {
        if processed[position] {
            continue;
        }
        processed[position] = true;

        let Some(booking) = lookup.get(day) else {
            spans.push(Span {
                position,
                start_day: day.clone(),
                colspan: 1,
                booking: None,
            });
            continue;
        };

        // Extend forward while the next day in the window maps to the same
        // reservation; stop at the first mismatch, gap, or window end.
        let mut colspan = 1;
        let mut next = position + 1;
        while let Some(next_day) = index.day_at(next) {
            match lookup.get(next_day) {
                Some(candidate) if candidate.reservation_no == booking.reservation_no => {
                    processed[next] = true;
                    colspan += 1;
                    next += 1;
                }
                _ => break,
            }
        }

        spans.push(Span {
            position,
            start_day: day.clone(),
            colspan,
            booking: Some(booking.clone()),
        });
    }

    spans
}
