//! Per-unit day → booking lookup.
//!
//! Folds a unit's booking list into a map keyed by calendar-day string. The
//! map covers every occupied night of every booking; days outside the visible
//! window may appear and are simply never consulted by the merge pass.

use std::collections::HashMap;

use crate::interval::expand_days;
use crate::payload::Booking;

/// Build the day → booking map for one unit.
///
/// Occupancy is the inclusive `[start_date, end_date]` night range; the day
/// after `end_date` stays free, so a departure on day D and an arrival on
/// day D never collide (checkout-day release).
///
/// Bookings are folded in input order and each day is overwritten on
/// conflict: when two bookings claim the same night, the one listed later
/// silently wins.
pub fn build_lookup(bookings: &[Booking]) -> HashMap<String, Booking> {
    let mut lookup = HashMap::new();
    for booking in bookings {
        for day in expand_days(&booking.start_date, &booking.end_date) {
            lookup.insert(day, booking.clone());
        }
    }
    lookup
}
