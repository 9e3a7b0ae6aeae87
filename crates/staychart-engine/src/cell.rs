//! Cell attribute resolution -- the DOM-ready view of one span.
//!
//! Derives everything the presentation layer needs to draw a merged cell:
//! shape tag, pass-through color class, display text with status fallback,
//! marker prefixes, alignment, and tooltip text. Pure derivation; the span
//! itself is never modified.

use serde::{Deserialize, Serialize};

use crate::direction::{resolve_direction, MoveDirection, UnitIndex};
use crate::payload::{Booking, BookingStatus};
use crate::span::Span;

/// Marker prefixed to bookings the analysis backend excluded from relocation.
pub const FIXED_MARKER: &str = "📌";
/// Marker for a suggested relocation to a unit earlier in the listing.
pub const MOVE_UP_MARKER: &str = "▲";
/// Marker for a suggested relocation to a unit later in the listing.
pub const MOVE_DOWN_MARKER: &str = "▼";

/// Visual shape of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellShape {
    /// Unoccupied day.
    Empty,
    /// Occupied span covering exactly one day.
    SingleDay,
    /// Occupied span covering two or more days; both edges belong to the
    /// same merged cell.
    Ranged,
}

/// Horizontal text alignment within the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellAlign {
    Center,
    Left,
}

/// Display attributes for one rendered cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellAttributes {
    pub shape: CellShape,
    /// Style tag copied verbatim from the booking; empty for free cells.
    pub color_class: String,
    /// Text drawn in the cell, marker prefixes included.
    pub display_text: String,
    pub align: CellAlign,
    pub is_fixed: bool,
    pub is_move_suggestion: bool,
    /// Resolved direction for a move suggestion; `None` when the cell is not
    /// a suggestion or when either unit name could not be located.
    pub move_direction: Option<MoveDirection>,
    /// Hover text for occupied cells.
    pub tooltip: Option<String>,
}

impl CellAttributes {
    fn empty() -> Self {
        Self {
            shape: CellShape::Empty,
            color_class: String::new(),
            display_text: String::new(),
            align: CellAlign::Center,
            is_fixed: false,
            is_move_suggestion: false,
            move_direction: None,
            tooltip: None,
        }
    }
}

/// Resolve the display attributes for a span.
///
/// Marker rules when the span carries a booking:
/// - a move suggestion gets its direction marker and left alignment; an
///   unresolvable direction omits the marker but keeps the alignment,
/// - a fixed booking gets the fixed marker and left alignment.
///
/// When a booking is both fixed and a move suggestion, the fixed marker
/// always precedes the direction marker in the final text. The direction is
/// resolved once per span, from the span's underlying booking.
pub fn resolve_cell(span: &Span, units: &UnitIndex) -> CellAttributes {
    let Some(booking) = &span.booking else {
        return CellAttributes::empty();
    };

    let shape = if span.colspan == 1 {
        CellShape::SingleDay
    } else {
        CellShape::Ranged
    };

    let mut display_text = display_name(booking);
    let mut align = CellAlign::Center;
    let mut move_direction = None;

    if booking.is_move_suggestion {
        move_direction = resolve_direction(
            units,
            booking.current_unit.as_deref().unwrap_or(""),
            booking.target_unit.as_deref().unwrap_or(""),
        );
        if let Some(direction) = move_direction {
            display_text = format!("{} {}", direction_marker(direction), display_text);
        }
        align = CellAlign::Left;
    }

    if booking.is_fixed {
        display_text = format!("{} {}", FIXED_MARKER, display_text);
        align = CellAlign::Left;
    }

    CellAttributes {
        shape,
        color_class: booking.color_class.clone(),
        display_text,
        align,
        is_fixed: booking.is_fixed,
        is_move_suggestion: booking.is_move_suggestion,
        move_direction,
        tooltip: Some(tooltip_text(booking)),
    }
}

fn direction_marker(direction: MoveDirection) -> &'static str {
    match direction {
        MoveDirection::Up => MOVE_UP_MARKER,
        MoveDirection::Down => MOVE_DOWN_MARKER,
    }
}

/// Text drawn for a booking before any marker prefixes.
///
/// A non-empty guest name wins; otherwise the status supplies a placeholder.
fn display_name(booking: &Booking) -> String {
    if !booking.guest_name.is_empty() {
        return booking.guest_name.clone();
    }
    match &booking.status {
        BookingStatus::Maintenance => "Out Of Order".to_string(),
        BookingStatus::Pencil => "Pencil".to_string(),
        _ => "Unknown".to_string(),
    }
}

/// Hover text: reservation, display name, stay range, and the relocation
/// target when the booking is a move suggestion.
fn tooltip_text(booking: &Booking) -> String {
    let mut tooltip = format!(
        "{}: {} {} - {}",
        booking.reservation_no,
        display_name(booking),
        booking.start_date,
        booking.end_date,
    );
    if booking.is_move_suggestion {
        if let Some(target) = booking.target_unit.as_deref() {
            if !target.is_empty() {
                tooltip.push_str(&format!(" (move to {})", target));
            }
        }
    }
    tooltip
}
