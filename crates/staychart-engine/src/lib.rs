//! # staychart-engine
//!
//! Occupancy chart assembly for hospitality calendars.
//!
//! For a date window and a set of units grouped into categories, the engine
//! compresses per-day booking records into minimal visual spans, marks fixed
//! and move-suggested bookings, and computes a directional indicator for
//! suggested relocations. It consumes the JSON chart payload produced by the
//! analysis backend and emits a DOM-ready row model; it never computes move
//! suggestions itself, only visualizes ones handed to it.
//!
//! ## Quick start
//!
//! ```rust
//! use staychart_engine::{assemble_chart, parse_response};
//!
//! let json = r#"{
//!   "success": true,
//!   "data": {
//!     "date_range": ["2024-01-01", "2024-01-02", "2024-01-03"],
//!     "categories": [{
//!       "name": "Sea View",
//!       "units": [{
//!         "unit_code": "A1",
//!         "bookings": [{
//!           "reservation_no": "R1",
//!           "guest_name": "Alice",
//!           "status": "Confirmed",
//!           "start_date": "2024-01-01",
//!           "end_date": "2024-01-02",
//!           "color_class": "status-confirmed",
//!           "is_fixed": false,
//!           "is_move_suggestion": false
//!         }]
//!       }]
//!     }]
//!   }
//! }"#;
//!
//! let response = parse_response(json).unwrap();
//! let model = assemble_chart(&response).expect("payload carries data");
//!
//! // Two occupied nights merge into one span; the third day stays free.
//! let cells = &model.categories[0].units[0].cells;
//! assert_eq!(cells.len(), 2);
//! assert_eq!(cells[0].colspan, 2);
//! assert_eq!(cells[1].colspan, 1);
//! ```
//!
//! ## Modules
//!
//! - [`payload`] — wire types for the backend response
//! - [`date_index`] — positional index over the visible date window
//! - [`interval`] — inclusive date-range expansion by calendar-day stepping
//! - [`lookup`] — per-unit day → booking map with checkout-day release
//! - [`span`] — merging consecutive same-reservation days into spans
//! - [`cell`] — display attributes for each span
//! - [`direction`] — up/down resolution for suggested relocations
//! - [`assembler`] — payload → row model orchestration
//! - [`error`] — error types

pub mod assembler;
pub mod cell;
pub mod date_index;
pub mod direction;
pub mod error;
pub mod interval;
pub mod lookup;
pub mod payload;
pub mod span;

pub use assembler::{assemble_chart, assemble_data, Cell, CategoryRow, RowModel, UnitRow};
pub use cell::{resolve_cell, CellAlign, CellAttributes, CellShape};
pub use date_index::DateIndex;
pub use direction::{normalize_unit_code, resolve_direction, MoveDirection, UnitIndex};
pub use error::ChartError;
pub use interval::expand_days;
pub use lookup::build_lookup;
pub use payload::{
    parse_response, Booking, BookingStatus, Category, ChartData, ChartResponse, Unit,
};
pub use span::{merge_spans, Span};
