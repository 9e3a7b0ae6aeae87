//! Wire types for the chart payload produced by the analysis backend.
//!
//! The backend responds with a `{success, data}` envelope; `data` carries the
//! visible date window and the category → unit → booking tree. All fields are
//! deserialized leniently (`#[serde(default)]`) so a partial payload degrades
//! to the no-data state instead of failing the whole render.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Response envelope returned by the analysis backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<ChartData>,
}

impl ChartResponse {
    /// The chart data, if the backend reported success and included any.
    ///
    /// `success: false` and an absent `data` field are both the no-data
    /// terminal state for the render, not errors.
    pub fn data(&self) -> Option<&ChartData> {
        if self.success {
            self.data.as_ref()
        } else {
            None
        }
    }
}

/// The renderable chart: a date window plus the full category listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Visible window as ISO calendar-day strings, strictly ascending.
    #[serde(default)]
    pub date_range: Vec<String>,
    /// Categories in display order. Order is significant: it is the basis
    /// for move-direction comparisons.
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// A named group of units, rendered as one section of the chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub units: Vec<Unit>,
}

/// A single rentable unit and its bookings for the window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(default)]
    pub unit_code: String,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

/// One booking record.
///
/// `start_date` and `end_date` are inclusive: both the check-in night and the
/// final occupied night. The calendar day after `end_date` is free for a new
/// arrival (checkout-day release).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Reservation identity — the sole key for span-merge equality.
    #[serde(default)]
    pub reservation_no: String,
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// Opaque style tag, passed through to the render model verbatim.
    #[serde(default)]
    pub color_class: String,
    /// Excluded from relocation by the analysis backend.
    #[serde(default)]
    pub is_fixed: bool,
    /// Candidate relocation produced by the analysis backend.
    #[serde(default)]
    pub is_move_suggestion: bool,
    /// Present only when `is_move_suggestion`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_unit: Option<String>,
    /// Present only when `is_move_suggestion`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_unit: Option<String>,
}

/// Booking status as reported by the backend.
///
/// The set is open: statuses this crate does not recognize round-trip through
/// [`BookingStatus::Other`] unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Confirmed,
    Maintenance,
    Pencil,
    Other(String),
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Other(String::new())
    }
}

impl From<String> for BookingStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Confirmed" => BookingStatus::Confirmed,
            "Maintenance" => BookingStatus::Maintenance,
            "Pencil" => BookingStatus::Pencil,
            _ => BookingStatus::Other(raw),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Confirmed => "Confirmed".to_string(),
            BookingStatus::Maintenance => "Maintenance".to_string(),
            BookingStatus::Pencil => "Pencil".to_string(),
            BookingStatus::Other(raw) => raw,
        }
    }
}

/// Parse a raw backend response string.
///
/// # Errors
/// Returns [`crate::ChartError::JsonParse`] if the input is not valid JSON.
/// A syntactically valid response with missing or empty fields parses fine
/// and resolves to the no-data state during assembly.
pub fn parse_response(json: &str) -> Result<ChartResponse> {
    Ok(serde_json::from_str(json)?)
}
