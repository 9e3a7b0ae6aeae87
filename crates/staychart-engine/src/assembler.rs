//! Chart assembly -- orchestrates the full payload → row-model pass.
//!
//! Builds the date index and the global unit linearization once, then walks
//! categories → units → spans to produce the render model consumed by the
//! presentation layer. The pass is synchronous, pure, and idempotent: the
//! same payload always yields the same model.

use serde::{Deserialize, Serialize};

use crate::cell::{resolve_cell, CellAttributes};
use crate::date_index::DateIndex;
use crate::direction::UnitIndex;
use crate::lookup::build_lookup;
use crate::payload::{ChartData, ChartResponse, Unit};
use crate::span::merge_spans;

/// The assembled render model: one row per unit, cells partitioning the
/// window, grouped by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowModel {
    pub date_range: Vec<String>,
    pub categories: Vec<CategoryRow>,
}

/// One rendered category section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub name: String,
    pub units: Vec<UnitRow>,
}

/// One rendered unit row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRow {
    pub unit_code: String,
    pub cells: Vec<Cell>,
}

/// One merged cell: a span plus its resolved display attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub start_day: String,
    pub colspan: usize,
    /// Merge identity of the occupying booking; `None` for free cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_no: Option<String>,
    pub attributes: CellAttributes,
}

/// Assemble the render model from a backend response.
///
/// Returns `None` for the no-data terminal state: `success: false`, a
/// missing `data` object, or an empty date window or category listing. That
/// state is rendered as an explicit "no data" view by callers, never raised
/// as an error.
pub fn assemble_chart(response: &ChartResponse) -> Option<RowModel> {
    let data = response.data()?;
    if data.date_range.is_empty() || data.categories.is_empty() {
        return None;
    }
    Some(assemble_data(data))
}

/// Assemble the render model from well-formed chart data.
pub fn assemble_data(data: &ChartData) -> RowModel {
    let index = DateIndex::new(&data.date_range);
    let units = UnitIndex::from_categories(&data.categories);

    let categories = data
        .categories
        .iter()
        .map(|category| CategoryRow {
            name: category.name.clone(),
            units: category
                .units
                .iter()
                .map(|unit| assemble_unit(unit, &index, &units))
                .collect(),
        })
        .collect();

    RowModel {
        date_range: index.days().to_vec(),
        categories,
    }
}

fn assemble_unit(unit: &Unit, index: &DateIndex, units: &UnitIndex) -> UnitRow {
    let lookup = build_lookup(&unit.bookings);
    let spans = merge_spans(index, &lookup);

    let cells = spans
        .into_iter()
        .map(|span| {
            let attributes = resolve_cell(&span, units);
            Cell {
                reservation_no: span.booking.map(|b| b.reservation_no),
                start_day: span.start_day,
                colspan: span.colspan,
                attributes,
            }
        })
        .collect();

    UnitRow {
        unit_code: unit.unit_code.clone(),
        cells,
    }
}
