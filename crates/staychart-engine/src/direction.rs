//! Move-direction resolution for suggested relocations.
//!
//! A move suggestion names its current and target units by display code.
//! Both are located in a single linearization of every unit across every
//! category — suggestions may point outside the currently-rendered category,
//! so resolution scans the whole chart's unit ordering, never just the local
//! one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::payload::Category;

/// Direction of a suggested relocation relative to the chart's unit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    Up,
    Down,
}

/// Collapse internal whitespace runs to single spaces and trim the ends.
///
/// Unit codes arrive from two independently-edited sources (the unit listing
/// and the move-suggestion fields); normalization keeps "A  1" and " A 1 "
/// equal.
pub fn normalize_unit_code(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Positional index over the chart's full unit ordering.
///
/// Built once per payload, the same way [`crate::DateIndex`] is built over
/// the date window: input order preserved, first occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct UnitIndex {
    positions: HashMap<String, usize>,
    len: usize,
}

impl UnitIndex {
    /// Linearize all units across all categories in listed order.
    pub fn from_categories(categories: &[Category]) -> Self {
        let mut positions = HashMap::new();
        let mut len = 0;
        for category in categories {
            for unit in &category.units {
                positions
                    .entry(normalize_unit_code(&unit.unit_code))
                    .or_insert(len);
                len += 1;
            }
        }
        Self { positions, len }
    }

    /// Linear position of a unit code, compared after normalization.
    pub fn position_of(&self, unit_code: &str) -> Option<usize> {
        self.positions.get(&normalize_unit_code(unit_code)).copied()
    }

    /// Total number of units across all categories.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Resolve the direction marker for a suggested relocation.
///
/// Returns `Up` when the target sits above the current unit in the listing,
/// `Down` otherwise (an equal position counts as `Down`), and `None` when
/// either name cannot be found — the marker is simply omitted and rendering
/// continues.
pub fn resolve_direction(
    units: &UnitIndex,
    current_unit: &str,
    target_unit: &str,
) -> Option<MoveDirection> {
    let current = units.position_of(current_unit)?;
    let target = units.position_of(target_unit)?;
    if target < current {
        Some(MoveDirection::Up)
    } else {
        Some(MoveDirection::Down)
    }
}
