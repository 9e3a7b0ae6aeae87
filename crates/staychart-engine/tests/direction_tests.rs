//! Tests for move-direction resolution over the global unit ordering.

use staychart_engine::{
    normalize_unit_code, resolve_direction, Category, MoveDirection, Unit, UnitIndex,
};

/// Helper: a category with the given name and unit codes.
fn category(name: &str, unit_codes: &[&str]) -> Category {
    Category {
        name: name.to_string(),
        units: unit_codes
            .iter()
            .map(|code| Unit {
                unit_code: code.to_string(),
                bookings: Vec::new(),
            })
            .collect(),
    }
}

/// Helper: two categories, six units linearized as positions 0..=5.
fn two_category_index() -> UnitIndex {
    UnitIndex::from_categories(&[
        category("Sea View", &["A1", "A2", "A3"]),
        category("Garden", &["B1", "B2", "B3"]),
    ])
}

#[test]
fn linearization_spans_all_categories_in_listed_order() {
    let units = two_category_index();

    assert_eq!(units.len(), 6);
    assert_eq!(units.position_of("A1"), Some(0));
    assert_eq!(units.position_of("A3"), Some(2));
    assert_eq!(units.position_of("B1"), Some(3));
    assert_eq!(units.position_of("B3"), Some(5));
}

#[test]
fn target_above_current_resolves_up() {
    let units = two_category_index();
    assert_eq!(
        resolve_direction(&units, "B2", "A2"),
        Some(MoveDirection::Up)
    );
}

#[test]
fn target_below_current_resolves_down() {
    let units = two_category_index();
    assert_eq!(
        resolve_direction(&units, "A2", "B2"),
        Some(MoveDirection::Down)
    );
}

#[test]
fn equal_positions_resolve_down() {
    let units = two_category_index();
    assert_eq!(
        resolve_direction(&units, "A2", "A2"),
        Some(MoveDirection::Down)
    );
}

#[test]
fn cross_category_moves_resolve_against_the_whole_chart() {
    // A suggestion rendered inside "Garden" may target a "Sea View" unit.
    let units = two_category_index();
    assert_eq!(
        resolve_direction(&units, "B3", "A1"),
        Some(MoveDirection::Up)
    );
}

#[test]
fn unknown_unit_name_yields_no_marker() {
    let units = two_category_index();
    assert_eq!(resolve_direction(&units, "A1", "Z9"), None);
    assert_eq!(resolve_direction(&units, "Z9", "A1"), None);
    assert_eq!(resolve_direction(&units, "", ""), None);
}

#[test]
fn names_are_compared_after_whitespace_normalization() {
    let units = UnitIndex::from_categories(&[category("Main", &["Room  101", "Room 102"])]);

    assert_eq!(units.position_of(" Room 101 "), Some(0));
    assert_eq!(
        resolve_direction(&units, "Room 102", "Room  101"),
        Some(MoveDirection::Up)
    );
}

#[test]
fn duplicate_unit_codes_keep_their_first_position() {
    let units = UnitIndex::from_categories(&[
        category("Sea View", &["A1", "Dup"]),
        category("Garden", &["Dup", "B1"]),
    ]);

    assert_eq!(units.position_of("Dup"), Some(1));
    // Dup resolves to position 1, ahead of B1 at position 3.
    assert_eq!(
        resolve_direction(&units, "B1", "Dup"),
        Some(MoveDirection::Up)
    );
}

#[test]
fn normalize_collapses_runs_and_trims() {
    assert_eq!(normalize_unit_code("  A   1  "), "A 1");
    assert_eq!(normalize_unit_code("A\t1"), "A 1");
    assert_eq!(normalize_unit_code("A1"), "A1");
    assert_eq!(normalize_unit_code("   "), "");
}

#[test]
fn empty_chart_resolves_nothing() {
    let units = UnitIndex::from_categories(&[]);
    assert!(units.is_empty());
    assert_eq!(resolve_direction(&units, "A1", "B1"), None);
}
