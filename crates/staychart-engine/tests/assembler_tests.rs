//! End-to-end tests for chart assembly: payload JSON in, row model out.

use staychart_engine::{
    assemble_chart, assemble_data, parse_response, Booking, Category, CellShape, ChartData,
    MoveDirection, Unit,
};

/// Helper: a three-day, two-category payload with a stay, a maintenance
/// block, and a cross-category move suggestion.
fn sample_payload() -> &'static str {
    r#"{
      "success": true,
      "data": {
        "date_range": ["2024-01-01", "2024-01-02", "2024-01-03"],
        "categories": [
          {
            "name": "Sea View",
            "units": [
              {
                "unit_code": "A1",
                "bookings": [
                  {
                    "reservation_no": "R1",
                    "guest_name": "Alice",
                    "status": "Confirmed",
                    "start_date": "2024-01-01",
                    "end_date": "2024-01-02",
                    "color_class": "status-confirmed",
                    "is_fixed": false,
                    "is_move_suggestion": false
                  }
                ]
              },
              {
                "unit_code": "A2",
                "bookings": [
                  {
                    "reservation_no": "M7",
                    "guest_name": "",
                    "status": "Maintenance",
                    "start_date": "2024-01-03",
                    "end_date": "2024-01-03",
                    "color_class": "status-maintenance",
                    "is_fixed": false,
                    "is_move_suggestion": false
                  }
                ]
              }
            ]
          },
          {
            "name": "Garden",
            "units": [
              {
                "unit_code": "B1",
                "bookings": [
                  {
                    "reservation_no": "R9",
                    "guest_name": "Bob",
                    "status": "Confirmed",
                    "start_date": "2024-01-01",
                    "end_date": "2024-01-03",
                    "color_class": "status-confirmed",
                    "is_fixed": false,
                    "is_move_suggestion": true,
                    "current_unit": "B1",
                    "target_unit": "A1"
                  }
                ]
              }
            ]
          }
        ]
      }
    }"#
}

#[test]
fn assembles_rows_for_every_unit_in_listed_order() {
    let response = parse_response(sample_payload()).expect("valid payload JSON");
    let model = assemble_chart(&response).expect("payload carries data");

    assert_eq!(model.date_range.len(), 3);
    assert_eq!(model.categories.len(), 2);
    assert_eq!(model.categories[0].name, "Sea View");
    assert_eq!(model.categories[1].name, "Garden");

    let unit_codes: Vec<&str> = model
        .categories
        .iter()
        .flat_map(|c| c.units.iter().map(|u| u.unit_code.as_str()))
        .collect();
    assert_eq!(unit_codes, vec!["A1", "A2", "B1"]);
}

#[test]
fn every_row_partitions_the_window() {
    let response = parse_response(sample_payload()).expect("valid payload JSON");
    let model = assemble_chart(&response).expect("payload carries data");

    for category in &model.categories {
        for unit in &category.units {
            let total: usize = unit.cells.iter().map(|c| c.colspan).sum();
            assert_eq!(
                total,
                model.date_range.len(),
                "unit {} cells must cover the whole window",
                unit.unit_code
            );
        }
    }
}

#[test]
fn two_night_stay_produces_the_expected_cells() {
    let response = parse_response(sample_payload()).expect("valid payload JSON");
    let model = assemble_chart(&response).expect("payload carries data");

    let cells = &model.categories[0].units[0].cells;
    assert_eq!(cells.len(), 2);

    assert_eq!(cells[0].start_day, "2024-01-01");
    assert_eq!(cells[0].colspan, 2);
    assert_eq!(cells[0].reservation_no.as_deref(), Some("R1"));
    assert_eq!(cells[0].attributes.shape, CellShape::Ranged);
    assert_eq!(cells[0].attributes.display_text, "Alice");

    assert_eq!(cells[1].start_day, "2024-01-03");
    assert_eq!(cells[1].colspan, 1);
    assert!(cells[1].reservation_no.is_none());
    assert_eq!(cells[1].attributes.shape, CellShape::Empty);
}

#[test]
fn nameless_maintenance_cell_reads_out_of_order() {
    let response = parse_response(sample_payload()).expect("valid payload JSON");
    let model = assemble_chart(&response).expect("payload carries data");

    let cells = &model.categories[0].units[1].cells;
    let maintenance = cells
        .iter()
        .find(|c| c.reservation_no.as_deref() == Some("M7"))
        .expect("maintenance cell present");

    assert_eq!(maintenance.attributes.display_text, "Out Of Order");
    assert_eq!(maintenance.attributes.color_class, "status-maintenance");
}

#[test]
fn move_suggestion_resolves_across_categories() {
    // B1 sits below A1 in the global ordering, so the suggestion points up.
    let response = parse_response(sample_payload()).expect("valid payload JSON");
    let model = assemble_chart(&response).expect("payload carries data");

    let cells = &model.categories[1].units[0].cells;
    assert_eq!(cells.len(), 1, "full-window stay is one merged cell");
    assert_eq!(cells[0].colspan, 3);
    assert_eq!(
        cells[0].attributes.move_direction,
        Some(MoveDirection::Up),
        "target A1 precedes current B1 in the chart ordering"
    );
    assert!(cells[0]
        .attributes
        .tooltip
        .as_deref()
        .expect("tooltip present")
        .ends_with("(move to A1)"));
}

#[test]
fn assembly_is_idempotent() {
    let response = parse_response(sample_payload()).expect("valid payload JSON");

    let first = assemble_chart(&response);
    let second = assemble_chart(&response);

    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// No-data terminal states
// ---------------------------------------------------------------------------

#[test]
fn unsuccessful_response_is_no_data() {
    let response = parse_response(r#"{"success": false, "data": null}"#).unwrap();
    assert!(assemble_chart(&response).is_none());
}

#[test]
fn missing_data_object_is_no_data() {
    let response = parse_response(r#"{"success": true}"#).unwrap();
    assert!(assemble_chart(&response).is_none());
}

#[test]
fn empty_envelope_is_no_data() {
    let response = parse_response("{}").unwrap();
    assert!(assemble_chart(&response).is_none());
}

#[test]
fn missing_or_empty_window_and_categories_are_no_data() {
    let empty_window = r#"{"success": true, "data": {"date_range": [], "categories": [
        {"name": "Sea View", "units": []}
    ]}}"#;
    let response = parse_response(empty_window).unwrap();
    assert!(assemble_chart(&response).is_none());

    let no_categories =
        r#"{"success": true, "data": {"date_range": ["2024-01-01"], "categories": []}}"#;
    let response = parse_response(no_categories).unwrap();
    assert!(assemble_chart(&response).is_none());

    let fields_absent = r#"{"success": true, "data": {}}"#;
    let response = parse_response(fields_absent).unwrap();
    assert!(assemble_chart(&response).is_none());
}

#[test]
fn invalid_json_is_a_parse_error_not_a_panic() {
    assert!(parse_response("this is not json {{{").is_err());
}

// ---------------------------------------------------------------------------
// Direct assembly from structs
// ---------------------------------------------------------------------------

#[test]
fn malformed_booking_degrades_to_free_days() {
    let data = ChartData {
        date_range: vec!["2024-01-01".to_string(), "2024-01-02".to_string()],
        categories: vec![Category {
            name: "Main".to_string(),
            units: vec![Unit {
                unit_code: "A1".to_string(),
                bookings: vec![Booking {
                    reservation_no: "R1".to_string(),
                    start_date: "2024-01-02".to_string(),
                    end_date: "2024-01-01".to_string(),
                    ..Booking::default()
                }],
            }],
        }],
    };

    let model = assemble_data(&data);
    let cells = &model.categories[0].units[0].cells;

    assert_eq!(cells.len(), 2);
    assert!(
        cells.iter().all(|c| c.reservation_no.is_none()),
        "an inverted stay contributes nothing"
    );
}

#[test]
fn row_model_serializes_and_round_trips() {
    let response = parse_response(sample_payload()).expect("valid payload JSON");
    let model = assemble_chart(&response).expect("payload carries data");

    let json = serde_json::to_string(&model).expect("model serializes");
    let back: staychart_engine::RowModel =
        serde_json::from_str(&json).expect("model deserializes");

    assert_eq!(back, model);
}
