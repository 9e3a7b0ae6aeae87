//! WASM bindings for staychart-engine.
//!
//! Exposes chart assembly and move-direction resolution to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings: the browser
//! component hands over the fetched backend payload verbatim and receives the
//! DOM-ready row model back.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p staychart-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/staychart-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/staychart_wasm.wasm
//! ```

use serde::Deserialize;
use staychart_engine::{assemble_chart, parse_response, resolve_direction, MoveDirection, UnitIndex};
use wasm_bindgen::prelude::*;

/// Input format for the category listing passed from JavaScript.
#[derive(Deserialize)]
struct CategoryInput {
    #[serde(default)]
    name: String,
    #[serde(default)]
    units: Vec<UnitInput>,
}

#[derive(Deserialize)]
struct UnitInput {
    #[serde(default)]
    unit_code: String,
}

/// Convert a JSON array of `{name, units}` category objects into the
/// engine's category type (bookings are irrelevant for direction lookups).
fn parse_categories_json(json: &str) -> Result<Vec<staychart_engine::Category>, JsValue> {
    let inputs: Vec<CategoryInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid categories JSON: {}", e)))?;

    Ok(inputs
        .into_iter()
        .map(|category| staychart_engine::Category {
            name: category.name,
            units: category
                .units
                .into_iter()
                .map(|unit| staychart_engine::Unit {
                    unit_code: unit.unit_code,
                    bookings: Vec::new(),
                })
                .collect(),
        })
        .collect())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Assemble the render model from a backend response.
///
/// `payload_json` is the raw `{success, data}` response body. Returns a JSON
/// string: the row model object, or `null` when the payload is the no-data
/// terminal state (`success: false`, missing data, or an empty window or
/// category listing).
#[wasm_bindgen(js_name = "assembleChart")]
pub fn assemble_chart_json(payload_json: &str) -> Result<String, JsValue> {
    let response = parse_response(payload_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    match assemble_chart(&response) {
        Some(model) => serde_json::to_string(&model)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e))),
        None => Ok("null".to_string()),
    }
}

/// Resolve the direction marker for a suggested relocation.
///
/// `categories_json` must be a JSON array of `{name, units: [{unit_code}]}`
/// objects covering the whole chart in display order. Returns `"up"`,
/// `"down"`, or `""` when either unit name cannot be located.
#[wasm_bindgen(js_name = "moveDirection")]
pub fn move_direction(
    categories_json: &str,
    current_unit: &str,
    target_unit: &str,
) -> Result<String, JsValue> {
    let categories = parse_categories_json(categories_json)?;
    let units = UnitIndex::from_categories(&categories);

    Ok(match resolve_direction(&units, current_unit, target_unit) {
        Some(MoveDirection::Up) => "up".to_string(),
        Some(MoveDirection::Down) => "down".to_string(),
        None => String::new(),
    })
}
