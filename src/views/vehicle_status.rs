// ============================================================================
// VEHICLE STATUS VIEW - Detalle de la consulta de estado
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::VehicleStatusResponse;
use crate::views::messages;

pub fn render_vehicle_status(response: &VehicleStatusResponse, currency_symbol: &str) -> Result<Element, JsValue> {
    let state_class = if response.is_checked_in { "checked-in" } else { "checked-out" };
    messages::vehicle_status_details(response, currency_symbol)
        .iter()
        .fold(
            ElementBuilder::new("ul").class(&format!("vehicle-status {}", state_class)),
            |list, line| list.text_child("li", line),
        )
        .build()
}
