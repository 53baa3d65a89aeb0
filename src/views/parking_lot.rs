// ============================================================================
// PARKING LOT VIEW - Cuadrícula de plazas (variante con plazas numeradas)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children, ElementBuilder};
use crate::models::ParkingSpot;
use crate::utils::format_datetime;

pub fn render_parking_lot_loading(container: &Element) -> Result<(), JsValue> {
    clear_children(container);
    append_child(container, &ElementBuilder::new("p").text("Loading parking spots...").build()?)
}

pub fn render_parking_lot_error(container: &Element, detail: &str) -> Result<(), JsValue> {
    clear_children(container);
    let message = ElementBuilder::new("p")
        .class("error")
        .text(&format!("Could not load spots: {}", detail))
        .build()?;
    append_child(container, &message)
}

pub fn render_parking_lot(container: &Element, spots: &[ParkingSpot]) -> Result<(), JsValue> {
    clear_children(container);

    if spots.is_empty() {
        return append_child(container, &ElementBuilder::new("p").text("No parking spots found.").build()?);
    }

    for spot in spots {
        append_child(container, &render_spot(spot)?)?;
    }
    Ok(())
}

fn render_spot(spot: &ParkingSpot) -> Result<Element, JsValue> {
    let occupancy = if spot.is_occupied { "occupied" } else { "available" };

    let mut card = ElementBuilder::new("div")
        .class(&format!("spot {}", occupancy))
        .id(&format!("spot-{}", spot.spot_number))
        .child(ElementBuilder::new("div").class("spot-number").text(&spot.spot_number))
        .child(
            ElementBuilder::new("div")
                .class("spot-status")
                .text(if spot.is_occupied { "Occupied" } else { "Available" }),
        );

    if let (true, Some(plate)) = (spot.is_occupied, spot.license_plate.as_deref()) {
        let owner = format!(
            "Owner: {} ({})",
            spot.owner_name.as_deref().unwrap_or("N/A"),
            spot.owner_phone_number.as_deref().unwrap_or("N/A")
        );
        let entered = format!("Entered: {}", format_datetime(spot.entry_time.as_deref().unwrap_or("")));
        card = card
            .child(ElementBuilder::new("div").class("spot-plate").text(plate))
            .child(ElementBuilder::new("div").class("spot-owner").text(&owner))
            .child(ElementBuilder::new("div").class("spot-entry").text(&entered));
    }

    card.build()
}
