// ============================================================================
// REGISTRATION VIEW - Resultado del alta de vehículo con su código QR
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::VehicleRegistrationResponse;
use crate::views::messages;

/// Bloque con vehículo, propietario, dato del QR, imagen y enlace de descarga
pub fn render_registration_result(response: &VehicleRegistrationResponse) -> Result<Element, JsValue> {
    let vehicle = &response.vehicle;

    let qr_data = ElementBuilder::new("p")
        .text("QR Code Data: ")
        .child(ElementBuilder::new("strong").text(&vehicle.qr_code));

    let image = ElementBuilder::new("img")
        .attr("src", &response.qr_code_path)
        .attr("alt", &format!("QR Code for {}", vehicle.license_plate))
        .attr("width", "150");

    let download = ElementBuilder::new("a")
        .attr("href", &response.qr_code_path)
        .attr("download", &format!("{}.png", vehicle.qr_code))
        .text("Download QR Code");

    ElementBuilder::new("div")
        .class("qr-result")
        .text_child("p", &messages::vehicle_summary(response))
        .child(qr_data)
        .text_child("p", "Save this QR Code image:")
        .child(image)
        .child(ElementBuilder::new("br"))
        .child(download)
        .build()
}
