// ============================================================================
// MESSAGES - Plantillas de texto para las regiones de estado
// ============================================================================

use crate::models::{Owner, VehicleRegistrationResponse, VehicleStatusResponse};
use crate::utils::{format_datetime, format_money, to_fixed};

pub const REGISTERING_OWNER: &str = "Registering owner...";
pub const REGISTERING_VEHICLE: &str = "Registering vehicle...";
pub const STARTING_SCANNER: &str = "Starting QR scanner...";

pub fn owner_registered(owner: &Owner) -> String {
    format!("Owner '{}' ({}) registered!", owner.name, owner.phone_number)
}

pub fn vehicle_registered(response: &VehicleRegistrationResponse) -> String {
    non_empty(response.message.as_deref()).unwrap_or("Registration successful!").to_string()
}

/// "Vehicle: KA01, Owner: Alice (555-1111)"
pub fn vehicle_summary(response: &VehicleRegistrationResponse) -> String {
    let vehicle = &response.vehicle;
    format!(
        "Vehicle: {}, Owner: {} ({})",
        vehicle.license_plate,
        vehicle.owner_name(),
        vehicle.owner_phone()
    )
}

pub fn checked_in(response: &VehicleStatusResponse) -> String {
    non_empty(response.message.as_deref()).unwrap_or("Check-in successful!").to_string()
}

/// "<message> Duration: 3.3 hrs. Fee: ₹12.50"
pub fn checked_out(response: &VehicleStatusResponse, currency_symbol: &str) -> String {
    let mut parts = vec![non_empty(response.message.as_deref())
        .unwrap_or("Check-out successful!")
        .to_string()];
    if let Some(hours) = response.duration_hours {
        parts.push(format!("Duration: {} hrs.", to_fixed(hours, 1)));
    }
    if let Some(fee) = response.fee {
        parts.push(format!("Fee: {}", format_money(fee, currency_symbol)));
    }
    parts.join(" ")
}

pub fn vehicle_status_headline(response: &VehicleStatusResponse) -> String {
    if let Some(message) = non_empty(response.message.as_deref()) {
        return message.to_string();
    }
    let plate = response.license_plate.as_deref().unwrap_or("Vehicle");
    if response.is_checked_in {
        format!("{} is currently checked IN.", plate)
    } else {
        format!("{} is currently checked OUT.", plate)
    }
}

/// Líneas de detalle de la consulta de estado; omite campos ausentes
pub fn vehicle_status_details(response: &VehicleStatusResponse, currency_symbol: &str) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(plate) = non_empty(response.license_plate.as_deref()) {
        lines.push(format!("License plate: {}", plate));
    }
    if response.owner_name.is_some() || response.owner_phone_number.is_some() {
        lines.push(format!(
            "Owner: {} ({})",
            non_empty(response.owner_name.as_deref()).unwrap_or("N/A"),
            non_empty(response.owner_phone_number.as_deref()).unwrap_or("N/A")
        ));
    }
    lines.push(format!(
        "Status: {}",
        if response.is_checked_in { "Checked IN" } else { "Checked OUT" }
    ));
    if let Some(entry) = non_empty(response.entry_time.as_deref()) {
        lines.push(format!("Entered: {}", format_datetime(entry)));
    }
    if let Some(exit) = non_empty(response.exit_time.as_deref()) {
        lines.push(format!("Exited: {}", format_datetime(exit)));
    }
    if let Some(hours) = response.duration_hours {
        lines.push(format!("Duration: {} hrs", to_fixed(hours, 1)));
    }
    if let Some(fee) = response.fee {
        lines.push(format!("Fee: {}", format_money(fee, currency_symbol)));
    }
    lines
}

/// "QR Scanner Error: <mensaje>"
pub fn scanner_error(message: &str) -> String {
    format!("QR Scanner Error: {}", message)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
