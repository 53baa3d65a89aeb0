use serde::Deserialize;

/// Plaza de aparcamiento devuelta por GET /spots
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParkingSpot {
    pub spot_number: String,
    pub is_occupied: bool,
    #[serde(default)]
    pub license_plate: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub owner_phone_number: Option<String>,
    #[serde(default)]
    pub entry_time: Option<String>,
}
