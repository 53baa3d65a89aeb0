use serde::{Deserialize, Serialize};
use super::owner::Owner;

/// Cuerpo de POST /register (el propietario se identifica por teléfono)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleCreate {
    pub license_plate: String,
    pub owner_phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default)]
    pub id: Option<i64>,
    pub license_plate: String,
    pub qr_code: String,
    #[serde(default)]
    pub owner: Option<Owner>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VehicleRegistrationResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub vehicle: Vehicle,
    /// Ruta relativa de la imagen PNG del QR generada por el backend
    pub qr_code_path: String,
}

impl Vehicle {
    pub fn owner_name(&self) -> &str {
        self.owner.as_ref().map(|o| o.name.as_str()).unwrap_or("N/A")
    }

    pub fn owner_phone(&self) -> &str {
        self.owner.as_ref().map(|o| o.phone_number.as_str()).unwrap_or("N/A")
    }
}
