// ============================================================================
// REGISTRATION VIEWMODEL - Alta de propietarios y vehículos
// ============================================================================
// Valida el formulario y llama a la API. Devuelve valores, la vista pinta.
// ============================================================================

use crate::models::{Owner, VehicleRegistrationResponse};
use crate::services::ApiClient;
use super::flow_error::{require, FlowError, ValidationError};

/// Formulario de propietario tal como se leyó del DOM
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnerForm {
    pub name: String,
    pub phone_number: String,
}

impl OwnerForm {
    /// (name, phone) recortados; el primer campo vacío gana
    pub fn validate(&self) -> Result<(String, String), ValidationError> {
        let name = require(&self.name, "owner's name")?;
        let phone = require(&self.phone_number, "owner's phone number")?;
        Ok((name, phone))
    }
}

/// Formulario de vehículo: matrícula + teléfono del propietario ya registrado
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleForm {
    pub license_plate: String,
    pub owner_phone_number: String,
}

impl VehicleForm {
    pub fn validate(&self) -> Result<(String, String), ValidationError> {
        let plate = require(&self.license_plate, "license plate")?;
        let phone = require(&self.owner_phone_number, "owner's phone number")?;
        Ok((plate, phone))
    }
}

pub struct RegistrationViewModel {
    api_client: ApiClient,
}

impl RegistrationViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    pub async fn register_owner(&self, form: &OwnerForm) -> Result<Owner, FlowError> {
        let (name, phone) = form.validate()?;
        let owner = self
            .api_client
            .register_owner(&name, &phone)
            .await
            .map_err(|e| FlowError::api("Owner registration", e))?;
        log::info!("✅ [REGISTRO] Propietario registrado: {} ({})", owner.name, owner.phone_number);
        Ok(owner)
    }

    pub async fn register_vehicle(&self, form: &VehicleForm) -> Result<VehicleRegistrationResponse, FlowError> {
        let (plate, phone) = form.validate()?;
        let response = self
            .api_client
            .register_vehicle(&plate, &phone)
            .await
            .map_err(|e| FlowError::api("Registration", e))?;
        log::info!(
            "✅ [REGISTRO] Vehículo {} registrado, QR: {}",
            response.vehicle.license_plate,
            response.vehicle.qr_code
        );
        Ok(response)
    }
}

impl Default for RegistrationViewModel {
    fn default() -> Self {
        Self::new()
    }
}
