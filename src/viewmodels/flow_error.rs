use thiserror::Error;

use crate::services::ApiError;

/// Campo obligatorio vacío: se resuelve localmente, nunca llega a la red
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter {0}.")]
    Missing(&'static str),

    #[error("Please scan a QR code first.")]
    NoPendingScan,
}

/// Valor recortado de un campo obligatorio
pub fn require(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(value.to_string())
    }
}

/// Error terminal de un intento; la UI vuelve a un estado listo para reintentar
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{action} failed: {source}")]
    Api {
        action: &'static str,
        source: ApiError,
    },
}

impl FlowError {
    pub fn api(action: &'static str, source: ApiError) -> Self {
        FlowError::Api { action, source }
    }
}
