use thiserror::Error;
use wasm_bindgen::JsValue;

/// Fallos al arrancar o al esperar un escaneo
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
    #[error("Camera permission denied. Please allow camera access in browser settings.")]
    PermissionDenied,

    #[error("No suitable camera found.")]
    NoCamera,

    #[error("Camera is already in use or unreadable.")]
    CameraBusy,

    #[error("Scanner region element with ID '{0}' not found.")]
    RegionNotFound(String),

    #[error("QR scanner library is not loaded.")]
    LibraryUnavailable,

    #[error("{0}")]
    Unknown(String),

    /// La sesión se detuvo antes de decodificar (reset de UI o nuevo escaneo)
    #[error("Scan cancelled.")]
    Cancelled,
}

const UNKNOWN_START_ERROR: &str = "Unknown error starting scanner.";

impl ScanError {
    /// Clasifica un error de arranque a partir de su `name` y `message` (DOMException)
    pub fn classify(name: Option<&str>, message: Option<&str>) -> ScanError {
        let name = name.map(str::trim).filter(|s| !s.is_empty());
        let message = message.map(str::trim).filter(|s| !s.is_empty());

        match name {
            Some("NotAllowedError") | Some("PermissionDeniedError") => ScanError::PermissionDenied,
            Some("NotFoundError") | Some("DevicesNotFoundError") | Some("OverconstrainedError") => {
                ScanError::NoCamera
            }
            Some("NotReadableError") | Some("TrackStartError") => ScanError::CameraBusy,
            _ => ScanError::Unknown(
                message
                    .or(name)
                    .unwrap_or(UNKNOWN_START_ERROR)
                    .to_string(),
            ),
        }
    }

    /// html5-qrcode a veces rechaza con un string "NotAllowedError: Permission denied"
    pub fn classify_text(text: &str) -> ScanError {
        let text = text.trim();
        match text.split_once(':') {
            Some((name, _)) if name.trim().ends_with("Error") => {
                match ScanError::classify(Some(name), Some(text)) {
                    ScanError::Unknown(_) => ScanError::Unknown(text.to_string()),
                    known => known,
                }
            }
            _ => ScanError::classify(None, Some(text)),
        }
    }

    /// Convierte el valor rechazado por la promesa de start()
    pub fn from_js(err: &JsValue) -> ScanError {
        if err.is_null() || err.is_undefined() {
            return ScanError::Unknown(UNKNOWN_START_ERROR.to_string());
        }
        if let Some(text) = err.as_string() {
            return ScanError::classify_text(&text);
        }

        let field = |key: &str| {
            js_sys::Reflect::get(err, &JsValue::from_str(key))
                .ok()
                .and_then(|v| v.as_string())
        };
        let name = field("name");
        let message = field("message");

        match (name.as_deref(), message.as_deref()) {
            (None, None) => ScanError::Unknown(
                js_sys::JSON::stringify(err)
                    .ok()
                    .and_then(|s| s.as_string())
                    .unwrap_or_else(|| UNKNOWN_START_ERROR.to_string()),
            ),
            (name, message) => ScanError::classify(name, message),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScanError::Cancelled)
    }

    /// Mensaje para la región de estado (los fallos de cámara llevan prefijo)
    pub fn user_message(&self) -> String {
        match self {
            ScanError::RegionNotFound(_) | ScanError::Cancelled => self.to_string(),
            _ => format!("Error starting scanner: {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_dom_exception_names() {
        assert_eq!(ScanError::classify(Some("NotAllowedError"), Some("Permission denied")), ScanError::PermissionDenied);
        assert_eq!(ScanError::classify(Some("NotFoundError"), None), ScanError::NoCamera);
        assert_eq!(ScanError::classify(Some("NotReadableError"), Some("Could not start video source")), ScanError::CameraBusy);
    }

    #[test]
    fn test_classify_unknown_prefers_message_then_name() {
        assert_eq!(
            ScanError::classify(Some("AbortError"), Some("Timeout starting video source")),
            ScanError::Unknown("Timeout starting video source".to_string())
        );
        assert_eq!(ScanError::classify(Some("AbortError"), None), ScanError::Unknown("AbortError".to_string()));
        assert_eq!(ScanError::classify(None, Some("  ")), ScanError::Unknown(UNKNOWN_START_ERROR.to_string()));
    }

    #[test]
    fn test_classify_text_rejections() {
        assert_eq!(ScanError::classify_text("NotAllowedError: Permission denied"), ScanError::PermissionDenied);
        assert_eq!(
            ScanError::classify_text("Camera streaming not supported by the browser."),
            ScanError::Unknown("Camera streaming not supported by the browser.".to_string())
        );
    }

    #[test]
    fn test_permission_user_message() {
        let message = ScanError::PermissionDenied.user_message();
        assert!(message.starts_with("Error starting scanner: "));
        assert!(message.contains("Camera permission denied."));
    }

    #[test]
    fn test_region_not_found_has_no_prefix() {
        let message = ScanError::RegionNotFound("checkin-scanner-region".to_string()).user_message();
        assert_eq!(message, "Scanner region element with ID 'checkin-scanner-region' not found.");
    }
}
