// ============================================================================
// SCANNER - Adaptador del ciclo de vida de html5-qrcode
// ============================================================================
// Una sola sesión de cámara por página: Idle → Starting → Scanning → Stopping
// ============================================================================

pub mod error;
pub mod state;
pub mod session;

pub use error::ScanError;
pub use state::{ScannerEvent, ScannerState};
pub use session::QrScanner;
