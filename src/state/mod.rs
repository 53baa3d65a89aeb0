// ============================================================================
// STATE - Códigos QR pendientes de confirmar, con notificación a la vista
// ============================================================================

pub mod app_state;
pub mod reactivity;

pub use app_state::{AppState, PendingScan};
pub use reactivity::ReactiveState;
