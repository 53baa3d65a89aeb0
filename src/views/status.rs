// ============================================================================
// STATUS VIEW - Regiones de estado (<p class="status">)
// ============================================================================

use web_sys::Element;

use crate::dom::{add_class, require_element, set_class_name, set_text_content};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// Texto + clases `status` y `success`/`error` (sin clase extra si el mensaje está vacío)
pub fn update_status(element: &Element, message: &str, kind: StatusKind) {
    set_text_content(element, message);
    set_class_name(element, "status");
    if !message.is_empty() {
        if let Err(e) = add_class(element, kind.class()) {
            log::warn!("⚠️ [STATUS] No se pudo aplicar la clase {}: {:?}", kind.class(), e);
        }
    }
}

pub fn update_status_by_id(id: &str, message: &str, kind: StatusKind) {
    match require_element(id) {
        Some(element) => update_status(&element, message, kind),
        None => log::warn!("⚠️ [STATUS] Mensaje sin región #{}: {}", id, message),
    }
}
