// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Los botones de la página viven toda la vida de la app: los listeners se
// registran una sola vez en App::bind() y se mantienen con closure.forget().
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MouseEvent};

use crate::dom::require_element;

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Click handler por ID; devuelve false si el elemento no existe
pub fn on_click_id<F>(id: &str, handler: F) -> Result<bool, JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    match require_element(id) {
        Some(element) => {
            on_click(&element, handler)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
