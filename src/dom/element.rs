// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Obtener elemento por ID o registrar que falta
pub fn require_element(id: &str) -> Option<Element> {
    let element = get_element_by_id(id);
    if element.is_none() {
        log::error!("❌ [DOM] Elemento #{} no encontrado", id);
    }
    element
}

/// Obtener input por ID
pub fn get_input(id: &str) -> Option<HtmlInputElement> {
    get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

/// Valor del input sin espacios a los lados ("" si no existe)
pub fn input_value(id: &str) -> String {
    get_input(id)
        .map(|input| input.value().trim().to_string())
        .unwrap_or_default()
}

/// Vaciar inputs
pub fn clear_inputs(ids: &[&str]) {
    for id in ids {
        if let Some(input) = get_input(id) {
            input.set_value("");
        }
    }
}

/// Dar foco (y seleccionar el texto si `select`)
pub fn focus_input(id: &str, select: bool) {
    if let Some(input) = get_input(id) {
        if let Err(e) = input.focus() {
            log::warn!("⚠️ [DOM] No se pudo dar foco a #{}: {:?}", id, e);
        }
        if select {
            input.select();
        }
    }
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer class name (reemplaza todas las clases)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

/// Verificar si tiene clase
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Establecer text content por ID (no-op si no existe)
pub fn set_text_by_id(id: &str, text: &str) {
    if let Some(element) = get_element_by_id(id) {
        set_text_content(&element, text);
    }
}

/// Vaciar hijos
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Mostrar u ocultar con `style.display`
pub fn set_visible(element: &Element, visible: bool) -> Result<(), JsValue> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?;
    html.style()
        .set_property("display", if visible { "block" } else { "none" })
}

/// Mostrar u ocultar por ID (registra si falla)
pub fn set_visible_by_id(id: &str, visible: bool) {
    if let Some(element) = require_element(id) {
        if let Err(e) = set_visible(&element, visible) {
            log::warn!("⚠️ [DOM] No se pudo cambiar visibilidad de #{}: {:?}", id, e);
        }
    }
}

/// ¿Está visible? (display distinto de "none")
pub fn is_visible(element: &Element) -> bool {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|html| html.style().get_property_value("display").ok())
        .map(|display| display != "none")
        .unwrap_or(true)
}
