// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================
// El primer error de DOM queda guardado y lo devuelve build(): las vistas
// encadenan sin `?` en cada paso.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, create_element, set_attribute, set_class_name, set_text_content};

pub struct ElementBuilder {
    element: Result<Element, JsValue>,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Self {
        Self {
            element: create_element(tag),
        }
    }

    fn apply<F>(mut self, step: F) -> Self
    where
        F: FnOnce(&Element) -> Result<(), JsValue>,
    {
        if let Ok(element) = &self.element {
            if let Err(e) = step(element) {
                self.element = Err(e);
            }
        }
        self
    }

    /// Reemplaza todas las clases
    pub fn class(self, class: &str) -> Self {
        self.apply(|element| {
            set_class_name(element, class);
            Ok(())
        })
    }

    pub fn id(self, id: &str) -> Self {
        self.apply(|element| set_attribute(element, "id", id))
    }

    /// Text content (escapado por el navegador)
    pub fn text(self, text: &str) -> Self {
        self.apply(|element| {
            set_text_content(element, text);
            Ok(())
        })
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        self.apply(|element| set_attribute(element, name, value))
    }

    pub fn child(self, child: ElementBuilder) -> Self {
        self.apply(|element| append_child(element, &child.build()?))
    }

    /// Hijo `<tag>` con solo texto
    pub fn text_child(self, tag: &str, text: &str) -> Self {
        self.child(ElementBuilder::new(tag).text(text))
    }

    pub fn build(self) -> Result<Element, JsValue> {
        self.element
    }
}
