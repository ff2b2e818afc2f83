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

/// Obtener elemento por ID, con error si no existe
pub fn require_element(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", id)))
}

/// Obtener elemento por ID como tipo concreto (HtmlInputElement, HtmlElement...)
pub fn require_element_as<T: JsCast>(id: &str) -> Result<T, JsValue> {
    require_element(id)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} has unexpected type", id)))
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Establecer style.display
pub fn set_display(element: &HtmlElement, display: &str) -> Result<(), JsValue> {
    element.style().set_property("display", display)
}

/// Valor actual de un input
pub fn input_value(input: &HtmlInputElement) -> String {
    input.value()
}

/// Alerta bloqueante del navegador
pub fn alert(message: &str) -> Result<(), JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .alert_with_message(message)
}

/// Navegar a otra URL
pub fn navigate_to(url: &str) -> Result<(), JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .set_href(url)
}
