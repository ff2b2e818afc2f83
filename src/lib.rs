// ============================================================================
// AUTH FORM - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: enlazan el DOM existente y proyectan el estado
// - ViewModels: toggle / submit / fetch de cuenta
// - Services: SOLO comunicación API + clasificación de respuestas
// - State: Rc<RefCell> con subscribers
// - Models: datos planos
// ============================================================================

mod app;
mod config;
mod dom;
mod error;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

// Instancia global de App (listeners y ViewModel viven con la página)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level));
    }
    log::info!("🚀 [APP] Auth form - Rust + WASM");

    let document = dom::document().ok_or_else(|| JsValue::from_str("No document"))?;
    if is_loading(&document.ready_state()) {
        dom::once(&document, "DOMContentLoaded", |_e| {
            if let Err(e) = start_app() {
                log::error!("❌ [APP] Error enlazando formulario: {:?}", e);
            }
        })?;
    } else {
        start_app()?;
    }

    Ok(())
}

/// document.readyState es "loading" hasta que termina el parseo del HTML
fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn start_app() -> Result<(), JsValue> {
    let app = App::new(&CONFIG);
    app.mount()?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));
    Ok(())
}

/// Modo actual del formulario ("Login" / "Sign Up"), llamable desde JavaScript
#[wasm_bindgen]
pub fn current_form_mode() -> Option<String> {
    APP.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|app| app.view_model().state().get_mode().title().to_string())
    })
}
