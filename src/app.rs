// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use crate::config::AppConfig;
use crate::state::FormState;
use crate::viewmodels::FormViewModel;
use crate::views::{bind_login_form, LoginFormElements};

/// Aplicación principal
pub struct App {
    vm: Rc<FormViewModel>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new(config: &AppConfig) -> Self {
        let state = FormState::new();
        if config.single_flight {
            log::info!("🔒 [APP] single_flight activo");
        }
        Self {
            vm: Rc::new(FormViewModel::new(state, config.single_flight)),
        }
    }

    /// Enlazar al formulario ya presente en el documento
    pub fn mount(&self) -> Result<(), JsValue> {
        let elements = LoginFormElements::lookup()?;
        bind_login_form(elements, self.vm.clone())
    }

    /// Obtener referencia al ViewModel
    pub fn view_model(&self) -> &Rc<FormViewModel> {
        &self.vm
    }
}
