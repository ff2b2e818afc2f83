// ============================================================================
// LOGIN FORM VIEW - Enlaza el formulario existente en index.html
// ============================================================================
// El estado vive en FormState; el DOM es solo su proyección
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement, HtmlInputElement};
use crate::dom::{
    alert, input_value, navigate_to, on_click, on_submit, require_element, require_element_as,
    set_display, set_text_content,
};
use crate::models::{CredentialForm, FormView};
use crate::utils::{
    EMAIL_ID, FETCH_ACCOUNT_BUTTON_ID, FORM_TITLE_ID, LOGIN_FORM_ID, PASSWORD_ID,
    TOGGLE_BUTTON_ID, USERNAME_ID,
};
use crate::viewmodels::{Feedback, FormViewModel};

/// Elementos del formulario
#[derive(Clone)]
pub struct LoginFormElements {
    pub form: Element,
    pub toggle_button: Element,
    pub title: Element,
    pub username: HtmlInputElement,
    pub password: HtmlInputElement,
    pub email: HtmlInputElement,
    pub fetch_account_button: Element,
}

impl LoginFormElements {
    /// Buscar todos los elementos; falla con el ID que falte
    pub fn lookup() -> Result<Self, JsValue> {
        Ok(Self {
            form: require_element(LOGIN_FORM_ID)?,
            toggle_button: require_element(TOGGLE_BUTTON_ID)?,
            title: require_element(FORM_TITLE_ID)?,
            username: require_element_as(USERNAME_ID)?,
            password: require_element_as(PASSWORD_ID)?,
            email: require_element_as(EMAIL_ID)?,
            fetch_account_button: require_element(FETCH_ACCOUNT_BUTTON_ID)?,
        })
    }

    /// Leer los tres campos al momento del submit
    pub fn read_credentials(&self) -> CredentialForm {
        CredentialForm::new(
            input_value(&self.email),
            input_value(&self.username),
            input_value(&self.password),
        )
    }
}

/// Aplicar la proyección del modo al DOM
pub fn render_form_view(elements: &LoginFormElements, view: &FormView) -> Result<(), JsValue> {
    set_text_content(&elements.title, view.title);
    set_text_content(&elements.toggle_button, view.toggle_label);
    elements.password.set_required(view.password_required);
    let username: &HtmlElement = &elements.username;
    set_display(username, view.username_display)?;
    Ok(())
}

/// Mostrar el resultado de una acción
pub fn present_feedback(feedback: &Feedback) {
    let result = match feedback {
        Feedback::Alert(message) => alert(message),
        Feedback::Navigate(url) => navigate_to(url),
        Feedback::None => Ok(()),
    };
    if let Err(e) = result {
        log::error!("❌ [FORM] No se pudo mostrar feedback: {:?}", e);
    }
}

/// Registrar listeners y render inicial
pub fn bind_login_form(elements: LoginFormElements, vm: Rc<FormViewModel>) -> Result<(), JsValue> {
    let state = vm.state().clone();

    // Render inicial + re-render en cada cambio de modo
    render_form_view(&elements, &state.get_mode().view())?;
    {
        let elements = elements.clone();
        state.subscribe_to_mode(move |mode| {
            if let Err(e) = render_form_view(&elements, &mode.view()) {
                log::error!("❌ [FORM] Error renderizando modo {}: {:?}", mode.title(), e);
            }
        });
    }

    // Toggle Login <-> Sign Up
    {
        let vm = vm.clone();
        on_click(&elements.toggle_button, move |e| {
            e.prevent_default();
            vm.toggle();
        })?;
    }

    // Submit: se lee el formulario y se lanza la petición
    {
        let vm = vm.clone();
        let fields = elements.clone();
        on_submit(&elements.form, move |e| {
            e.prevent_default();
            let form = fields.read_credentials();
            let vm = vm.clone();
            spawn_local(async move {
                let feedback = vm.submit(form).await;
                present_feedback(&feedback);
            });
        })?;
    }

    // Fetch de cuenta
    {
        let vm = vm.clone();
        on_click(&elements.fetch_account_button, move |_e| {
            let vm = vm.clone();
            spawn_local(async move {
                let feedback = vm.fetch_account().await;
                present_feedback(&feedback);
            });
        })?;
    }

    log::info!("✅ [FORM] Formulario enlazado");
    Ok(())
}
