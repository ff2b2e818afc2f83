// ============================================================================
// FORM VIEWMODEL - Toggle, submit y fetch de cuenta
// ============================================================================
// No toca el DOM: devuelve un Feedback y la vista lo presenta
// ============================================================================

use serde_json::Value;
use crate::error::ApiError;
use crate::models::{AccountDetails, CredentialForm, SubmitReply, UiMode};
use crate::services::{interpret_account_reply, interpret_submit_reply, ApiClient, HttpTransport};
use crate::state::FormState;
use crate::utils::{ACCOUNT_FAILURE_ALERT, ACCOUNT_PATH, DEFAULT_ERROR_MESSAGE, DEFAULT_SUCCESS_MESSAGE};

/// Lo único que el usuario ve de cada acción
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Alerta bloqueante
    Alert(String),
    /// Navegar a otra URL (redirect del backend)
    Navigate(String),
    /// Nada que mostrar
    None,
}

pub struct FormViewModel<T: HttpTransport = ApiClient> {
    transport: T,
    state: FormState,
    single_flight: bool,
}

impl FormViewModel<ApiClient> {
    pub fn new(state: FormState, single_flight: bool) -> Self {
        Self::with_transport(ApiClient::new(), state, single_flight)
    }
}

impl<T: HttpTransport> FormViewModel<T> {
    pub fn with_transport(transport: T, state: FormState, single_flight: bool) -> Self {
        Self {
            transport,
            state,
            single_flight,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Cambiar Login <-> Sign Up
    pub fn toggle(&self) -> UiMode {
        let mode = self.state.toggle_mode();
        log::info!("🔀 [FORM] Modo: {}", mode.title());
        mode
    }

    /// Enviar credenciales al endpoint del modo actual
    pub async fn submit(&self, form: CredentialForm) -> Feedback {
        if self.single_flight && self.state.is_submitting() {
            log::warn!("⏳ [FORM] Submit ignorado, ya hay uno en vuelo");
            return Feedback::None;
        }

        let mode = self.state.get_mode();
        log::info!("📤 [FORM] Submit {} -> {}", mode.title(), mode.endpoint());

        self.state.set_submitting(true);
        let result = match self.transport.post_form(mode.endpoint(), &form).await {
            Ok(reply) => interpret_submit_reply(reply),
            Err(e) => Err(e),
        };
        self.state.set_submitting(false);

        submit_feedback(result)
    }

    /// Pedir /api/account con las cookies de la sesión
    pub async fn fetch_account(&self) -> Feedback {
        let result = match self.transport.get_with_credentials(ACCOUNT_PATH).await {
            Ok(reply) => interpret_account_reply(reply),
            Err(e) => Err(e),
        };
        account_feedback(result)
    }
}

/// Mapear el resultado de un submit a lo que ve el usuario
pub fn submit_feedback(result: Result<SubmitReply, ApiError>) -> Feedback {
    match result {
        Ok(SubmitReply::Redirect(url)) => {
            log::info!("↪️ [FORM] Redirect a {}", url);
            Feedback::Navigate(url)
        }
        Ok(SubmitReply::Json(value)) => Feedback::Alert(json_success_text(&value)),
        Ok(SubmitReply::Text(text)) => Feedback::Alert(text),
        Err(e) => {
            log::error!("❌ [FORM] {}: {}", e.kind(), e);
            let message = if e.message().is_empty() {
                DEFAULT_ERROR_MESSAGE
            } else {
                e.message()
            };
            Feedback::Alert(format!("Error: {}", message))
        }
    }
}

/// Mapear el resultado del fetch de cuenta
pub fn account_feedback(result: Result<AccountDetails, ApiError>) -> Feedback {
    match result {
        Ok(details) => {
            let text = details.to_display_string();
            log::info!("Account Details: {}", text);
            Feedback::Alert(format!("Account Details: {}", text))
        }
        Err(e) => {
            log::error!("❌ [ACCOUNT] Error fetching account details: {}", e);
            Feedback::Alert(ACCOUNT_FAILURE_ALERT.to_string())
        }
    }
}

/// Objetos (y null) muestran "Success: <message>"; escalares van tal cual
fn json_success_text(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let message = map
                .get("message")
                .filter(|m| is_truthy(m))
                .map(display_value)
                .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
            format!("Success: {}", message)
        }
        // null se trata como objeto sin "message" (el script JS fallaba aquí con Error: ...)
        Value::Null | Value::Array(_) => format!("Success: {}", DEFAULT_SUCCESS_MESSAGE),
        scalar => display_value(scalar),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
