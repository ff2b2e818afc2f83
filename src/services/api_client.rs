// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO interpreta respuestas: devuelve un HttpReply y el ViewModel decide
// ============================================================================

use gloo_net::http::{Request, Response};
use wasm_bindgen::JsValue;
use web_sys::{FormData, RequestCredentials, RequestRedirect};
use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{CredentialForm, HttpReply};

/// Transporte HTTP usado por el ViewModel
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// POST multipart con los tres campos, siguiendo redirects
    async fn post_form(&self, path: &str, form: &CredentialForm) -> Result<HttpReply, ApiError>;

    /// GET enviando cookies de la sesión
    async fn get_with_credentials(&self, path: &str) -> Result<HttpReply, ApiError>;
}

/// Cliente API sobre fetch (gloo-net); la URL base sale de CONFIG
#[derive(Clone, Default)]
pub struct ApiClient;

impl ApiClient {
    pub fn new() -> Self {
        Self
    }
}

impl HttpTransport for ApiClient {
    async fn post_form(&self, path: &str, form: &CredentialForm) -> Result<HttpReply, ApiError> {
        let url = CONFIG.endpoint_url(path);
        log::debug!("[API] POST {}", url);

        let body = build_form_data(form).map_err(js_error)?;
        let response = Request::post(&url)
            .redirect(RequestRedirect::Follow)
            .body(body)?
            .send()
            .await?;

        // El texto de un error se muestra al usuario
        into_reply(response, BodyRead::Always).await
    }

    async fn get_with_credentials(&self, path: &str) -> Result<HttpReply, ApiError> {
        let url = CONFIG.endpoint_url(path);
        log::debug!("[API] GET {}", url);

        let response = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .send()
            .await?;

        // El body de un error no se inspecciona
        into_reply(response, BodyRead::OnSuccess).await
    }
}

fn build_form_data(form: &CredentialForm) -> Result<FormData, JsValue> {
    let data = FormData::new()?;
    for (name, value) in form.fields() {
        data.append_with_str(name, value)?;
    }
    Ok(data)
}

/// Cuándo leer el body de una respuesta no redirigida
#[derive(Clone, Copy, PartialEq)]
enum BodyRead {
    Always,
    OnSuccess,
}

fn should_read_body(reply: &HttpReply, read: BodyRead) -> bool {
    !reply.redirected && (read == BodyRead::Always || reply.is_success())
}

/// Un redirect nunca lee el body: el navegador va a navegar igualmente
async fn into_reply(response: Response, read: BodyRead) -> Result<HttpReply, ApiError> {
    let mut reply = HttpReply {
        redirected: response.redirected(),
        url: response.url(),
        status: response.status(),
        content_type: response.headers().get("content-type"),
        body: Ok(String::new()),
    };
    if should_read_body(&reply, read) {
        reply.body = response.text().await.map_err(ApiError::from);
    }
    log::debug!(
        "[API] {} {} (redirected: {})",
        reply.status,
        reply.url,
        reply.redirected
    );
    Ok(reply)
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_skips_body() {
        let reply = HttpReply::redirect("http://localhost/home");
        assert!(!should_read_body(&reply, BodyRead::Always));
        assert!(!should_read_body(&reply, BodyRead::OnSuccess));
    }

    #[test]
    fn test_error_body_only_read_when_shown() {
        let forbidden = HttpReply::new(403, "");
        assert!(should_read_body(&forbidden, BodyRead::Always));
        assert!(!should_read_body(&forbidden, BodyRead::OnSuccess));
    }

    #[test]
    fn test_success_body_always_read() {
        let ok = HttpReply::new(200, "");
        assert!(should_read_body(&ok, BodyRead::Always));
        assert!(should_read_body(&ok, BodyRead::OnSuccess));
    }
}
