// ============================================================================
// HTTP REPLY - Resumen de una respuesta, independiente del navegador
// ============================================================================

use serde_json::Value;
use crate::error::ApiError;

/// Lo que el controlador necesita saber de una respuesta ya completada
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub redirected: bool,
    /// URL final (la del redirect si lo hubo)
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    /// Texto del body. Vacío si no se leyó (redirect, o error sin inspección);
    /// Err si la lectura falló.
    pub body: Result<String, ApiError>,
}

impl HttpReply {
    /// Igual que Response.ok: 200..=299
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// Constructores para tests
#[cfg(test)]
impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            redirected: false,
            url: String::new(),
            status,
            content_type: None,
            body: Ok(body.into()),
        }
    }

    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self::new(status, body).with_content_type("application/json; charset=utf-8")
    }

    pub fn redirect(url: impl Into<String>) -> Self {
        Self {
            redirected: true,
            url: url.into(),
            ..Self::new(200, "")
        }
    }

    pub fn unreadable(status: u16, err: ApiError) -> Self {
        Self {
            body: Err(err),
            ..Self::new(status, "")
        }
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }
}

/// Resultado exitoso de un submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitReply {
    Redirect(String),
    Json(Value),
    Text(String),
}
