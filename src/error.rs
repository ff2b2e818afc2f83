// ============================================================================
// ERRORES - Fallos de las llamadas HTTP del formulario
// ============================================================================

use thiserror::Error;

/// Error de una llamada al backend. Todas las variantes terminan en la
/// misma alerta; el tipo solo sirve para el log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Status fuera de 2xx (texto del servidor o mensaje genérico)
    #[error("{0}")]
    Request(String),
    /// Fallo de transporte (DNS, conectividad, CORS)
    #[error("{0}")]
    Network(String),
    /// JSON mal formado cuando el content-type prometía JSON
    #[error("{0}")]
    Parse(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Request(msg) | ApiError::Network(msg) | ApiError::Parse(msg) => msg,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Request(_) => "RequestError",
            ApiError::Network(_) => "NetworkError",
            ApiError::Parse(_) => "ParseError",
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = ApiError::Request("bad credentials".to_string());
        assert_eq!(err.to_string(), "bad credentials");
        assert_eq!(err.kind(), "RequestError");
    }

    #[test]
    fn test_serde_error_becomes_parse() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(matches!(err, ApiError::Parse(_)));
        assert!(!err.message().is_empty());
    }
}
