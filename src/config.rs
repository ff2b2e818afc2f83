// ============================================================================
// CONFIG - Configuración en tiempo de compilación
// ============================================================================
// Los valores llegan vía option_env! (build.rs carga .env si existe)
// ============================================================================

use log::Level;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefijo para las rutas /api/*; vacío = mismo origen
    pub backend_url: String,
    pub enable_logging: bool,
    pub log_level: Level,
    /// Descarta un submit mientras otro sigue en vuelo
    pub single_flight: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            enable_logging: true,
            log_level: Level::Info,
            single_flight: false,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("LOG_LEVEL"),
            option_env!("ENABLE_LOGGING"),
            option_env!("SINGLE_FLIGHT"),
        )
    }

    /// Construir desde valores crudos; lo que no parsea cae al default
    pub fn from_values(
        backend_url: Option<&str>,
        log_level: Option<&str>,
        enable_logging: Option<&str>,
        single_flight: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_level),
            single_flight: single_flight
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.single_flight),
        }
    }

    /// URL completa para una ruta del backend
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.endpoint_url("/api/login"), "/api/login");
    }

    #[test]
    fn test_values_are_parsed() {
        let config = AppConfig::from_values(
            Some("https://auth.example.com/"),
            Some("debug"),
            Some("false"),
            Some("true"),
        );
        assert_eq!(config.endpoint_url("/api/account"), "https://auth.example.com/api/account");
        assert_eq!(config.log_level, Level::Debug);
        assert!(!config.enable_logging);
        assert!(config.single_flight);
    }

    #[test]
    fn test_garbage_falls_back_to_default() {
        let config = AppConfig::from_values(None, Some("loud"), Some("yes"), Some("1"));
        assert_eq!(config.log_level, Level::Info);
        assert!(config.enable_logging);
        assert!(!config.single_flight);
    }
}
