use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Datos de cuenta tal como los manda el servidor (sin esquema)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountDetails(pub Value);

impl AccountDetails {
    /// JSON compacto, respetando el orden de claves recibido
    pub fn to_display_string(&self) -> String {
        self.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_server_key_order() {
        let details: AccountDetails =
            serde_json::from_str(r#"{"username":"bob","email":"b@x.io","age":3}"#).unwrap();
        assert_eq!(
            details.to_display_string(),
            r#"{"username":"bob","email":"b@x.io","age":3}"#
        );
    }
}
