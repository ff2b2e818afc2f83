/// Valores del formulario leídos al momento del submit
#[derive(Clone, PartialEq, Eq, Default)]
pub struct CredentialForm {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl CredentialForm {
    pub fn new(email: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Campos del multipart, siempre los tres y en este orden
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("email", &self.email),
            ("username", &self.username),
            ("password", &self.password),
        ]
    }
}

// Sin password en los logs
impl std::fmt::Debug for CredentialForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialForm")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
