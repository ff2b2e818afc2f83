/// Rutas del backend
pub const LOGIN_PATH: &str = "/api/login";
pub const SIGNUP_PATH: &str = "/api/signup";
pub const ACCOUNT_PATH: &str = "/api/account";

/// IDs de los elementos del formulario en index.html
pub const LOGIN_FORM_ID: &str = "loginForm";
pub const TOGGLE_BUTTON_ID: &str = "toggleButton";
pub const FORM_TITLE_ID: &str = "formTitle";
pub const USERNAME_ID: &str = "username";
pub const PASSWORD_ID: &str = "password";
pub const EMAIL_ID: &str = "email";
pub const FETCH_ACCOUNT_BUTTON_ID: &str = "fetchAccountButton";

/// Textos que ve el usuario
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Operation completed successfully";
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong";
pub const ACCOUNT_NOT_OK_MESSAGE: &str = "Network response was not ok";
pub const ACCOUNT_FAILURE_ALERT: &str = "Failed to fetch account details.";

pub const JSON_CONTENT_TYPE: &str = "application/json";
