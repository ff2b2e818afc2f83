// ============================================================================
// UI MODE - Login / Sign Up
// ============================================================================

use crate::utils::{LOGIN_PATH, SIGNUP_PATH};

/// Modo del formulario. Inicial: Login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Login,
    SignUp,
}

impl UiMode {
    /// Cambiar al otro modo
    pub fn toggled(self) -> Self {
        match self {
            UiMode::Login => UiMode::SignUp,
            UiMode::SignUp => UiMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            UiMode::Login => "Login",
            UiMode::SignUp => "Sign Up",
        }
    }

    /// Texto del botón toggle: la acción del otro modo
    pub fn toggle_label(self) -> &'static str {
        self.toggled().title()
    }

    /// Ruta a la que se envía el formulario
    pub fn endpoint(self) -> &'static str {
        match self {
            UiMode::Login => LOGIN_PATH,
            UiMode::SignUp => SIGNUP_PATH,
        }
    }

    pub fn view(self) -> FormView {
        FormView::from(self)
    }
}

/// Proyección del modo sobre el DOM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub toggle_label: &'static str,
    pub password_required: bool,
    pub username_display: &'static str,
}

impl From<UiMode> for FormView {
    fn from(mode: UiMode) -> Self {
        Self {
            title: mode.title(),
            toggle_label: mode.toggle_label(),
            password_required: true,
            // Username visible en ambos modos (igual que el formulario original)
            username_display: "block",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle_n(mode: UiMode, n: usize) -> UiMode {
        (0..n).fold(mode, |m, _| m.toggled())
    }

    #[test]
    fn test_initial_mode_is_login() {
        assert_eq!(UiMode::default(), UiMode::Login);
        assert_eq!(UiMode::default().title(), "Login");
    }

    #[test]
    fn test_toggle_parity() {
        let start = UiMode::Login;
        for n in 0..8 {
            let title = toggle_n(start, n).title();
            if n % 2 == 0 {
                assert_eq!(title, start.title(), "{} toggles", n);
            } else {
                assert_eq!(title, "Sign Up", "{} toggles", n);
            }
        }
    }

    #[test]
    fn test_toggle_label_shows_other_action() {
        assert_eq!(UiMode::Login.toggle_label(), "Sign Up");
        assert_eq!(UiMode::SignUp.toggle_label(), "Login");
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(UiMode::Login.endpoint(), "/api/login");
        assert_eq!(UiMode::SignUp.endpoint(), "/api/signup");
    }

    #[test]
    fn test_view_keeps_username_and_password_flags_in_both_modes() {
        for mode in [UiMode::Login, UiMode::SignUp] {
            let view = mode.view();
            assert!(view.password_required);
            assert_eq!(view.username_display, "block");
        }
    }
}
