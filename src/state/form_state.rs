// ============================================================================
// FORM STATE - Modo del formulario + submit en vuelo
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::UiMode;
use crate::state::ReactiveState;

/// Estado del controlador. Clonar comparte el mismo estado.
#[derive(Clone)]
pub struct FormState {
    pub mode: Rc<ReactiveState<UiMode>>,
    pub submitting: Rc<RefCell<bool>>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            mode: Rc::new(ReactiveState::new(UiMode::default())),
            submitting: Rc::new(RefCell::new(false)),
        }
    }

    pub fn get_mode(&self) -> UiMode {
        self.mode.get()
    }

    /// Cambiar de modo y notificar; devuelve el modo nuevo
    pub fn toggle_mode(&self) -> UiMode {
        self.mode.update(|mode| *mode = mode.toggled())
    }

    /// Suscribirse a cambios de modo
    pub fn subscribe_to_mode<F>(&self, callback: F)
    where
        F: Fn(UiMode) + 'static,
    {
        let mode = self.mode.clone();
        // Rc débil: el callback vive dentro del propio ReactiveState
        let weak = Rc::downgrade(&mode);
        mode.subscribe(move || {
            if let Some(mode) = weak.upgrade() {
                callback(mode.get());
            }
        });
    }

    pub fn is_submitting(&self) -> bool {
        *self.submitting.borrow()
    }

    pub fn set_submitting(&self, submitting: bool) {
        *self.submitting.borrow_mut() = submitting;
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_toggle_flips_and_notifies() {
        let state = FormState::new();
        let last = Rc::new(Cell::new(None));
        {
            let last = last.clone();
            state.subscribe_to_mode(move |mode| last.set(Some(mode)));
        }
        assert_eq!(state.toggle_mode(), UiMode::SignUp);
        assert_eq!(last.get(), Some(UiMode::SignUp));
        assert_eq!(state.toggle_mode(), UiMode::Login);
        assert_eq!(last.get(), Some(UiMode::Login));
    }

    #[test]
    fn test_clones_share_state() {
        let state = FormState::new();
        let other = state.clone();
        other.toggle_mode();
        other.set_submitting(true);
        assert_eq!(state.get_mode(), UiMode::SignUp);
        assert!(state.is_submitting());
    }
}
