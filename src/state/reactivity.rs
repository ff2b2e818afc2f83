// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;

type Callback = Box<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Callback>>,
}

impl<T: Clone> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Copia del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Actualizar valor usando closure y notificar; devuelve el valor nuevo
    pub fn update<F>(&self, updater: F) -> T
    where
        F: FnOnce(&mut T),
    {
        let updated = {
            let mut value = self.value.borrow_mut();
            updater(&mut value);
            value.clone()
        };
        self.notify();
        updated
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    /// Notificar a todos los subscribers (el valor ya no está prestado)
    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_update_notifies_every_subscriber() {
        let state = Rc::new(ReactiveState::new(0));
        let calls = Rc::new(Cell::new(0));
        for _ in 0..2 {
            let calls = calls.clone();
            state.subscribe(move || calls.set(calls.get() + 1));
        }
        state.update(|v| *v = 5);
        assert_eq!(calls.get(), 2);
        assert_eq!(state.get(), 5);
    }

    #[test]
    fn test_subscriber_can_read_new_value() {
        let state = Rc::new(ReactiveState::new(String::from("a")));
        let seen = Rc::new(RefCell::new(String::new()));
        {
            let state_in = state.clone();
            let seen = seen.clone();
            state.subscribe(move || *seen.borrow_mut() = state_in.get());
        }
        let updated = state.update(|v| v.push('b'));
        assert_eq!(updated, "ab");
        assert_eq!(*seen.borrow(), "ab");
    }
}
