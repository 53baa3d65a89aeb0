// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

/// Estado reactivo con sistema de notificaciones.
/// Los clones comparten valor y subscribers.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback<T>>>>,
}

impl<T: Clone> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Copia del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&T) + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    // Sin borrows activos mientras corren los callbacks: pueden leer o escribir el estado
    fn notify(&self) {
        let value = self.get();
        let subscribers: Vec<Callback<T>> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback(&value);
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_set_notifies_with_new_value() {
        let state = ReactiveState::new(None::<String>);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            state.subscribe(move |value| seen.borrow_mut().push(value.clone()));
        }

        state.set(Some("QR123".to_string()));
        state.set(None);

        assert_eq!(*seen.borrow(), vec![Some("QR123".to_string()), None]);
    }

    #[test]
    fn test_clones_share_value_and_subscribers() {
        let state = ReactiveState::new(0u32);
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            state.subscribe(move |_| calls.set(calls.get() + 1));
        }

        let clone = state.clone();
        clone.set(5);

        assert_eq!(state.get(), 5);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_subscriber_may_read_state() {
        let state = ReactiveState::new(1u32);
        let observed = Rc::new(Cell::new(0));
        {
            let reader = state.clone();
            let observed = observed.clone();
            state.subscribe(move |_| observed.set(reader.get()));
        }
        state.set(7);
        assert_eq!(observed.get(), 7);
    }
}
