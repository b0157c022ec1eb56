//! Keyboard dispatcher: broadcast of key events to registered listeners.
//!
//! Delivery is gated by an enable flag (default off) and runs synchronously
//! in registration order. A failing listener is logged and skipped; it never
//! blocks delivery to the listeners behind it.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use tui_deck_types::Key;

use crate::error::GameError;

/// A registered key listener.
///
/// Listeners are appended in registration order and invoked in that order.
pub type KeyListener = Box<dyn FnMut(&Key) -> Result<(), GameError>>;

/// Process-wide key event fan-out with an explicit lifecycle.
///
/// Listeners are added only while a game is active and are fully cleared on
/// mode exit; no listener outlives the game instance that registered it.
#[derive(Default)]
pub struct KeyDispatcher {
    enabled: bool,
    listeners: Vec<KeyListener>,
}

impl KeyDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stop delivery. Does not clear the listener sequence.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append a listener. No de-duplication.
    pub fn register(&mut self, listener: KeyListener) {
        self.listeners.push(listener);
    }

    /// Drop every registered listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver one key event.
    ///
    /// Dropped entirely while disabled. Otherwise every listener is invoked
    /// in registration order; a listener error is logged and delivery
    /// continues with the next listener.
    pub fn dispatch(&mut self, key: &Key) {
        if !self.enabled {
            return;
        }

        for listener in self.listeners.iter_mut() {
            if let Err(err) = listener(key) {
                warn!(error = %err, "key listener failed");
            }
        }
    }
}

/// Cloneable single-threaded handle to a [`KeyDispatcher`].
///
/// The controller and every game module hold clones of one handle; the
/// dispatcher itself lives behind a `RefCell`. Listeners must not register
/// or clear through a handle while a dispatch is in flight — the re-borrow
/// panics rather than leaving the in-flight iteration half-applied.
#[derive(Clone, Default)]
pub struct DispatcherHandle(Rc<RefCell<KeyDispatcher>>);

impl DispatcherHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&self) {
        self.0.borrow_mut().enable();
    }

    pub fn disable(&self) {
        self.0.borrow_mut().disable();
    }

    pub fn is_enabled(&self) -> bool {
        self.0.borrow().is_enabled()
    }

    pub fn register(&self, listener: KeyListener) {
        self.0.borrow_mut().register(listener);
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn listener_count(&self) -> usize {
        self.0.borrow().listener_count()
    }

    pub fn dispatch(&self, key: &Key) {
        self.0.borrow_mut().dispatch(key);
    }
}

impl std::fmt::Debug for DispatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let d = self.0.borrow();
        f.debug_struct("DispatcherHandle")
            .field("enabled", &d.is_enabled())
            .field("listeners", &d.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn counting_listener(log: &Rc<RefCell<Vec<(usize, Key)>>>, id: usize) -> KeyListener {
        let log = Rc::clone(log);
        Box::new(move |key| {
            log.borrow_mut().push((id, *key));
            Ok(())
        })
    }

    #[test]
    fn disabled_dispatch_reaches_no_listener() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = KeyDispatcher::new();
        dispatcher.register(counting_listener(&log, 0));

        dispatcher.dispatch(&Key::Enter);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn delivery_is_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = KeyDispatcher::new();
        for id in 0..3 {
            dispatcher.register(counting_listener(&log, id));
        }
        dispatcher.enable();

        dispatcher.dispatch(&Key::Char('a'));
        dispatcher.dispatch(&Key::Left);

        let seen = log.borrow();
        assert_eq!(
            *seen,
            vec![
                (0, Key::Char('a')),
                (1, Key::Char('a')),
                (2, Key::Char('a')),
                (0, Key::Left),
                (1, Key::Left),
                (2, Key::Left),
            ]
        );
    }

    #[test]
    fn listener_error_does_not_stop_delivery() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = KeyDispatcher::new();
        dispatcher.register(counting_listener(&log, 0));
        dispatcher.register(Box::new(|_| Err(GameError::listener("boom"))));
        dispatcher.register(counting_listener(&log, 2));
        dispatcher.enable();

        dispatcher.dispatch(&Key::Enter);

        let ids: Vec<usize> = log.borrow().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn disable_keeps_listeners_clear_drops_them() {
        let mut dispatcher = KeyDispatcher::new();
        dispatcher.register(Box::new(|_| Ok(())));
        dispatcher.register(Box::new(|_| Ok(())));
        dispatcher.enable();

        dispatcher.disable();
        assert_eq!(dispatcher.listener_count(), 2);

        dispatcher.clear();
        assert_eq!(dispatcher.listener_count(), 0);
    }

    #[test]
    fn handle_clones_share_the_dispatcher() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = DispatcherHandle::new();
        let b = a.clone();

        a.register(counting_listener(&log, 7));
        b.enable();
        a.dispatch(&Key::Char('x'));

        assert_eq!(log.borrow().len(), 1);
        assert!(b.is_enabled());
        assert_eq!(b.listener_count(), 1);
    }
}
