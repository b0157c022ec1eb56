//! Integration tests for keyboard dispatch ordering and isolation.

use std::cell::RefCell;
use std::rc::Rc;

use tui_deck::core::{DispatcherHandle, GameError, KeyDispatcher};
use tui_deck::types::Key;

#[test]
fn test_events_while_disabled_reach_nobody() {
    let hits = Rc::new(RefCell::new(0u32));
    let mut dispatcher = KeyDispatcher::new();
    let log = Rc::clone(&hits);
    dispatcher.register(Box::new(move |_| {
        *log.borrow_mut() += 1;
        Ok(())
    }));

    dispatcher.dispatch(&Key::Enter);
    dispatcher.dispatch(&Key::Char('1'));
    assert_eq!(*hits.borrow(), 0);

    dispatcher.enable();
    dispatcher.dispatch(&Key::Enter);
    assert_eq!(*hits.borrow(), 1);

    dispatcher.disable();
    dispatcher.dispatch(&Key::Enter);
    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn test_three_listeners_each_event_exactly_once_in_order() {
    let log: Rc<RefCell<Vec<(u8, Key)>>> = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = KeyDispatcher::new();
    for id in 0..3u8 {
        let log = Rc::clone(&log);
        dispatcher.register(Box::new(move |key| {
            log.borrow_mut().push((id, *key));
            Ok(())
        }));
    }
    dispatcher.enable();

    let events = [Key::Char('1'), Key::Enter, Key::Left];
    for key in &events {
        dispatcher.dispatch(key);
    }

    let seen = log.borrow();
    assert_eq!(seen.len(), 9);
    for (event_idx, key) in events.iter().enumerate() {
        for id in 0..3u8 {
            assert_eq!(seen[event_idx * 3 + id as usize], (id, *key));
        }
    }
}

#[test]
fn test_listener_failure_is_isolated() {
    let reached = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = KeyDispatcher::new();

    let log = Rc::clone(&reached);
    dispatcher.register(Box::new(move |_| {
        log.borrow_mut().push("first");
        Err(GameError::listener("listener one blew up"))
    }));
    let log = Rc::clone(&reached);
    dispatcher.register(Box::new(move |_| {
        log.borrow_mut().push("second");
        Ok(())
    }));
    dispatcher.enable();

    dispatcher.dispatch(&Key::Char('x'));
    assert_eq!(*reached.borrow(), vec!["first", "second"]);
}

#[test]
fn test_handle_exposes_shared_lifecycle() {
    let a = DispatcherHandle::new();
    let b = a.clone();

    a.register(Box::new(|_| Ok(())));
    a.register(Box::new(|_| Ok(())));
    b.enable();

    assert!(a.is_enabled());
    assert_eq!(b.listener_count(), 2);

    b.disable();
    assert_eq!(b.listener_count(), 2, "disable must not clear listeners");

    b.clear();
    assert_eq!(a.listener_count(), 0);
}
