//! Tests for notification_store

use super::*;
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Subscribe a callback that records every state it receives
fn record(store: &mut NotificationStore) -> (SubscriberId, Rc<RefCell<Vec<NotificationState>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = store.subscribe(move |state| sink.borrow_mut().push(state.clone()));
    (id, seen)
}

#[test]
fn test_new_store_is_hidden() {
    let store = NotificationStore::new();
    assert_eq!(store.state(), &NotificationState::empty());
    assert!(!store.is_visible());
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn test_show_defaults_to_info() {
    let mut store = NotificationStore::new();
    store.show("Hello");
    assert_eq!(store.state(), &NotificationState::shown("Hello", Severity::Info));
}

#[test]
fn test_show_success() {
    let mut store = NotificationStore::new();
    store.show_success("Saved");
    assert_eq!(
        store.state(),
        &NotificationState::shown("Saved", Severity::Success)
    );
}

#[test]
fn test_show_error() {
    let mut store = NotificationStore::new();
    store.show_error("Upload failed");
    assert_eq!(
        store.state(),
        &NotificationState::shown("Upload failed", Severity::Error)
    );
}

#[test]
fn test_show_empty_message_is_displayed() {
    let mut store = NotificationStore::new();
    store.show("");
    assert!(store.is_visible());
    assert_eq!(store.state().message, "");
}

#[test]
fn test_show_overwrites_visible_notification() {
    let mut store = NotificationStore::new();
    store.show_error("First");
    store.show("Second");
    assert_eq!(store.state(), &NotificationState::shown("Second", Severity::Info));
}

#[test]
fn test_hide_resets_to_empty() {
    let mut store = NotificationStore::new();
    store.show_error("Broken");
    store.hide();
    assert_eq!(store.state(), &NotificationState::empty());
    assert_eq!(store.state().message, "");
    assert_eq!(store.state().severity, Severity::Info);
}

#[test]
fn test_hide_is_idempotent() {
    let mut store = NotificationStore::new();
    store.show("x");
    store.hide();
    let once = store.state().clone();
    store.hide();
    assert_eq!(store.state(), &once);
}

#[test]
fn test_show_error_then_hide_ends_empty() {
    let mut store = NotificationStore::new();
    store.show("a");
    store.show_error("b");
    store.hide();
    assert!(store.state().is_empty());
}

#[test]
fn test_subscribe_receives_current_state_immediately() {
    let mut store = NotificationStore::new();
    store.show_success("Already here");

    let (_, seen) = record(&mut store);

    assert_eq!(
        *seen.borrow(),
        vec![NotificationState::shown("Already here", Severity::Success)]
    );
}

#[test]
fn test_subscriber_notified_once_per_call() {
    let mut store = NotificationStore::new();
    let (_, seen) = record(&mut store);

    store.show("one");
    store.hide();
    store.hide();
    store.show_error("two");

    assert_eq!(
        *seen.borrow(),
        vec![
            NotificationState::empty(),
            NotificationState::shown("one", Severity::Info),
            NotificationState::empty(),
            NotificationState::empty(),
            NotificationState::shown("two", Severity::Error),
        ]
    );
}

#[test]
fn test_all_subscribers_notified_in_registration_order() {
    let mut store = NotificationStore::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let order = Rc::clone(&order);
        store.subscribe(move |_| order.borrow_mut().push(tag));
    }
    order.borrow_mut().clear();

    store.show("ping");

    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let mut store = NotificationStore::new();
    let (id, seen) = record(&mut store);

    assert!(store.unsubscribe(id));
    store.show("ignored");

    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn test_unsubscribe_unknown_id() {
    let mut store = NotificationStore::new();
    assert!(!store.unsubscribe(42));

    let (id, _) = record(&mut store);
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
}

#[test]
fn test_subscriber_ids_are_unique() {
    let mut store = NotificationStore::new();
    let (a, _) = record(&mut store);
    let (b, _) = record(&mut store);
    store.unsubscribe(a);
    let (c, _) = record(&mut store);

    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}

#[test]
fn test_channel_subscriber_receives_updates() {
    let mut store = NotificationStore::new();
    let (_, rx) = store.subscribe_channel();

    store.show_success("Saved");
    store.hide();

    let received: Vec<_> = rx.try_iter().collect();
    assert_eq!(
        received,
        vec![
            NotificationState::empty(),
            NotificationState::shown("Saved", Severity::Success),
            NotificationState::empty(),
        ]
    );
}

#[test]
fn test_dropped_channel_subscriber_is_pruned() {
    let mut store = NotificationStore::new();
    let (_, rx) = store.subscribe_channel();
    let (_, seen) = record(&mut store);
    assert_eq!(store.subscriber_count(), 2);

    drop(rx);
    store.show("after drop");

    assert_eq!(store.subscriber_count(), 1);
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn test_end_to_end_saved_then_hide() {
    let mut store = NotificationStore::new();
    let (_, seen) = record(&mut store);

    assert_eq!(
        store.state(),
        &NotificationState {
            visible: false,
            message: String::new(),
            severity: Severity::Info,
        }
    );

    store.show_success("Saved");
    assert_eq!(
        store.state(),
        &NotificationState {
            visible: true,
            message: "Saved".to_string(),
            severity: Severity::Success,
        }
    );

    store.hide();
    assert_eq!(store.state(), &NotificationState::empty());
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn test_debug_reports_subscriber_count() {
    let mut store = NotificationStore::new();
    let (_id, _seen) = record(&mut store);
    let debug = format!("{:?}", store);
    assert!(debug.contains("subscribers: 1"));
}

#[derive(Debug, Clone)]
enum Op {
    Show(String),
    Success(String),
    Error(String),
    Hide,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,30}".prop_map(Op::Show),
        "[a-zA-Z0-9 ]{0,30}".prop_map(Op::Success),
        "[a-zA-Z0-9 ]{0,30}".prop_map(Op::Error),
        Just(Op::Hide),
    ]
}

fn apply(store: &mut NotificationStore, op: &Op) {
    match op {
        Op::Show(m) => store.show(m),
        Op::Success(m) => store.show_success(m),
        Op::Error(m) => store.show_error(m),
        Op::Hide => store.hide(),
    }
}

fn expected(op: &Op) -> NotificationState {
    match op {
        Op::Show(m) => NotificationState::shown(m, Severity::Info),
        Op::Success(m) => NotificationState::shown(m, Severity::Success),
        Op::Error(m) => NotificationState::shown(m, Severity::Error),
        Op::Hide => NotificationState::empty(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any sequence of calls, the final state is the effect of the last call only.
    #[test]
    fn prop_last_write_wins(ops in prop::collection::vec(op_strategy(), 1..20)) {
        let mut store = NotificationStore::new();
        for op in &ops {
            apply(&mut store, op);
        }

        let last = ops.last().unwrap();
        prop_assert_eq!(store.state(), &expected(last));
    }

    /// Every subscriber sees the initial state plus exactly one state per call.
    #[test]
    fn prop_one_notification_per_call(ops in prop::collection::vec(op_strategy(), 0..20)) {
        let mut store = NotificationStore::new();
        let (_, seen) = record(&mut store);
        let (_, rx) = store.subscribe_channel();

        for op in &ops {
            apply(&mut store, op);
        }

        let mut want = vec![NotificationState::empty()];
        want.extend(ops.iter().map(expected));

        prop_assert_eq!(&*seen.borrow(), &want);
        prop_assert_eq!(rx.try_iter().collect::<Vec<_>>(), want);
    }

    /// A hidden store always holds exactly the empty value.
    #[test]
    fn prop_hidden_implies_empty(ops in prop::collection::vec(op_strategy(), 0..20)) {
        let mut store = NotificationStore::new();
        for op in &ops {
            apply(&mut store, op);
            if !store.is_visible() {
                prop_assert!(store.state().is_empty());
            }
        }
    }
}
