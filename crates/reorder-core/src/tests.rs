//! Engine Protocol Tests
//!
//! End-to-end behavior of commands, drops and notifications.

use std::cell::RefCell;
use std::rc::Rc;

use crate::observer::Observers;
use crate::transaction::Proposal;
use crate::{
    on_before_update, Announcer, Decision, DropReport, ItemId, List, LiveText, MoveKind,
    MoveRequest, Outcome, ReorderEngine, ReorderEvent, ReorderObserver,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seen {
    Before(ReorderEvent),
    Update(ReorderEvent),
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<Seen>>>);

impl Recorder {
    fn seen(&self) -> Vec<Seen> {
        self.0.borrow().clone()
    }
}

impl ReorderObserver for Recorder {
    fn before_update(&mut self, event: &ReorderEvent) -> Decision {
        self.0.borrow_mut().push(Seen::Before(*event));
        Decision::Proceed
    }

    fn update(&mut self, event: &ReorderEvent) {
        self.0.borrow_mut().push(Seen::Update(*event));
    }
}

fn setup(values: &[&str]) -> (ReorderEngine, Recorder, Vec<ItemId>) {
    let mut engine = ReorderEngine::new(List::from_values(values.iter().copied()));
    let recorder = Recorder::default();
    engine.subscribe(Box::new(recorder.clone()));
    let ids = engine.list().items().iter().map(|item| item.id()).collect();
    (engine, recorder, ids)
}

fn order(engine: &ReorderEngine) -> Vec<String> {
    engine
        .values()
        .into_iter()
        .map(|value| value.unwrap_or_default())
        .collect()
}

#[test]
fn test_move_validity_at_boundaries() {
    for len in 1..=4usize {
        let values: Vec<String> = (0..len).map(|i| format!("v{}", i)).collect();
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();

        for i in 0..len {
            for kind in MoveKind::ALL {
                let (mut engine, recorder, ids) = setup(&refs);
                let outcome = engine.request_move(MoveRequest::new(kind, ids[i]));
                let expect_noop = match kind {
                    MoveKind::Top | MoveKind::Up => i == 0,
                    MoveKind::Down => i == len - 1,
                };
                assert_eq!(
                    outcome == Outcome::NoOp,
                    expect_noop,
                    "{:?} at {} of {}",
                    kind,
                    i,
                    len
                );
                if expect_noop {
                    assert!(recorder.seen().is_empty());
                }
            }
        }
    }
}

#[test]
fn test_before_update_precedes_identical_update() {
    let (mut engine, recorder, ids) = setup(&["a", "b", "c", "d"]);
    let outcome = engine.move_down(ids[1]);

    let expected = ReorderEvent {
        item: ids[1],
        old_index: 1,
        new_index: 2,
    };
    assert_eq!(outcome, Outcome::Committed(expected));
    assert_eq!(
        recorder.seen(),
        vec![Seen::Before(expected), Seen::Update(expected)]
    );
    assert_eq!(order(&engine), ["a", "c", "b", "d"]);
}

#[test]
fn test_veto_integrity() {
    let (mut engine, recorder, ids) = setup(&["a", "b", "c"]);
    engine.subscribe(Box::new(on_before_update(|_| Decision::Veto)));
    let before = engine.values();
    let revision = engine.list().revision();

    let outcome = engine.move_to_top(ids[2]);

    assert!(matches!(outcome, Outcome::Vetoed(_)));
    assert_eq!(engine.values(), before);
    assert_eq!(engine.list().revision(), revision);
    assert!(matches!(recorder.seen().as_slice(), [Seen::Before(_)]));
}

#[test]
fn test_set_order_with_current_order_is_silent() {
    let (mut engine, recorder, _) = setup(&["a", "b", "c"]);
    let revision = engine.list().revision();
    let current = order(&engine);

    assert!(!engine.set_order(&current));
    assert_eq!(engine.list().revision(), revision);
    assert!(recorder.seen().is_empty());
}

#[test]
fn test_splice_correctness() {
    let (mut engine, _, ids) = setup(&["a", "b", "c", "d"]);
    engine.move_to_top(ids[2]);
    assert_eq!(order(&engine), ["c", "a", "b", "d"]);

    let (mut engine, _, ids) = setup(&["a", "b", "c", "d"]);
    engine.list_mut().move_item(ids[0], 2).unwrap();
    assert!(engine.handle_drop(DropReport::new(ids[0], 0, 2)).is_committed());
    assert_eq!(order(&engine), ["b", "c", "a", "d"]);
}

#[test]
fn test_command_splice_moves_item_forward() {
    let mut list = List::from_values(["a", "b", "c", "d"]);
    let a = list.items()[0].id();
    let mut observers = Observers::new();
    let recorder = Recorder::default();
    observers.subscribe(Box::new(recorder.clone()));

    let outcome = Proposal::command(a, 0, 2, list.snapshot())
        .unwrap()
        .run(&mut list, &mut observers);

    let expected = ReorderEvent {
        item: a,
        old_index: 0,
        new_index: 2,
    };
    assert_eq!(outcome, Outcome::Committed(expected));
    assert_eq!(
        list.values(),
        [Some("b"), Some("c"), Some("a"), Some("d")].map(|v| v.map(String::from))
    );
    assert_eq!(recorder.seen(), [Seen::Before(expected), Seen::Update(expected)]);

    let (mut engine, _, ids) = setup(&["a", "b", "c", "d"]);
    engine.move_down(ids[0]);
    engine.move_down(ids[0]);
    assert_eq!(order(&engine), ["b", "c", "a", "d"]);
}

#[test]
fn test_announcement_after_commit() {
    let (mut engine, _, ids) = setup(&["a", "b", "c", "d"]);
    let text = LiveText::new();
    engine.subscribe(Box::new(Announcer::new(text.clone())));

    engine.list_mut().move_item(ids[1], 3).unwrap();
    engine.handle_drop(DropReport::new(ids[1], 1, 3));

    assert_eq!(text.text(), "Item at index 1 moved to index 3.");
}

#[test]
fn test_no_announcement_for_vetoed_move() {
    let (mut engine, _, ids) = setup(&["a", "b"]);
    let text = LiveText::new();
    engine.subscribe(Box::new(Announcer::new(text.clone())));
    engine.subscribe(Box::new(on_before_update(|_| Decision::Veto)));

    engine.move_up(ids[1]);
    assert_eq!(text.text(), "");
}

#[test]
fn test_same_position_drop_passes_through() {
    let (mut engine, recorder, ids) = setup(&["a", "b", "c"]);
    let revision = engine.list().revision();

    let outcome = engine.handle_drop(DropReport::new(ids[2], 2, 2));

    let expected = ReorderEvent {
        item: ids[2],
        old_index: 2,
        new_index: 2,
    };
    assert_eq!(outcome, Outcome::Committed(expected));
    assert_eq!(
        recorder.seen(),
        vec![Seen::Before(expected), Seen::Update(expected)]
    );
    assert_eq!(engine.list().revision(), revision);
}

#[test]
fn test_vetoed_drop_restores_order() {
    let (mut engine, recorder, ids) = setup(&["a", "b", "c"]);
    engine.subscribe(Box::new(on_before_update(|_| Decision::Veto)));
    let before = engine.values();

    engine.list_mut().move_item(ids[0], 2).unwrap();
    let outcome = engine.handle_drop(DropReport::new(ids[0], 0, 2));

    assert!(matches!(outcome, Outcome::Vetoed(_)));
    assert_eq!(engine.values(), before);
    assert!(matches!(recorder.seen().as_slice(), [Seen::Before(_)]));
}

#[test]
fn test_drop_not_yet_applied_is_reconciled() {
    let (mut engine, _, ids) = setup(&["a", "b", "c"]);
    assert!(engine.handle_drop(DropReport::new(ids[0], 0, 1)).is_committed());
    assert_eq!(order(&engine), ["b", "a", "c"]);
}

#[test]
fn test_detached_item_is_ignored() {
    let (mut engine, recorder, ids) = setup(&["a", "b", "c"]);
    engine.list_mut().detach(ids[1]).unwrap();
    let revision = engine.list().revision();

    for kind in MoveKind::ALL {
        assert_eq!(engine.request_move(MoveRequest::new(kind, ids[1])), Outcome::NoOp);
    }
    assert_eq!(engine.handle_drop(DropReport::new(ids[1], 1, 0)), Outcome::NoOp);

    assert_eq!(engine.list().revision(), revision);
    assert!(recorder.seen().is_empty());
}

#[test]
fn test_item_from_other_list_is_ignored() {
    let (mut engine, recorder, _) = setup(&["a", "b"]);
    let mut other = List::from_values(["a"]);
    let stranger = other.insert("b");

    assert_eq!(engine.move_up(stranger), Outcome::NoOp);
    assert!(recorder.seen().is_empty());
}

#[test]
fn test_unvalued_items_move_by_position() {
    let (mut engine, _, ids) = setup(&["a", "", "c"]);
    assert!(engine.move_to_top(ids[1]).is_committed());
    assert_eq!(engine.list().position(ids[1]), Some(0));
    assert_eq!(order(&engine), ["", "a", "c"]);
}

#[test]
fn test_unsubscribed_observer_stops_hearing() {
    let mut engine = ReorderEngine::new(List::from_values(["a", "b"]));
    let recorder = Recorder::default();
    let id = engine.subscribe(Box::new(recorder.clone()));
    let b = engine.list().items()[1].id();

    engine.move_up(b);
    assert_eq!(recorder.seen().len(), 2);

    assert!(engine.unsubscribe(id));
    engine.move_down(b);
    assert_eq!(recorder.seen().len(), 2);
}
