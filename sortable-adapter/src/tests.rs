use crate::*;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use sortable::{
    ClientRect, DragItem, ElementSnapshot, FixedScroll, Helper, MoveError, PagePoint,
    SortableItem, SortableScope,
};

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| String::from(*s)).collect()
}

fn row(index: usize) -> ElementSnapshot {
    ElementSnapshot::new(ClientRect::new(0.0, index as f64 * 20.0, 200.0, 20.0))
}

#[test]
fn container_ids_are_unique_and_shared_by_clones() {
    let a = ListScope::new(vec![1, 2, 3]);
    let b = ListScope::new(vec![1, 2, 3]);
    assert_ne!(a.id(), b.id());
    assert_eq!(a.clone().element(), a.element());

    let a2 = ListScope::with_id(a.id(), Vec::<i32>::new());
    assert_eq!(a2.element(), a.element());
}

#[test]
fn container_ids_increase_monotonically() {
    let first = ContainerId::next();
    let second = ContainerId::next();
    assert!(second > first);
    assert_ne!(ListScope::<u8>::new(Vec::new()).id(), second);
}

#[test]
fn list_scope_bounds_checks_inserts_and_removes() {
    let list = ListScope::new(vec!['a', 'b']);
    assert_eq!(
        list.remove_item(2),
        Err(MoveError::IndexOutOfBounds { index: 2, len: 2 })
    );
    assert_eq!(list.insert_item(2, 'c'), Ok(()));
    assert_eq!(
        list.insert_item(4, 'd'),
        Err(MoveError::IndexOutOfBounds { index: 4, len: 3 })
    );
    assert_eq!(list.remove_item(0), Ok('a'));
    assert_eq!(list.to_vec(), vec!['b', 'c']);
    assert_eq!(list.len(), 2);
    assert!(!list.is_empty());
}

#[test]
fn list_scope_reports_busy_while_borrowed() {
    let list = ListScope::new(vec![1, 2, 3]);
    let other = list.clone();
    list.with_items(|items| {
        assert_eq!(items, &[1, 2, 3]);
        assert_eq!(other.remove_item(0), Err(MoveError::ContainerBusy));
    });
    assert_eq!(list.len(), 3);
}

#[test]
fn list_item_snapshots_index_and_value() {
    let list = ListScope::new(names(&["x", "y", "z"]));
    let item = list.item(1).unwrap();
    assert_eq!(item.index(), 1);
    assert_eq!(item.value(), "y");
    assert_eq!(item.model_value(), "y");
    assert_eq!(item.sortable_scope().id(), list.id());
    assert_eq!(item.scope().id(), list.id());
    assert!(list.item(3).is_none());
}

#[test]
fn reorder_within_one_list() {
    let list = ListScope::new(names(&["a", "b", "c", "d", "e"]));
    let mut drag = DragItem::new(list.item(1).unwrap());

    // Drop before "e".
    drag.move_to(list.clone(), 4);
    assert_eq!(drag.index(), 3);
    drag.apply().unwrap();
    assert_eq!(list.to_vec(), names(&["a", "c", "d", "b", "e"]));
}

#[test]
fn move_between_lists() {
    let todo = ListScope::new(names(&["write", "test", "ship"]));
    let done = ListScope::new(names(&["plan"]));
    let mut drag = DragItem::new(todo.item(0).unwrap());

    drag.move_to(done.clone(), 1);
    assert!(!drag.is_same_parent());
    let ev = drag.apply().unwrap();

    assert_eq!(todo.to_vec(), names(&["test", "ship"]));
    assert_eq!(done.to_vec(), names(&["plan", "write"]));
    assert_eq!(ev.source.sortable_scope.id(), todo.id());
    assert_eq!(ev.dest.sortable_scope.id(), done.id());
    assert_eq!(ev.dest.index, 1);
}

#[test]
fn session_is_vetoed_by_nodrag_handle() {
    let scroll = FixedScroll::default();
    let helper = Helper::new(&scroll, &scroll);
    let list = ListScope::new(vec![1, 2, 3]);
    let button = row(0).with_attr("data-nodrag", "");

    let session = DragSession::start(
        &helper,
        &PagePoint::new(5.0, 5.0),
        &button,
        &row(0),
        list.item(0).unwrap(),
    );
    assert!(session.is_none());
}

#[test]
fn session_tracks_pointer_and_applies_on_finish() {
    let scroll = FixedScroll::page(0.0, 100.0);
    let helper = Helper::new(&scroll, &scroll);
    let list = ListScope::new(vec![10, 20, 30, 40]);
    let target = row(1);

    let mut session = DragSession::start(
        &helper,
        &PagePoint::new(30.0, 125.0),
        &target,
        &target,
        list.item(1).unwrap(),
    )
    .unwrap();
    assert_eq!(session.position().offset_x, 30.0);
    assert_eq!(session.position().offset_y, 5.0);
    assert!(!session.is_pending_move());

    let placed = session.on_move(&PagePoint::new(30.0, 185.0));
    assert_eq!(placed, PagePoint::new(0.0, 180.0));
    assert_eq!(session.position().dir_y, 1);

    session.move_to(list.clone(), 4);
    assert_eq!(session.drag_item().index(), 3);
    assert!(session.is_pending_move());

    let ev = session.finish().unwrap().unwrap();
    assert_eq!(ev.source.index, 1);
    assert_eq!(ev.dest.index, 3);
    assert_eq!(list.to_vec(), vec![10, 30, 40, 20]);
}

#[test]
fn session_finish_is_a_no_op_when_dropped_in_place() {
    let helper = Helper::new(FixedScroll::default(), FixedScroll::default());
    let list = ListScope::new(vec![1, 2, 3]);
    let mut session = DragSession::start(
        &helper,
        &PagePoint::new(1.0, 1.0),
        &row(0),
        &row(0),
        list.item(0).unwrap(),
    )
    .unwrap();

    // Slot 1 is directly after the source, which is the same place.
    session.move_to(list.clone(), 1);
    assert!(!session.is_pending_move());
    assert!(session.finish().unwrap().is_none());
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

#[test]
fn session_moves_to_another_list_at_same_index() {
    let helper = Helper::new(FixedScroll::default(), FixedScroll::default());
    let left = ListScope::new(vec!['a', 'b']);
    let right = ListScope::new(vec!['x', 'y']);
    let mut session = DragSession::start(
        &helper,
        &PagePoint::new(1.0, 1.0),
        &row(1),
        &row(1),
        left.item(1).unwrap(),
    )
    .unwrap();

    session.move_to(right.clone(), 1);
    assert!(!session.drag_item().is_order_changed());
    assert!(session.is_pending_move());
    session.finish().unwrap();
    assert_eq!(left.to_vec(), vec!['a']);
    assert_eq!(right.to_vec(), vec!['x', 'b', 'y']);
}

#[test]
fn session_cancel_leaves_containers_untouched() {
    let helper = Helper::new(FixedScroll::default(), FixedScroll::default());
    let left = ListScope::new(vec![1, 2]);
    let right = ListScope::new(vec![3]);
    let mut session = DragSession::start(
        &helper,
        &PagePoint::new(1.0, 1.0),
        &row(0),
        &row(0),
        left.item(0).unwrap(),
    )
    .unwrap();
    session.move_to(right.clone(), 0);

    let ev = session.cancel();
    assert_eq!(ev.dest.sortable_scope.id(), right.id());
    assert_eq!(left.to_vec(), vec![1, 2]);
    assert_eq!(right.to_vec(), vec![3]);
}

#[test]
fn session_debug_shows_position_and_drag() {
    let helper = Helper::new(FixedScroll::default(), FixedScroll::default());
    let list = ListScope::new(vec![7, 8]);
    let session = DragSession::start(
        &helper,
        &PagePoint::new(3.0, 4.0),
        &row(0),
        &row(0),
        list.item(1).unwrap(),
    )
    .unwrap();

    let out = alloc::format!("{session:?}");
    assert!(out.starts_with("DragSession"));
    assert!(out.contains("position: Position"));
    assert!(out.contains("drag: DragItem"));
    assert!(out.contains("value: 8"));
}
