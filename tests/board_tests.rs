//! Shelf and board model tests against the public facade.

use goods_sort::core::{Board, Item, Shelf};
use goods_sort::types::ItemKind;

#[test]
fn test_new_shelf_has_fixed_capacity() {
    let shelf = Shelf::new(0, 2);
    assert_eq!(shelf.capacity(), 2);
    assert_eq!(shelf.slots().len(), 2);

    let shelf = Shelf::new(1, 3);
    assert_eq!(shelf.capacity(), 3);
}

#[test]
fn test_capacity_never_changes_across_operations() {
    let mut shelf = Shelf::new(0, 3);
    for i in 0..3 {
        assert!(shelf.put(i, Item::new(i as u32 + 1, ItemKind::Water)));
    }
    assert_eq!(shelf.capacity(), 3);

    shelf.take(1);
    assert_eq!(shelf.capacity(), 3);

    shelf.clear_slots();
    assert_eq!(shelf.capacity(), 3);
    assert_eq!(shelf.slots().len(), 3);
}

#[test]
fn test_first_empty_prefers_lowest_index() {
    let mut shelf = Shelf::new(0, 3);
    shelf.put(1, Item::new(1, ItemKind::Soda));
    assert_eq!(shelf.first_empty(), Some(0));

    shelf.put(0, Item::new(2, ItemKind::Soda));
    assert_eq!(shelf.first_empty(), Some(2));

    shelf.put(2, Item::new(3, ItemKind::Soda));
    assert_eq!(shelf.first_empty(), None);
}

#[test]
fn test_out_of_bounds_access_is_safe() {
    let mut shelf = Shelf::new(0, 2);
    assert_eq!(shelf.get(2), None);
    assert!(!shelf.put(2, Item::new(1, ItemKind::Jam)));
    assert_eq!(shelf.take(2), None);
}

#[test]
fn test_board_lookup_by_id() {
    let board = Board::new(vec![Shelf::new(0, 3), Shelf::new(1, 2)]);
    assert_eq!(board.shelf(0).map(|s| s.capacity()), Some(3));
    assert_eq!(board.shelf(1).map(|s| s.capacity()), Some(2));
    assert!(board.shelf(2).is_none());
}

#[test]
fn test_slot_conservation_under_mutation() {
    let mut shelves = vec![Shelf::new(0, 3), Shelf::new(1, 3)];
    shelves[0].put(0, Item::new(1, ItemKind::Milk));
    shelves[0].put(1, Item::new(2, ItemKind::Milk));
    let mut board = Board::new(shelves);

    let total = board.total_slots();
    assert_eq!(board.item_count() + board.empty_slot_count(), total);

    let item = board.shelf_mut(0).unwrap().take(0).unwrap();
    board.shelf_mut(1).unwrap().put(0, item);
    assert_eq!(board.item_count() + board.empty_slot_count(), total);
    assert_eq!(board.item_count(), 2);
}

#[test]
fn test_uniform_kind_is_the_clear_condition() {
    let mut shelf = Shelf::new(0, 2);
    shelf.put(0, Item::new(1, ItemKind::Chips));
    assert_eq!(shelf.uniform_kind(), None);

    shelf.put(1, Item::new(2, ItemKind::Chips));
    assert_eq!(shelf.uniform_kind(), Some(ItemKind::Chips));

    // A fragile counter does not affect matching
    let mut shelf = Shelf::new(1, 2);
    let mut fragile = Item::new(3, ItemKind::Chips);
    fragile.fragile_moves = Some(1);
    shelf.put(0, fragile);
    shelf.put(1, Item::new(4, ItemKind::Chips));
    assert_eq!(shelf.uniform_kind(), Some(ItemKind::Chips));
}
