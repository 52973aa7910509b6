//! Shelf and board model
//!
//! A shelf is a fixed-capacity row of item slots; the board is the full shelf
//! collection for one session. Slots use `ArrayVec` so a shelf's capacity is
//! pinned at creation and never reallocates.
//!
//! Invariants:
//! - `slots.len()` equals the shelf capacity and never changes
//! - a slot holds at most one item; an item id appears in at most one slot
//!   across the whole board

use arrayvec::ArrayVec;

use goods_sort_types::{ItemKind, MAX_SHELF_CAPACITY, MIN_SHELF_CAPACITY, STANDARD_KINDS};

/// One item instance. Identity (`id`) persists for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: u32,
    pub kind: ItemKind,
    /// None until the item first touches the fragile shelf, then a countdown
    pub fragile_moves: Option<u8>,
}

impl Item {
    pub fn new(id: u32, kind: ItemKind) -> Self {
        Self {
            id,
            kind,
            fragile_moves: None,
        }
    }
}

/// A slot either holds one item or is empty
pub type Slot = Option<Item>;

/// Fixed-capacity shelf of item slots; the unit of matching and clearing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shelf {
    id: usize,
    slots: ArrayVec<Slot, MAX_SHELF_CAPACITY>,
}

impl Shelf {
    /// Create an empty shelf with the given capacity (2 or 3)
    pub fn new(id: usize, capacity: usize) -> Self {
        debug_assert!((MIN_SHELF_CAPACITY..=MAX_SHELF_CAPACITY).contains(&capacity));
        let mut slots = ArrayVec::new();
        for _ in 0..capacity {
            slots.push(None);
        }
        Self { id, slots }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slot contents at `index`, or None when out of bounds
    pub fn get(&self, index: usize) -> Option<Slot> {
        self.slots.get(index).copied()
    }

    /// Place an item into a slot; false when out of bounds or occupied
    pub fn put(&mut self, index: usize, item: Item) -> bool {
        match self.slots.get_mut(index) {
            Some(slot @ None) => {
                *slot = Some(item);
                true
            }
            _ => false,
        }
    }

    /// Remove and return the item at `index`
    pub fn take(&mut self, index: usize) -> Option<Item> {
        self.slots.get_mut(index).and_then(|slot| slot.take())
    }

    /// Lowest-index empty slot, the deterministic destination of a move
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.is_none())
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// The single kind filling this shelf, if it is full and uniform.
    /// This is exactly the auto-clear condition.
    pub fn uniform_kind(&self) -> Option<ItemKind> {
        let first = self.slots.first().copied().flatten()?;
        if self
            .slots
            .iter()
            .all(|slot| slot.map(|item| item.kind) == Some(first.kind))
        {
            Some(first.kind)
        } else {
            None
        }
    }

    /// Reset every slot to empty (shelf clear)
    pub fn clear_slots(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}

/// The full shelf collection for one session.
/// Shelf ids equal their index in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    shelves: Vec<Shelf>,
}

impl Board {
    pub fn new(shelves: Vec<Shelf>) -> Self {
        debug_assert!(shelves.iter().enumerate().all(|(i, s)| s.id() == i));
        Self { shelves }
    }

    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    pub fn shelf(&self, id: usize) -> Option<&Shelf> {
        self.shelves.get(id)
    }

    pub fn shelf_mut(&mut self, id: usize) -> Option<&mut Shelf> {
        self.shelves.get_mut(id)
    }

    pub fn shelf_count(&self) -> usize {
        self.shelves.len()
    }

    /// Sum of shelf capacities
    pub fn total_slots(&self) -> usize {
        self.shelves.iter().map(|s| s.capacity()).sum()
    }

    pub fn empty_slot_count(&self) -> usize {
        self.total_slots() - self.item_count()
    }

    pub fn item_count(&self) -> usize {
        self.shelves.iter().map(|s| s.occupied()).sum()
    }

    /// All currently empty `(shelf_id, slot_index)` positions
    pub fn empty_positions(&self) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        for shelf in &self.shelves {
            for (index, slot) in shelf.slots().iter().enumerate() {
                if slot.is_none() {
                    positions.push((shelf.id(), index));
                }
            }
        }
        positions
    }

    /// Count of each standard kind on the board, indexed per
    /// [`STANDARD_KINDS`]. Special kinds and the excluded shelf (the
    /// pre-locked shelf during generation) are skipped.
    pub fn standard_counts(&self, exclude_shelf: Option<usize>) -> [usize; STANDARD_KINDS.len()] {
        let mut counts = [0usize; STANDARD_KINDS.len()];
        for shelf in &self.shelves {
            if Some(shelf.id()) == exclude_shelf {
                continue;
            }
            for slot in shelf.slots() {
                if let Some(item) = slot {
                    if let Some(i) = item.kind.standard_index() {
                        counts[i] += 1;
                    }
                }
            }
        }
        counts
    }

    /// True when every shelf is empty, with one optional exempt shelf
    /// (the designated locked shelf is not required to be empty for a win)
    pub fn all_empty(&self, exempt_shelf: Option<usize>) -> bool {
        self.shelves
            .iter()
            .all(|shelf| Some(shelf.id()) == exempt_shelf || shelf.is_empty())
    }
}
