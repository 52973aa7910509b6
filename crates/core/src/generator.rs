//! Board generator
//!
//! Builds a random initial layout for a level and retries until the
//! solvability predicate accepts it. Generation is fully driven by an
//! injected [`SimpleRng`], so a seed reproduces the exact board.
//!
//! The solvability predicate is deliberately the count-divisible-by-3 check
//! the level design relies on. It is necessary rather than sufficient (a
//! capacity-2 shelf can never hold a 3-match directly), and strengthening it
//! would change generated-level difficulty.

use std::error::Error;
use std::fmt;

use goods_sort_types::{
    ItemKind, ShelfSize, FRAGILE_EMPTY_DIVISOR, GENERATION_ATTEMPTS, MATCH_GROUP,
    MAX_SHELF_CAPACITY, MIN_EMPTY_SLOTS, MIN_SHELF_CAPACITY, STANDARD_KINDS,
};

use crate::catalog::LevelConfig;
use crate::rng::SimpleRng;
use crate::session::GameSession;
use crate::shelf::{Board, Item, Shelf};

/// Why session start failed. Setup errors are configuration bugs; the other
/// two come out of the placement stage. All of them oblige the caller to
/// refund any consumed entry cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The bounded retry loop never produced a solvable layout
    Unsolvable { attempts: u32 },
    /// The item pool is larger than the empty slots available for placement
    PoolOverflow { items: usize, slots: usize },
    /// A configured shelf id does not exist on the board
    BadShelfRef {
        field: &'static str,
        id: usize,
        shelves: usize,
    },
    /// A fixed shelf capacity outside 2..=3
    BadCapacity { capacity: usize },
    /// Key constraint without a designated locked shelf
    MissingLockedShelf,
    /// No standard kinds left to seed the locked shelf with
    NoStandardKinds,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Unsolvable { attempts } => {
                write!(f, "no solvable layout found after {attempts} attempts")
            }
            GenerateError::PoolOverflow { items, slots } => {
                write!(f, "item pool of {items} exceeds {slots} available slots")
            }
            GenerateError::BadShelfRef { field, id, shelves } => {
                write!(f, "{field} {id} is out of range for {shelves} shelves")
            }
            GenerateError::BadCapacity { capacity } => {
                write!(f, "fixed shelf capacity {capacity} is not 2 or 3")
            }
            GenerateError::MissingLockedShelf => {
                write!(f, "key constraint is active but no locked shelf is set")
            }
            GenerateError::NoStandardKinds => {
                write!(f, "no standard kinds available to seed the locked shelf")
            }
        }
    }
}

impl Error for GenerateError {}

/// Build a fresh, solvable session for `config`, or report why it cannot
/// be built. On success the session is in the playing state; its status is
/// not evaluated until the first move or tick.
pub fn generate(config: &LevelConfig, rng: &mut SimpleRng) -> Result<GameSession, GenerateError> {
    validate(config)?;

    // Shelf shaping. Mixed levels randomize each capacity independently;
    // a locked shelf is always capacity 3 so its pre-fill forms a full group.
    let mut shelves = Vec::with_capacity(config.shelves);
    for id in 0..config.shelves {
        let mut capacity = match config.shelf_size {
            ShelfSize::Fixed(n) => n,
            ShelfSize::Mixed => {
                if rng.next_bool() {
                    MAX_SHELF_CAPACITY
                } else {
                    MIN_SHELF_CAPACITY
                }
            }
        };
        if config.locked_shelf == Some(id) {
            capacity = MAX_SHELF_CAPACITY;
        }
        shelves.push(Shelf::new(id, capacity));
    }

    let mut next_id: u32 = 0;
    let mut fresh = |kind: ItemKind| {
        next_id += 1;
        Item::new(next_id, kind)
    };

    let mut pool: Vec<Item> = Vec::new();
    let mut pre_filled = 0usize;

    // Dormant lock/key path: keys go into the pool, the locked shelf is
    // pre-filled with standard goods (never soda or milk).
    if config.key_constraint {
        for _ in 0..MATCH_GROUP {
            pool.push(fresh(ItemKind::Key));
        }

        let filler: Vec<ItemKind> = STANDARD_KINDS
            .iter()
            .copied()
            .filter(|k| !matches!(k, ItemKind::Soda | ItemKind::Milk))
            .collect();
        if filler.is_empty() {
            return Err(GenerateError::NoStandardKinds);
        }

        let locked = config.locked_shelf.ok_or(GenerateError::MissingLockedShelf)?;
        for index in 0..MATCH_GROUP {
            let item = fresh(filler[index % filler.len()]);
            shelves[locked].put(index, item);
        }
        pre_filled = MATCH_GROUP;
    }

    for _ in 0..config.bombs {
        pool.push(fresh(ItemKind::Bomb));
    }
    for _ in 0..config.ice_creams {
        pool.push(fresh(ItemKind::IceCream));
    }
    let special_count = pool.len();

    // Standard quota: whatever the reserved empty margin leaves, rounded
    // down to a whole number of 3-groups. That rounding is the solvability
    // guarantee for everything the round-robin fill adds.
    let total_slots: usize = shelves.iter().map(|s| s.capacity()).sum();
    let reserved_empty = if config.fragile_shelf.is_some() {
        total_slots / FRAGILE_EMPTY_DIVISOR
    } else {
        MIN_EMPTY_SLOTS
    };
    let to_place = (total_slots - pre_filled).saturating_sub(reserved_empty);
    let mut standard_count = to_place.saturating_sub(special_count);
    standard_count -= standard_count % MATCH_GROUP;

    let mut kind_index = 0;
    while pool.len() < special_count + standard_count {
        let kind = STANDARD_KINDS[kind_index % STANDARD_KINDS.len()];
        for _ in 0..MATCH_GROUP {
            if pool.len() >= special_count + standard_count {
                break;
            }
            pool.push(fresh(kind));
        }
        kind_index += 1;
    }

    let open_slots = total_slots - pre_filled;
    if pool.len() > open_slots {
        return Err(GenerateError::PoolOverflow {
            items: pool.len(),
            slots: open_slots,
        });
    }

    // Randomized placement with bounded solvability retry
    for _ in 0..GENERATION_ATTEMPTS {
        let mut candidate = shelves.clone();

        let mut items = pool.clone();
        rng.shuffle(&mut items);

        let mut positions: Vec<(usize, usize)> = Vec::with_capacity(open_slots);
        for shelf in &candidate {
            for (index, slot) in shelf.slots().iter().enumerate() {
                if slot.is_none() {
                    positions.push((shelf.id(), index));
                }
            }
        }
        rng.shuffle(&mut positions);

        for (item, &(shelf_id, slot_index)) in items.into_iter().zip(positions.iter()) {
            candidate[shelf_id].put(slot_index, item);
        }

        let board = Board::new(candidate);
        if is_solvable(&board, config.locked_shelf) {
            return Ok(GameSession::new(board, config.clone()));
        }
    }

    Err(GenerateError::Unsolvable {
        attempts: GENERATION_ATTEMPTS,
    })
}

/// Solvability predicate: every standard kind present on the board (outside
/// the pre-locked shelf) occurs a multiple-of-3 number of times.
pub fn is_solvable(board: &Board, locked_shelf: Option<usize>) -> bool {
    board
        .standard_counts(locked_shelf)
        .iter()
        .all(|&count| count % MATCH_GROUP == 0)
}

fn validate(config: &LevelConfig) -> Result<(), GenerateError> {
    if let ShelfSize::Fixed(capacity) = config.shelf_size {
        if !(MIN_SHELF_CAPACITY..=MAX_SHELF_CAPACITY).contains(&capacity) {
            return Err(GenerateError::BadCapacity { capacity });
        }
    }
    for (field, id) in [
        ("fragile shelf", config.fragile_shelf),
        ("locked shelf", config.locked_shelf),
    ] {
        if let Some(id) = id {
            if id >= config.shelves {
                return Err(GenerateError::BadShelfRef {
                    field,
                    id,
                    shelves: config.shelves,
                });
            }
        }
    }
    if config.key_constraint && config.locked_shelf.is_none() {
        return Err(GenerateError::MissingLockedShelf);
    }
    Ok(())
}
