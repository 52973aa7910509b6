//! Read-only session snapshot for the presentation layer.
//!
//! `snapshot_into` reuses the caller's buffers so a per-frame refresh does
//! not reallocate.

use arrayvec::ArrayVec;

use goods_sort_types::{ItemKind, Status, MAX_SHELF_CAPACITY};

use crate::session::GameSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSnapshot {
    pub kind: ItemKind,
    pub fragile_moves: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfSnapshot {
    pub id: usize,
    pub capacity: usize,
    pub frozen: bool,
    pub fragile: bool,
    /// The designated locked shelf while the lock is still closed
    pub locked: bool,
    pub slots: ArrayVec<Option<ItemSnapshot>, MAX_SHELF_CAPACITY>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub level_id: u32,
    pub shelves: Vec<ShelfSnapshot>,
    pub moves_left: Option<u32>,
    pub time_left: Option<u32>,
    pub bombs_left: u32,
    pub bomb_fuse: Option<u32>,
    pub frozen_count: usize,
    pub locked: bool,
    pub key_constraint: bool,
    pub ice_cream_constraint: bool,
    pub status: Status,
}

impl SessionSnapshot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameSession {
    /// Fill `out` with the current render-facing state
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        let config = self.config();
        out.level_id = config.id;
        out.moves_left = self.moves_left();
        out.time_left = self.time_left();
        out.bombs_left = self.bombs_left();
        out.bomb_fuse = self.bomb_fuse();
        out.frozen_count = self.frozen_shelves().len();
        out.locked = self.is_locked();
        out.key_constraint = config.key_constraint;
        out.ice_cream_constraint = config.ice_cream_constraint;
        out.status = self.status();

        out.shelves.clear();
        for shelf in self.board().shelves() {
            let mut slots = ArrayVec::new();
            for slot in shelf.slots() {
                slots.push(slot.map(|item| ItemSnapshot {
                    kind: item.kind,
                    fragile_moves: item.fragile_moves,
                }));
            }
            out.shelves.push(ShelfSnapshot {
                id: shelf.id(),
                capacity: shelf.capacity(),
                frozen: self.is_frozen(shelf.id()),
                fragile: self.fragile_shelf() == Some(shelf.id()),
                locked: self.is_locked_shelf(shelf.id()),
                slots,
            });
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut out = SessionSnapshot::new();
        self.snapshot_into(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::level;
    use crate::generator::generate;
    use crate::rng::SimpleRng;

    #[test]
    fn test_snapshot_mirrors_session() {
        let config = level(4).unwrap();
        let session = generate(&config, &mut SimpleRng::new(17)).unwrap();
        let snap = session.snapshot();

        assert_eq!(snap.level_id, 4);
        assert_eq!(snap.shelves.len(), session.board().shelf_count());
        assert_eq!(snap.bombs_left, 3);
        assert_eq!(snap.bomb_fuse, Some(15));
        assert_eq!(snap.status, Status::Playing);

        let occupied: usize = snap
            .shelves
            .iter()
            .flat_map(|s| s.slots.iter())
            .filter(|slot| slot.is_some())
            .count();
        assert_eq!(occupied, session.board().item_count());
    }

    #[test]
    fn test_snapshot_into_reuses_buffers() {
        let config = level(1).unwrap();
        let session = generate(&config, &mut SimpleRng::new(2)).unwrap();

        let mut snap = SessionSnapshot::new();
        session.snapshot_into(&mut snap);
        let first = snap.clone();
        session.snapshot_into(&mut snap);
        assert_eq!(snap, first);
    }

    #[test]
    fn test_snapshot_flags_fragile_shelf() {
        let config = level(6).unwrap();
        let session = generate(&config, &mut SimpleRng::new(9)).unwrap();
        let snap = session.snapshot();
        assert!(snap.shelves[0].fragile);
        assert!(!snap.shelves[1].fragile);
    }
}
