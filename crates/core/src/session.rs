//! Game session - the constraint state machine
//!
//! Owns the mutable per-play state and processes exactly two event types:
//! player moves and one-second timer ticks. Rejected moves are free (no
//! state change, no move consumed). Terminal status is sticky; only a new
//! session changes it.

use goods_sort_types::{ItemKind, LossReason, Status, FRAGILE_START_MOVES};

use crate::catalog::LevelConfig;
use crate::shelf::Board;

/// Transient shelf-clear event, consumed once by the presentation layer.
/// Carries no gameplay effect; display expiry is the consumer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearNotice {
    pub shelf_id: usize,
    pub kind: ItemKind,
}

/// Live state for one play of a level
#[derive(Debug, Clone)]
pub struct GameSession {
    config: LevelConfig,
    board: Board,
    moves_left: Option<u32>,
    time_left: Option<u32>,
    bombs_left: u32,
    bomb_fuse: Option<u32>,
    frozen: Vec<usize>,
    locked: bool,
    status: Status,
    last_clear: Option<ClearNotice>,
}

impl GameSession {
    /// Assemble a session around an already-built board.
    /// The generator is the normal entry point; tests use this to set up
    /// exact layouts. Status starts at playing and is not evaluated here:
    /// even a zero move limit only becomes a loss on the first move or tick.
    pub fn new(board: Board, config: LevelConfig) -> Self {
        let locked = config.key_constraint;
        Self {
            moves_left: config.move_limit,
            time_left: config.time_limit,
            bombs_left: config.bombs,
            bomb_fuse: config.bomb_fuse,
            frozen: Vec::new(),
            locked,
            status: Status::Playing,
            last_clear: None,
            board,
            config,
        }
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn moves_left(&self) -> Option<u32> {
        self.moves_left
    }

    pub fn time_left(&self) -> Option<u32> {
        self.time_left
    }

    pub fn bombs_left(&self) -> u32 {
        self.bombs_left
    }

    pub fn bomb_fuse(&self) -> Option<u32> {
        self.bomb_fuse
    }

    pub fn frozen_shelves(&self) -> &[usize] {
        &self.frozen
    }

    pub fn is_frozen(&self, shelf_id: usize) -> bool {
        self.frozen.contains(&shelf_id)
    }

    /// Whether the lock is still closed (always false without the constraint)
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether this shelf is the designated locked shelf while the lock holds
    pub fn is_locked_shelf(&self, shelf_id: usize) -> bool {
        self.locked && self.config.locked_shelf == Some(shelf_id)
    }

    pub fn fragile_shelf(&self) -> Option<usize> {
        self.config.fragile_shelf
    }

    /// Take and clear the last shelf-clear event
    pub fn take_last_clear(&mut self) -> Option<ClearNotice> {
        self.last_clear.take()
    }

    /// Attempt to move the item at `(from_shelf, from_slot)` onto
    /// `to_shelf`. Returns false when the move is rejected; a rejected move
    /// leaves the session untouched and consumes nothing. Malformed ids are
    /// rejections, not errors.
    pub fn apply_move(&mut self, from_shelf: usize, from_slot: usize, to_shelf: usize) -> bool {
        if !self.status.is_playing() {
            return false;
        }
        if from_shelf == to_shelf {
            return false;
        }
        if self.is_frozen(from_shelf) || self.is_frozen(to_shelf) {
            return false;
        }
        if self.is_locked_shelf(from_shelf) || self.is_locked_shelf(to_shelf) {
            return false;
        }

        let Some(source) = self.board.shelf(from_shelf) else {
            return false;
        };
        if source.get(from_slot).flatten().is_none() {
            return false;
        }
        let Some(target) = self.board.shelf(to_shelf) else {
            return false;
        };
        let Some(dest_slot) = target.first_empty() else {
            return false;
        };

        // The move is accepted from here on.
        let Some(mut item) = self
            .board
            .shelf_mut(from_shelf)
            .and_then(|shelf| shelf.take(from_slot))
        else {
            return false;
        };

        // Fragility: an already-fragile item decays on every move; a fresh
        // item becomes fragile when either endpoint is the fragile shelf.
        // A counter hitting 0 loses the session, but the item still lands.
        if let Some(fragile_id) = self.config.fragile_shelf {
            match item.fragile_moves {
                Some(moves) => item.fragile_moves = Some(moves.saturating_sub(1)),
                None if fragile_id == from_shelf || fragile_id == to_shelf => {
                    item.fragile_moves = Some(FRAGILE_START_MOVES)
                }
                None => {}
            }
            if item.fragile_moves == Some(0) {
                self.status = Status::Lost(LossReason::FragileBroke);
            }
        }

        if let Some(target) = self.board.shelf_mut(to_shelf) {
            target.put(dest_slot, item);

            // Auto-clear: full shelf of one kind resets to empty
            if let Some(kind) = target.uniform_kind() {
                let capacity = target.capacity();
                target.clear_slots();

                match kind {
                    ItemKind::IceCream if self.config.ice_cream_constraint => {
                        // Frozen for the rest of the session
                        self.frozen.push(to_shelf);
                    }
                    ItemKind::Bomb => {
                        self.bombs_left = self.bombs_left.saturating_sub(capacity as u32);
                    }
                    ItemKind::Key if self.config.key_constraint => {
                        self.locked = false;
                    }
                    _ => {}
                }

                self.last_clear = Some(ClearNotice {
                    shelf_id: to_shelf,
                    kind,
                });
            }
        }

        // Move budget is only spent while still playing (a breaking fragile
        // item ends the session before its move is billed)
        if self.status.is_playing() {
            if let Some(moves) = self.moves_left {
                self.moves_left = Some(moves.saturating_sub(1));
            }
        }

        self.recheck_status();
        true
    }

    /// One-second timer tick. A no-op outside the playing state.
    pub fn tick(&mut self) {
        if !self.status.is_playing() {
            return;
        }

        if let Some(time) = self.time_left {
            let time = time.saturating_sub(1);
            self.time_left = Some(time);
            if time == 0 {
                // Time loss preempts the remaining timer effects this tick
                self.status = Status::Lost(LossReason::TimeUp);
                return;
            }
        }

        if self.config.bombs > 0 && self.bombs_left > 0 {
            if let Some(fuse) = self.bomb_fuse {
                let fuse = fuse.saturating_sub(1);
                self.bomb_fuse = Some(fuse);
                if fuse == 0 {
                    self.status = Status::Lost(LossReason::BombFuse);
                    return;
                }
            }
        }

        // All bombs cleared: pin the fuse display at 0 without a loss
        if self.bombs_left == 0 {
            if let Some(fuse) = self.bomb_fuse {
                if fuse != 0 {
                    self.bomb_fuse = Some(0);
                }
            }
        }

        self.recheck_status();
    }

    /// Re-evaluate win/loss from the current shelves and limits.
    /// The designated locked shelf is exempt from the emptiness check but
    /// the lock itself must be open for a win.
    fn recheck_status(&mut self) {
        if !self.status.is_playing() {
            return;
        }

        if self.board.all_empty(self.config.locked_shelf) && !self.locked {
            self.status = Status::Won;
            return;
        }

        if let Some(moves) = self.moves_left {
            if moves == 0 {
                self.status = Status::Lost(LossReason::OutOfMoves);
                return;
            }
        }
        if let Some(time) = self.time_left {
            if time == 0 {
                self.status = Status::Lost(LossReason::TimeUp);
            }
        }
    }
}
