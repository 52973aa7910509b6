//! SessionView: maps a session snapshot into terminal text rows.
//!
//! This module is pure (no I/O). It can be unit-tested.

use goods_sort_core::snapshot::{SessionSnapshot, ShelfSnapshot};
use goods_sort_core::ClearNotice;
use goods_sort_types::{Status, WIN_COINS};

/// In-progress move entry: source shelf, then slot, then target shelf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Idle,
    Source { shelf: usize },
    SourceSlot { shelf: usize, slot: usize },
}

impl Selection {
    fn source_shelf(&self) -> Option<usize> {
        match *self {
            Selection::Idle => None,
            Selection::Source { shelf } | Selection::SourceSlot { shelf, .. } => Some(shelf),
        }
    }
}

/// Renders one frame of gameplay as plain text rows
#[derive(Debug, Default)]
pub struct SessionView;

impl SessionView {
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        selection: Selection,
        flash: Option<&ClearNotice>,
    ) -> Vec<String> {
        let mut rows = Vec::with_capacity(snap.shelves.len() + 6);

        rows.push(self.header(snap));
        rows.push(String::new());

        for shelf in &snap.shelves {
            rows.push(self.shelf_row(shelf, selection));
        }

        rows.push(String::new());
        rows.push(self.prompt(snap, selection, flash));
        rows.push("q quit   r restart   esc cancel".to_string());

        rows
    }

    fn header(&self, snap: &SessionSnapshot) -> String {
        let mut parts = vec![format!("GOODS SORT  level {}", snap.level_id)];

        if let Some(moves) = snap.moves_left {
            parts.push(format!("moves {moves}"));
        }
        if let Some(time) = snap.time_left {
            parts.push(format!("time {time}s"));
        }
        if let Some(fuse) = snap.bomb_fuse {
            if snap.bombs_left > 0 {
                parts.push(format!("bomb {fuse}s"));
            } else {
                parts.push("bomb ok".to_string());
            }
        }
        if snap.ice_cream_constraint {
            parts.push(format!("frozen {}", snap.frozen_count));
        }
        if snap.key_constraint {
            parts.push(if snap.locked { "LOCKED" } else { "OPEN" }.to_string());
        }

        parts.join("   ")
    }

    fn shelf_row(&self, shelf: &ShelfSnapshot, selection: Selection) -> String {
        let marker = if selection.source_shelf() == Some(shelf.id) {
            '>'
        } else {
            ' '
        };
        // Shelf ids are 0-based internally; keys and labels are 1-based
        let mut row = format!("{marker}{:>2}) ", shelf.id + 1);

        for slot in &shelf.slots {
            match slot {
                Some(item) => match item.fragile_moves {
                    Some(moves) => row.push_str(&format!("[{}:{moves}]", item.kind.code())),
                    None => row.push_str(&format!("[{}  ]", item.kind.code())),
                },
                None => row.push_str("[     ]"),
            }
        }
        for _ in shelf.capacity..3 {
            row.push_str("       ");
        }

        if shelf.frozen {
            row.push_str("  FROZEN");
        }
        if shelf.locked {
            row.push_str("  LOCKED");
        }
        if shelf.fragile {
            row.push_str("  FRAGILE");
        }

        row
    }

    fn prompt(
        &self,
        snap: &SessionSnapshot,
        selection: Selection,
        flash: Option<&ClearNotice>,
    ) -> String {
        match snap.status {
            Status::Won => format!("CLEARED!  +{WIN_COINS} coins  (r next attempt, q quit)"),
            Status::Lost(reason) => format!("FAILED  {}  (r retry, q quit)", reason.message()),
            Status::Playing => {
                let mut prompt = match selection {
                    Selection::Idle => "pick source shelf".to_string(),
                    Selection::Source { shelf } => {
                        format!("shelf {}: pick slot (1-3)", shelf + 1)
                    }
                    Selection::SourceSlot { shelf, slot } => {
                        format!("shelf {} slot {}: pick target shelf", shelf + 1, slot + 1)
                    }
                };
                if let Some(clear) = flash {
                    prompt.push_str(&format!(
                        "   {} cleared on shelf {}!",
                        clear.kind.code(),
                        clear.shelf_id + 1
                    ));
                }
                prompt
            }
        }
    }
}
