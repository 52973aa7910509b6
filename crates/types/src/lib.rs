//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Shelf capacity bounds (slots per shelf)
pub const MIN_SHELF_CAPACITY: usize = 2;
pub const MAX_SHELF_CAPACITY: usize = 3;

/// A shelf clears when a full same-kind group is assembled; the generator
/// sizes the standard item pool in multiples of this.
pub const MATCH_GROUP: usize = 3;

/// Empty slots reserved by the generator to keep a board playable
pub const MIN_EMPTY_SLOTS: usize = 6;
/// Under the fragile constraint, reserve total_slots / this instead (20%)
pub const FRAGILE_EMPTY_DIVISOR: usize = 5;

/// Moves an item survives once it has touched the fragile shelf
pub const FRAGILE_START_MOVES: u8 = 2;

/// Bound on randomized placement retries before generation fails
pub const GENERATION_ATTEMPTS: u32 = 100;

/// Number of levels in the catalog
pub const LEVEL_COUNT: u32 = 50;

/// Player profile constants
pub const MAX_LIVES: u32 = 10;
pub const STARTING_COINS: u32 = 1000;
pub const WIN_COINS: u32 = 100;
pub const LIFE_REGEN_SECS: u64 = 300;

/// Game timing (milliseconds)
pub const TICK_MS: u64 = 1000;
pub const CLEAR_FLASH_MS: u64 = 1000;

/// Item kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Soda,
    Milk,
    Chips,
    Jam,
    Juice,
    Water,
    Bomb,
    IceCream,
    Key,
}

/// Standard kinds in the fixed round-robin order the generator cycles through
pub const STANDARD_KINDS: [ItemKind; 6] = [
    ItemKind::Soda,
    ItemKind::Milk,
    ItemKind::Chips,
    ItemKind::Jam,
    ItemKind::Juice,
    ItemKind::Water,
];

impl ItemKind {
    /// Parse item kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "soda" => Some(ItemKind::Soda),
            "milk" => Some(ItemKind::Milk),
            "chips" => Some(ItemKind::Chips),
            "jam" => Some(ItemKind::Jam),
            "juice" => Some(ItemKind::Juice),
            "water" => Some(ItemKind::Water),
            "bomb" => Some(ItemKind::Bomb),
            "ice-cream" => Some(ItemKind::IceCream),
            "key" => Some(ItemKind::Key),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Soda => "soda",
            ItemKind::Milk => "milk",
            ItemKind::Chips => "chips",
            ItemKind::Jam => "jam",
            ItemKind::Juice => "juice",
            ItemKind::Water => "water",
            ItemKind::Bomb => "bomb",
            ItemKind::IceCream => "ice-cream",
            ItemKind::Key => "key",
        }
    }

    /// Three-letter display code for terminal rendering
    pub fn code(&self) -> &'static str {
        match self {
            ItemKind::Soda => "SOD",
            ItemKind::Milk => "MLK",
            ItemKind::Chips => "CHP",
            ItemKind::Jam => "JAM",
            ItemKind::Juice => "JUC",
            ItemKind::Water => "WTR",
            ItemKind::Bomb => "BMB",
            ItemKind::IceCream => "ICE",
            ItemKind::Key => "KEY",
        }
    }

    /// Bombs, ice-creams and keys are tied to level constraints; the rest are
    /// standard sortable goods.
    pub fn is_special(&self) -> bool {
        matches!(self, ItemKind::Bomb | ItemKind::IceCream | ItemKind::Key)
    }

    /// Index into [`STANDARD_KINDS`], None for special kinds
    pub fn standard_index(&self) -> Option<usize> {
        STANDARD_KINDS.iter().position(|k| k == self)
    }
}

/// Per-shelf capacity rule of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfSize {
    /// Every shelf gets this capacity
    Fixed(usize),
    /// Each shelf independently randomizes 2 or 3
    Mixed,
}

/// Why a session was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    OutOfMoves,
    TimeUp,
    BombFuse,
    FragileBroke,
}

impl LossReason {
    /// Human-readable failure message
    pub fn message(&self) -> &'static str {
        match self {
            LossReason::OutOfMoves => "Out of moves!",
            LossReason::TimeUp => "Time up!",
            LossReason::BombFuse => "Bomb timer ran out! BOOM!",
            LossReason::FragileBroke => "Fragile item broke!",
        }
    }
}

/// Session status; terminal states are sticky until a restart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost(LossReason),
}

impl Default for Status {
    fn default() -> Self {
        Status::Playing
    }
}

impl Status {
    pub fn is_playing(&self) -> bool {
        matches!(self, Status::Playing)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_playing()
    }
}

/// UI actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// A shelf or slot pick from the number row
    Pick(usize),
    /// Abandon the in-progress move selection
    Cancel,
    /// Restart the level with a fresh board
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_kind_str_roundtrip() {
        for kind in [
            ItemKind::Soda,
            ItemKind::Milk,
            ItemKind::Chips,
            ItemKind::Jam,
            ItemKind::Juice,
            ItemKind::Water,
            ItemKind::Bomb,
            ItemKind::IceCream,
            ItemKind::Key,
        ] {
            assert_eq!(ItemKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ItemKind::from_str("ICE-CREAM"), Some(ItemKind::IceCream));
        assert_eq!(ItemKind::from_str("cereal"), None);
    }

    #[test]
    fn test_special_kinds() {
        assert!(ItemKind::Bomb.is_special());
        assert!(ItemKind::IceCream.is_special());
        assert!(ItemKind::Key.is_special());
        for kind in STANDARD_KINDS {
            assert!(!kind.is_special());
        }
    }

    #[test]
    fn test_standard_index_matches_order() {
        for (i, kind) in STANDARD_KINDS.iter().enumerate() {
            assert_eq!(kind.standard_index(), Some(i));
        }
        assert_eq!(ItemKind::Bomb.standard_index(), None);
    }

    #[test]
    fn test_status_terminal() {
        assert!(Status::Playing.is_playing());
        assert!(Status::Won.is_terminal());
        assert!(Status::Lost(LossReason::TimeUp).is_terminal());
    }
}
