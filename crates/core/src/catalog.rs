//! Level catalog - static per-level configuration
//!
//! Pure data; no logic beyond table lookup. Levels 1-3 introduce move/time
//! limits, 4-6 each activate one special constraint, 7 is a plain endurance
//! level, and everything above 7 uses mixed shelf capacities.

use goods_sort_types::{ShelfSize, LEVEL_COUNT};

/// Immutable per-level parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelConfig {
    pub id: u32,
    pub shelves: usize,
    pub shelf_size: ShelfSize,
    pub move_limit: Option<u32>,
    /// Seconds
    pub time_limit: Option<u32>,
    pub bombs: u32,
    /// Seconds until the bombs go off
    pub bomb_fuse: Option<u32>,
    pub ice_creams: u32,
    pub ice_cream_constraint: bool,
    pub fragile_shelf: Option<usize>,
    /// Dormant: no shipped level activates the lock, but the state machine
    /// still branches on it
    pub key_constraint: bool,
    pub locked_shelf: Option<usize>,
}

/// Look up the configuration for a level id (1..=LEVEL_COUNT)
pub fn level(id: u32) -> Option<LevelConfig> {
    if id < 1 || id > LEVEL_COUNT {
        return None;
    }

    let mut config = LevelConfig {
        id,
        shelves: 12,
        shelf_size: ShelfSize::Fixed(3),
        move_limit: Some(20 + id * 2),
        time_limit: None,
        bombs: 0,
        bomb_fuse: None,
        ice_creams: 0,
        ice_cream_constraint: false,
        fragile_shelf: None,
        key_constraint: false,
        locked_shelf: None,
    };

    match id {
        1 => {
            config.move_limit = Some(25);
            config.time_limit = Some(120);
        }
        2 => {
            config.move_limit = None;
            config.time_limit = Some(90);
        }
        3 => {
            config.move_limit = Some(35);
            config.time_limit = Some(120);
            config.shelves = 10;
        }
        // Bomb constraint
        4 => {
            config.move_limit = Some(30);
            config.time_limit = Some(100);
            config.bombs = 3;
            config.bomb_fuse = Some(15);
        }
        // Ice cream constraint
        5 => {
            config.move_limit = Some(40);
            config.time_limit = Some(120);
            config.ice_creams = 6;
            config.ice_cream_constraint = true;
        }
        // Fragile shelf constraint
        6 => {
            config.move_limit = Some(35);
            config.time_limit = Some(120);
            config.fragile_shelf = Some(0);
        }
        // Endurance level; the lock/key constraint it once carried is retired
        7 => {
            config.move_limit = Some(45);
            config.time_limit = Some(180);
        }
        _ => {
            config.shelf_size = ShelfSize::Mixed;
            config.move_limit = Some(40 + id);
            config.time_limit = Some(120);
        }
    }

    Some(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_bounds() {
        assert!(level(0).is_none());
        assert!(level(1).is_some());
        assert!(level(LEVEL_COUNT).is_some());
        assert!(level(LEVEL_COUNT + 1).is_none());
    }

    #[test]
    fn test_base_progression() {
        let config = level(10).unwrap();
        assert_eq!(config.shelves, 12);
        assert_eq!(config.shelf_size, ShelfSize::Mixed);
        assert_eq!(config.move_limit, Some(50));
        assert_eq!(config.time_limit, Some(120));
    }

    #[test]
    fn test_level_2_is_time_only() {
        let config = level(2).unwrap();
        assert_eq!(config.move_limit, None);
        assert_eq!(config.time_limit, Some(90));
    }

    #[test]
    fn test_constraint_levels() {
        let bombs = level(4).unwrap();
        assert_eq!(bombs.bombs, 3);
        assert_eq!(bombs.bomb_fuse, Some(15));

        let ice = level(5).unwrap();
        assert_eq!(ice.ice_creams, 6);
        assert!(ice.ice_cream_constraint);

        let fragile = level(6).unwrap();
        assert_eq!(fragile.fragile_shelf, Some(0));
    }

    #[test]
    fn test_lock_constraint_never_ships() {
        for id in 1..=LEVEL_COUNT {
            let config = level(id).unwrap();
            assert!(!config.key_constraint);
            assert!(config.locked_shelf.is_none());
        }
    }

    #[test]
    fn test_fixed_levels_use_capacity_three() {
        for id in 1..=7 {
            let config = level(id).unwrap();
            assert_eq!(config.shelf_size, ShelfSize::Fixed(3));
        }
    }
}
