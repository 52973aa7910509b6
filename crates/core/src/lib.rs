//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the level catalog, board generation and the move/tick
//! state machine. It has zero dependencies on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: the same seed reproduces the exact board layout
//! - **Testable**: every rule is exercised without a terminal attached
//! - **Portable**: runs headless for tests and benchmarks
//!
//! # Module Structure
//!
//! - [`catalog`]: static per-level configuration (pure data)
//! - [`shelf`]: items, fixed-capacity shelves and the board collection
//! - [`generator`]: randomized placement with the solvability retry loop
//! - [`session`]: the constraint state machine (moves, ticks, win/loss)
//! - [`snapshot`]: read-only render-facing view of a session
//! - [`rng`]: seedable LCG driving every random decision
//! - [`ticker`]: second-granularity accumulator for the timer driver
//!
//! # Example
//!
//! ```
//! use goods_sort_core::{catalog, generate, SimpleRng};
//!
//! let config = catalog::level(1).unwrap();
//! let mut rng = SimpleRng::new(12345);
//! let mut session = generate(&config, &mut rng).unwrap();
//!
//! // Feed it move and tick events; read status back
//! session.tick();
//! assert!(session.status().is_playing());
//! ```

pub mod catalog;
pub mod generator;
pub mod rng;
pub mod session;
pub mod shelf;
pub mod snapshot;
pub mod ticker;

pub use catalog::{level, LevelConfig};
pub use generator::{generate, is_solvable, GenerateError};
pub use rng::SimpleRng;
pub use session::{ClearNotice, GameSession};
pub use shelf::{Board, Item, Shelf, Slot};
pub use snapshot::{ItemSnapshot, SessionSnapshot, ShelfSnapshot};
pub use ticker::SecondTicker;
