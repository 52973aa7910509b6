//! Input mapping for terminal gameplay.

pub mod map;

pub use map::{map_key, should_quit};
