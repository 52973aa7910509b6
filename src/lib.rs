//! Goods-sort (workspace facade crate).
//!
//! This package keeps a single `goods_sort::{core,input,profile,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use goods_sort_core as core;
pub use goods_sort_input as input;
pub use goods_sort_profile as profile;
pub use goods_sort_term as term;
pub use goods_sort_types as types;
