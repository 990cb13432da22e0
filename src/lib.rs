//! Tile merge (workspace facade crate).
//!
//! This package keeps a single `tile_merge::{core,engine,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tile_merge_core as core;
pub use tile_merge_engine as engine;
pub use tile_merge_types as types;
