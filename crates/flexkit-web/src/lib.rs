// crates/flexkit-web/src/lib.rs
//
// Web entry: flex components producing CSS declaration bags for a generic
// DOM container. Re-exports the shared core type names so hosts depend on
// this crate alone.

pub mod components;
pub mod style;

pub use components::*;
pub use style::*;

pub use flexkit_core::{
    style_key, ElementId, FlexAlign, FlexDirection, FlexError, FlexJustify, NodeRef, StyleCache,
    DEFAULT_CACHE_CAPACITY,
};
