//! # flexkit
//!
//! Cross-platform flex layout components: `Row`, `Col`, and `Flex` map a
//! compact prop set (direction, reverse, alignment, justification, spacing,
//! full-size flags) onto platform-native style objects. No layout algorithm
//! lives here; the host platform's styling engine does the flex computation,
//! these components only produce the style descriptor.
//!
//! The two platform targets are selected by cargo feature:
//!
//! - `web` (default): [`web`] re-exports [`flexkit_web`], producing CSS
//!   declaration bags for a generic DOM container.
//! - `native`: [`native`] re-exports [`flexkit_native`], producing typed
//!   view styles for a mobile view container.
//!
//! Shared type names ([`FlexAlign`], [`FlexJustify`], [`FlexDirection`],
//! [`NodeRef`], [`StyleCache`]) come from the core crate and are identical
//! across targets.

pub use flexkit_core::{
    style_key, ElementId, FlexAlign, FlexDirection, FlexError, FlexJustify, NodeRef, Result,
    StyleCache, DEFAULT_CACHE_CAPACITY,
};

#[cfg(feature = "web")]
pub use flexkit_web as web;

#[cfg(feature = "native")]
pub use flexkit_native as native;
