//! UI layer: backend-independent widgets drawn through paint commands.
//!
//! Widgets register hit-test nodes while painting; hosts route clicks back by
//! querying the [`core::tree::UiTree`] from the last frame.

pub mod backend;
pub mod core;
pub mod widgets;
