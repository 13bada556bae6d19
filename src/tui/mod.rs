//! Terminal integration (crossterm + ratatui), behind the `tui` feature.

pub mod event;
pub mod terminal_guard;
