//! stepper - a numeric stepper control for terminal UIs.
//!
//! Modules:
//! - models: `BoundedCounter`, the clamped value and its two notification channels
//! - format: value-to-text formatting (default locale-aware decimal)
//! - ui: paint-command widgets (`Stepper`, `Button`, `Label`) and backends
//! - settings: JSON configuration
//! - tui: crossterm/ratatui glue (feature `tui`)

pub mod format;
pub mod models;
pub mod settings;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;

pub use format::{DecimalFormatter, ValueFormatter, ValueText};
pub use models::{BoundedCounter, Commit, CounterState, ListenerId, Step};
pub use ui::widgets::{Stepper, StepperConfig};
