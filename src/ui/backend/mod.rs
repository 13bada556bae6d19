//! Rendering backends.
//!
//! Widgets only produce [`PaintCmd`]s; a backend replays them. The terminal
//! backend lives behind the `tui` feature so the rest of the crate never names
//! `ratatui` types.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);

    fn set_cursor(&mut self, pos: Option<Pos>);
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
