use super::geom::{Pos, Rect};
use super::style::Style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderKind {
    Plain,
    Rounded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    FillRect { rect: Rect, style: Style },
    /// Restyle cells without touching their symbols.
    StyleRect { rect: Rect, style: Style },
    Text {
        pos: Pos,
        text: String,
        style: Style,
        clip: Option<Rect>,
    },
    Border {
        rect: Rect,
        style: Style,
        kind: BorderKind,
    },
}

/// Records paint commands for a backend to replay.
#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        self.cmds.push(PaintCmd::FillRect { rect, style });
    }

    pub fn style_rect(&mut self, rect: Rect, style: Style) {
        self.cmds.push(PaintCmd::StyleRect { rect, style });
    }

    pub fn text(&mut self, pos: Pos, text: impl Into<String>, style: Style) {
        self.push_text(pos, text.into(), style, None);
    }

    pub fn text_clipped(&mut self, pos: Pos, text: impl Into<String>, style: Style, clip: Rect) {
        self.push_text(pos, text.into(), style, Some(clip));
    }

    pub fn border(&mut self, rect: Rect, style: Style, kind: BorderKind) {
        self.cmds.push(PaintCmd::Border { rect, style, kind });
    }

    fn push_text(&mut self, pos: Pos, text: String, style: Style, clip: Option<Rect>) {
        if text.is_empty() {
            return;
        }
        self.cmds.push(PaintCmd::Text {
            pos,
            text,
            style,
            clip,
        });
    }
}

impl BorderKind {
    /// `(top-left, top-right, bottom-left, bottom-right, horizontal, vertical)`.
    pub fn glyphs(self) -> (char, char, char, char, char, char) {
        match self {
            BorderKind::Plain => ('┌', '┐', '└', '┘', '─', '│'),
            BorderKind::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
