//! Pressable button: a centred title on a filled background, optionally
//! bordered. Registers a click node only while enabled.

use crate::ui::core::geom::{Pos, Size};
use crate::ui::core::id::Id;
use crate::ui::core::layout::Insets;
use crate::ui::core::painter::BorderKind;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::tree::{Node, NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};
use unicode_width::UnicodeWidthStr;

const MIN_WIDTH: u16 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonConfig {
    pub style: Style,
    pub disabled_style: Style,
    pub padding_x: u16,
    pub border: Option<BorderKind>,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            style: Style::default().add_mod(Mod::BOLD | Mod::REVERSE),
            disabled_style: Style::default().add_mod(Mod::DIM),
            padding_x: 1,
            border: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Button {
    pub id: Id,
    pub title: String,
    pub enabled: bool,
    pub config: ButtonConfig,
    pub kind: NodeKind,
    pub layer: u8,
}

impl Button {
    pub fn new(id: Id, title: impl Into<String>, config: ButtonConfig, kind: NodeKind) -> Self {
        Self {
            id,
            title: title.into(),
            enabled: true,
            config,
            kind,
            layer: 0,
        }
    }

    pub fn preferred_size(&self) -> Size {
        let chrome = if self.config.border.is_some() { 2 } else { 0 };
        let title_w = cells(self.title.width());
        let w = title_w
            .saturating_add(self.config.padding_x.saturating_mul(2))
            .saturating_add(chrome)
            .max(MIN_WIDTH);
        Size::new(w, 1 + chrome)
    }

    pub fn current_style(&self) -> Style {
        if self.enabled {
            self.config.style
        } else {
            self.config.disabled_style
        }
    }
}

impl Widget for Button {
    fn ui(&mut self, ui: &mut Ui) {
        let rect = ui.rect;
        if rect.is_empty() {
            return;
        }

        let style = self.current_style();
        ui.painter.fill_rect(rect, style);

        let mut inner = rect;
        if let Some(kind) = self.config.border {
            ui.painter.border(rect, style, kind);
            inner = rect.inset(Insets::all(1));
        }

        if !inner.is_empty() {
            let title_w = cells(self.title.width()).min(inner.w);
            let slot = inner.centered(title_w, 1);
            ui.painter
                .text_clipped(Pos::new(slot.x, slot.y), self.title.as_str(), style, inner);
        }

        if self.enabled {
            ui.tree.push(Node {
                id: self.id,
                rect,
                layer: self.layer,
                z: 0,
                sense: Sense::HOVER | Sense::CLICK,
                kind: self.kind,
            });
        }
    }
}

pub(crate) fn cells(w: usize) -> u16 {
    w.min(u16::MAX as usize) as u16
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/button.rs"]
mod tests;
