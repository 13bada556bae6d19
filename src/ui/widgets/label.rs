use super::button::cells;
use crate::format::ValueText;
use crate::ui::core::geom::Pos;
use crate::ui::core::style::Style;
use crate::ui::core::widget::{Ui, Widget};

/// Single-line text centred in its rect. `reserved_width` keeps the label from
/// shrinking below a fixed number of cells as the text changes.
#[derive(Clone, Debug, Default)]
pub struct Label {
    pub text: ValueText,
    pub style: Style,
    pub reserved_width: u16,
}

impl Label {
    pub fn preferred_width(&self) -> u16 {
        self.reserved_width.max(cells(self.text.width()))
    }
}

impl Widget for Label {
    fn ui(&mut self, ui: &mut Ui) {
        let rect = ui.rect;
        if rect.is_empty() {
            return;
        }
        if self.style != Style::default() {
            ui.painter.style_rect(rect, self.style);
        }

        let text_w = cells(self.text.width()).min(rect.w);
        let slot = rect.centered(text_w, 1);
        let mut x = slot.x;
        match &self.text {
            ValueText::Plain(s) => {
                ui.painter.text_clipped(Pos::new(x, slot.y), s.as_str(), self.style, rect);
            }
            ValueText::Styled(styled) => {
                for span in styled.spans() {
                    if x >= rect.right() {
                        break;
                    }
                    let style = self.style.patch(span.style);
                    ui.painter
                        .text_clipped(Pos::new(x, slot.y), span.text.as_str(), style, rect);
                    x = x.saturating_add(cells(span.width()));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/label.rs"]
mod tests;
