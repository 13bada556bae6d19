use super::*;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Color;

fn render(w: u16, h: u16, paint: impl FnOnce(&mut Painter)) -> TestBackend {
    let mut painter = Painter::new();
    paint(&mut painter);
    let mut backend = TestBackend::new(w, h);
    backend.draw(Rect::new(0, 0, w, h), painter.cmds());
    backend
}

#[test]
fn wide_glyph_that_does_not_fit_is_dropped() {
    let backend = render(1, 1, |p| p.text(Pos::new(0, 0), "四", Style::default()));
    assert_eq!(backend.buffer().cell(0, 0).unwrap().symbol, " ");
}

#[test]
fn wide_glyph_occupies_two_cells() {
    let backend = render(2, 1, |p| p.text(Pos::new(0, 0), "四", Style::default()));
    assert_eq!(backend.buffer().cell(0, 0).unwrap().symbol, "四");
    assert_eq!(backend.buffer().cell(1, 0).unwrap().symbol, " ");
}

#[test]
fn fill_rect_clips_to_buffer() {
    let style = Style::default().bg(Color::Indexed(4));
    let backend = render(2, 2, |p| p.fill_rect(Rect::new(0, 0, 10, 10), style));
    assert_eq!(backend.buffer().cell(1, 1).unwrap().style, style);
}

#[test]
fn style_rect_keeps_symbols() {
    let style = Style::default().fg(Color::Indexed(2));
    let backend = render(3, 1, |p| {
        p.text(Pos::new(0, 0), "abc", Style::default());
        p.style_rect(Rect::new(1, 0, 1, 1), style);
    });
    let cell = backend.buffer().cell(1, 0).unwrap();
    assert_eq!(cell.symbol, "b");
    assert_eq!(cell.style, style);
}

#[test]
fn text_respects_clip_rect() {
    let backend = render(6, 1, |p| {
        p.text_clipped(Pos::new(0, 0), "123456", Style::default(), Rect::new(0, 0, 3, 1))
    });
    assert_eq!(backend.buffer().row_text(0), "123   ");
}

#[test]
fn border_draws_corners() {
    let backend = render(3, 3, |p| {
        p.border(Rect::new(0, 0, 3, 3), Style::default(), BorderKind::Plain)
    });
    assert_eq!(backend.buffer().row_text(0), "┌─┐");
    assert_eq!(backend.buffer().row_text(1), "│ │");
    assert_eq!(backend.buffer().row_text(2), "└─┘");
}

#[test]
fn cursor_is_recorded() {
    let mut backend = TestBackend::new(1, 1);
    backend.set_cursor(Some(Pos::new(0, 0)));
    assert_eq!(backend.cursor(), Some(Pos::new(0, 0)));
}
