use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{BorderKind, PaintCmd};
use crate::ui::core::style::{Color, Mod, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use std::io;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub struct RatatuiBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
    cursor: Option<Pos>,
}

impl<'a, 'f> RatatuiBackend<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>) -> Self {
        Self {
            frame,
            cursor: None,
        }
    }
}

impl Drop for RatatuiBackend<'_, '_> {
    fn drop(&mut self) {
        // ratatui hides the cursor unless a position is set for the frame.
        if let Some(pos) = self.cursor {
            self.frame.set_cursor_position((pos.x, pos.y));
        }
    }
}

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect::new(r.x, r.y, r.w, r.h)
    }
}

impl Backend for RatatuiBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        self.frame.render_widget(PaintWidget { cmds }, area.into());
    }

    fn set_cursor(&mut self, pos: Option<Pos>) {
        self.cursor = pos;
    }
}

/// Owns the crossterm-backed terminal; callers only see [`Backend`].
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        self.terminal.draw(|frame| {
            let area: Rect = frame.area().into();
            let mut backend = RatatuiBackend::new(frame);
            f(&mut backend, area);
        })?;
        Ok(())
    }
}

struct PaintWidget<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for PaintWidget<'_> {
    fn render(self, area: RRect, buf: &mut Buffer) {
        let area: Rect = area.into();
        for cmd in self.cmds {
            match cmd {
                PaintCmd::FillRect { rect, style } => {
                    let style = to_ratatui_style(*style);
                    for_each_cell(buf, rect.intersect(area), |cell| {
                        cell.set_char(' ').set_style(style);
                    });
                }
                PaintCmd::StyleRect { rect, style } => {
                    let style = to_ratatui_style(*style);
                    for_each_cell(buf, rect.intersect(area), |cell| {
                        cell.set_style(style);
                    });
                }
                PaintCmd::Text {
                    pos,
                    text,
                    style,
                    clip,
                } => {
                    let clip = clip.map_or(area, |c| c.intersect(area));
                    draw_text(buf, *pos, text, *style, clip);
                }
                PaintCmd::Border { rect, style, kind } => {
                    draw_border(buf, rect.intersect(area), *style, *kind)
                }
            }
        }
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default().add_modifier(to_ratatui_mods(s.mods));
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    [
        (Mod::BOLD, RModifier::BOLD),
        (Mod::DIM, RModifier::DIM),
        (Mod::ITALIC, RModifier::ITALIC),
        (Mod::UNDERLINE, RModifier::UNDERLINED),
        (Mod::REVERSE, RModifier::REVERSED),
    ]
    .into_iter()
    .filter(|(ours, _)| m.contains(*ours))
    .fold(RModifier::empty(), |acc, (_, theirs)| acc | theirs)
}

fn for_each_cell(buf: &mut Buffer, rect: Rect, mut f: impl FnMut(&mut ratatui::buffer::Cell)) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                f(cell);
            }
        }
    }
}

fn draw_text(buf: &mut Buffer, pos: Pos, text: &str, style: Style, clip: Rect) {
    if clip.is_empty() || pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }
    let style = to_ratatui_style(style);
    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = g.width() as u16;
        if w == 0 {
            continue;
        }
        if x.saturating_add(w) > clip.right() {
            break;
        }
        if x >= clip.x {
            if let Some(cell) = buf.cell_mut((x, pos.y)) {
                cell.set_symbol(g).set_style(style);
            }
            for dx in 1..w {
                if let Some(cell) = buf.cell_mut((x + dx, pos.y)) {
                    cell.set_char(' ').set_style(style);
                }
            }
        }
        x = x.saturating_add(w);
    }
}

fn draw_border(buf: &mut Buffer, rect: Rect, style: Style, kind: BorderKind) {
    if rect.w < 2 || rect.h < 2 {
        return;
    }
    let style = to_ratatui_style(style);
    let (tl, tr, bl, br, h, v) = kind.glyphs();
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    let mut put = |x: u16, y: u16, ch: char| {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(ch).set_style(style);
        }
    };
    for x in rect.x + 1..right {
        put(x, rect.y, h);
        put(x, bottom, h);
    }
    for y in rect.y + 1..bottom {
        put(rect.x, y, v);
        put(right, y, v);
    }
    put(rect.x, rect.y, tl);
    put(right, rect.y, tr);
    put(rect.x, bottom, bl);
    put(right, bottom, br);
}
