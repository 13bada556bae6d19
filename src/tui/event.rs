//! Crossterm events reduced to what a stepper host reacts to.

use crate::ui::core::geom::Pos;
use crate::ui::core::input::StepKey;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    Key(StepKey),
    Click(Pos),
    Resize(u16, u16),
    Quit,
}

impl HostEvent {
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => from_key(key),
            Event::Mouse(mouse) => from_mouse(mouse),
            Event::Resize(w, h) => Some(HostEvent::Resize(w, h)),
            _ => None,
        }
    }
}

fn from_key(key: KeyEvent) -> Option<HostEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(HostEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(HostEvent::Quit)
        }
        code => match StepKey::from(code) {
            StepKey::Other => None,
            step => Some(HostEvent::Key(step)),
        },
    }
}

fn from_mouse(mouse: MouseEvent) -> Option<HostEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Some(HostEvent::Click(Pos::new(mouse.column, mouse.row)))
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/event.rs"]
mod tests;
