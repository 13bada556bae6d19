//! Backend-independent keyboard input understood by widgets.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKey {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Other,
}

#[cfg(feature = "tui")]
impl From<crossterm::event::KeyCode> for StepKey {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(ch) => StepKey::Char(ch),
            KeyCode::Up => StepKey::Up,
            KeyCode::Down => StepKey::Down,
            KeyCode::Left => StepKey::Left,
            KeyCode::Right => StepKey::Right,
            _ => StepKey::Other,
        }
    }
}
