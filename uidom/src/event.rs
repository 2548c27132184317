/// High-level input events with element targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press, targeted at the focused element.
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Tap or mouse click.
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
}

impl Event {
    /// Element the event is aimed at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Key { target, .. } | Event::Click { target, .. } => target.as_deref(),
        }
    }

    /// Left-button click (or tap) on `target`.
    pub fn tap(target: impl Into<String>) -> Self {
        Event::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    /// Unmodified key press on `target`.
    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Event::Key {
            target: Some(target.into()),
            key,
            modifiers: Modifiers::new(),
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
