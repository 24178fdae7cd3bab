//! Input events the game reacts to

/// A translated input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close request
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

impl InputEvent {
    /// True for events that stop the game loop
    pub fn is_quit(self) -> bool {
        matches!(self, Self::Quit | Self::KeyDown(Key::Escape))
    }
}

/// Keys the game distinguishes. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Escape,
    Other,
}

/// Convert from winit key code
impl From<winit::keyboard::KeyCode> for Key {
    fn from(key: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as WK;
        match key {
            WK::ArrowLeft => Self::Left,
            WK::ArrowRight => Self::Right,
            WK::Escape => Self::Escape,
            _ => Self::Other,
        }
    }
}

impl From<winit::keyboard::PhysicalKey> for Key {
    fn from(key: winit::keyboard::PhysicalKey) -> Self {
        match key {
            winit::keyboard::PhysicalKey::Code(code) => code.into(),
            winit::keyboard::PhysicalKey::Unidentified(_) => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::{KeyCode, NativeKeyCode, PhysicalKey};

    #[test]
    fn test_quit_events() {
        assert!(InputEvent::Quit.is_quit());
        assert!(InputEvent::KeyDown(Key::Escape).is_quit());
        assert!(!InputEvent::KeyUp(Key::Escape).is_quit());
        assert!(!InputEvent::KeyDown(Key::Left).is_quit());
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from(KeyCode::ArrowLeft), Key::Left);
        assert_eq!(Key::from(KeyCode::ArrowRight), Key::Right);
        assert_eq!(Key::from(KeyCode::Escape), Key::Escape);
        assert_eq!(Key::from(KeyCode::Space), Key::Other);
        assert_eq!(
            Key::from(PhysicalKey::Unidentified(NativeKeyCode::Unidentified)),
            Key::Other
        );
    }
}
