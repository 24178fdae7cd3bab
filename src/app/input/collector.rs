//! Raw input collection from winit events

use tracing::trace;
use winit::event::{ElementState, WindowEvent};

use super::events::{InputEvent, Key};

/// Holds the latest translated input event until the game loop polls it
#[derive(Debug, Default)]
pub struct InputCollector {
    pending: Option<InputEvent>,
}

impl InputCollector {
    /// Creates a new input collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates a winit window event, ignoring ones the game has no use for
    pub fn translate(event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::Quit),
            WindowEvent::KeyboardInput { event, .. } => {
                let key = Key::from(event.physical_key);
                Some(match event.state {
                    ElementState::Pressed => InputEvent::KeyDown(key),
                    ElementState::Released => InputEvent::KeyUp(key),
                })
            }
            _ => None,
        }
    }

    /// Handle a winit window event
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        if let Some(input) = Self::translate(event) {
            self.push(input);
        }
    }

    /// Stores `event`, replacing any unpolled one. A pending quit is kept.
    pub fn push(&mut self, event: InputEvent) {
        if self.pending.is_some_and(InputEvent::is_quit) {
            return;
        }
        if let Some(dropped) = self.pending.replace(event) {
            trace!(?dropped, ?event, "unpolled input replaced");
        }
    }

    /// Takes the pending event, if any. Never blocks.
    pub fn poll(&mut self) -> Option<InputEvent> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_is_empty_by_default() {
        let mut collector = InputCollector::new();
        assert_eq!(collector.poll(), None);
    }

    #[test]
    fn test_poll_takes_event_once() {
        let mut collector = InputCollector::new();
        collector.push(InputEvent::KeyDown(Key::Right));
        assert_eq!(collector.poll(), Some(InputEvent::KeyDown(Key::Right)));
        assert_eq!(collector.poll(), None);
    }

    #[test]
    fn test_newer_event_wins() {
        let mut collector = InputCollector::new();
        collector.push(InputEvent::KeyDown(Key::Right));
        collector.push(InputEvent::KeyUp(Key::Right));
        collector.push(InputEvent::KeyDown(Key::Left));
        assert_eq!(collector.poll(), Some(InputEvent::KeyDown(Key::Left)));
        assert_eq!(collector.poll(), None);
    }

    #[test]
    fn test_pending_quit_is_kept() {
        let mut collector = InputCollector::new();
        collector.push(InputEvent::Quit);
        collector.push(InputEvent::KeyDown(Key::Left));
        assert_eq!(collector.poll(), Some(InputEvent::Quit));

        collector.push(InputEvent::KeyDown(Key::Escape));
        collector.push(InputEvent::KeyUp(Key::Escape));
        assert_eq!(collector.poll(), Some(InputEvent::KeyDown(Key::Escape)));
    }

    #[test]
    fn test_close_request_translates_to_quit() {
        assert_eq!(
            InputCollector::translate(&WindowEvent::CloseRequested),
            Some(InputEvent::Quit)
        );
        assert_eq!(InputCollector::translate(&WindowEvent::Focused(true)), None);
    }
}
