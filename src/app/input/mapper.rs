//! Applies polled input to the world

use tracing::debug;

use super::events::{InputEvent, Key};
use crate::sim::World;
use crate::sim::entities::MoveDirection;

/// What an input event changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputOutcome {
    pub quit_requested: bool,
    pub direction_changed: bool,
}

/// Applies one input event to the world.
///
/// - Quit or Escape clears the running flag. The frame still finishes.
/// - Any key-down sets the paddle direction to `(key == Right) - (key == Left)`,
///   so a non-arrow key (Escape included) stops the paddle.
/// - Releasing either arrow stops the paddle, even if the other arrow is
///   still held.
pub fn apply_input(world: &mut World, event: InputEvent) -> InputOutcome {
    let mut outcome = InputOutcome::default();

    if event.is_quit() {
        world.request_quit();
        outcome.quit_requested = true;
        debug!(?event, "quit requested");
    }

    let direction = match event {
        InputEvent::KeyDown(key) => Some(MoveDirection::from_keys(
            key == Key::Right,
            key == Key::Left,
        )),
        InputEvent::KeyUp(Key::Left | Key::Right) => Some(MoveDirection::Stopped),
        _ => None,
    };

    if let Some(direction) = direction {
        if world.paddle().move_direction != direction {
            outcome.direction_changed = true;
            debug!(?direction, "paddle direction changed");
        }
        world.set_move_direction(direction);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direction(world: &World) -> MoveDirection {
        world.paddle().move_direction
    }

    #[test]
    fn test_arrow_key_down() {
        let mut world = World::new();
        apply_input(&mut world, InputEvent::KeyDown(Key::Right));
        assert_eq!(direction(&world), MoveDirection::Right);
        apply_input(&mut world, InputEvent::KeyDown(Key::Left));
        assert_eq!(direction(&world), MoveDirection::Left);
    }

    #[test]
    fn test_release_stops_even_if_other_arrow_held() {
        let mut world = World::new();
        apply_input(&mut world, InputEvent::KeyDown(Key::Right));
        apply_input(&mut world, InputEvent::KeyDown(Key::Left));
        let outcome = apply_input(&mut world, InputEvent::KeyUp(Key::Left));
        assert!(outcome.direction_changed);
        assert_eq!(direction(&world), MoveDirection::Stopped);
    }

    #[test]
    fn test_other_key_down_stops_paddle() {
        let mut world = World::new();
        apply_input(&mut world, InputEvent::KeyDown(Key::Left));
        apply_input(&mut world, InputEvent::KeyDown(Key::Other));
        assert_eq!(direction(&world), MoveDirection::Stopped);
    }

    #[test]
    fn test_other_key_up_is_ignored() {
        let mut world = World::new();
        apply_input(&mut world, InputEvent::KeyDown(Key::Right));
        let outcome = apply_input(&mut world, InputEvent::KeyUp(Key::Other));
        assert_eq!(outcome, InputOutcome::default());
        assert_eq!(direction(&world), MoveDirection::Right);
    }

    #[test]
    fn test_escape_quits_and_stops() {
        let mut world = World::new();
        apply_input(&mut world, InputEvent::KeyDown(Key::Right));
        let outcome = apply_input(&mut world, InputEvent::KeyDown(Key::Escape));
        assert!(outcome.quit_requested);
        assert!(!world.is_running());
        assert_eq!(direction(&world), MoveDirection::Stopped);
    }

    #[test]
    fn test_window_close_quits_without_touching_paddle() {
        let mut world = World::new();
        apply_input(&mut world, InputEvent::KeyDown(Key::Left));
        let outcome = apply_input(&mut world, InputEvent::Quit);
        assert!(outcome.quit_requested);
        assert!(!outcome.direction_changed);
        assert_eq!(direction(&world), MoveDirection::Left);
    }
}
