//! Ball and paddle records

/// Horizontal paddle speed in pixels per second
pub const PADDLE_SPEED: f32 = 200.0;

/// The bouncing ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    /// Constant after creation
    pub width: f32,
    /// Constant after creation
    pub height: f32,
    /// Horizontal velocity in pixels per second
    pub vx: f32,
    /// Vertical velocity in pixels per second
    pub vy: f32,
}

impl Ball {
    /// Advances the position by velocity times `delta_time` seconds
    pub fn integrate(&mut self, delta_time: f32) {
        self.x += self.vx * delta_time;
        self.y += self.vy * delta_time;
    }
}

/// Signed horizontal intent of the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveDirection {
    Left = -1,
    #[default]
    Stopped = 0,
    Right = 1,
}

impl MoveDirection {
    /// Direction from the held state of the two arrow keys.
    ///
    /// `right - left`, so both held (or neither) cancels out.
    pub fn from_keys(right: bool, left: bool) -> Self {
        match (right, left) {
            (true, false) => Self::Right,
            (false, true) => Self::Left,
            _ => Self::Stopped,
        }
    }

    /// -1.0, 0.0 or 1.0
    pub fn signum(self) -> f32 {
        self as i8 as f32
    }
}

/// The player paddle. Only `x` moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub move_direction: MoveDirection,
}

impl Paddle {
    /// Moves horizontally by direction * speed * `delta_time`. Not clamped.
    pub fn advance(&mut self, delta_time: f32) {
        self.x += self.move_direction.signum() * PADDLE_SPEED * delta_time;
    }
}

/// Ball at (20, 20), 15x15, moving (100, 100) px/s
pub fn create_ball() -> Ball {
    Ball {
        x: 20.0,
        y: 20.0,
        width: 15.0,
        height: 15.0,
        vx: 100.0,
        vy: 100.0,
    }
}

/// Paddle at (320, 500), 100x20, stationary
pub fn create_paddle() -> Paddle {
    Paddle {
        x: 320.0,
        y: 500.0,
        width: 100.0,
        height: 20.0,
        move_direction: MoveDirection::Stopped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_is_pure() {
        assert_eq!(create_ball(), create_ball());
        assert_eq!(create_paddle(), create_paddle());
    }

    #[test]
    fn test_initial_entities() {
        let ball = create_ball();
        assert_eq!((ball.x, ball.y), (20.0, 20.0));
        assert_eq!((ball.width, ball.height), (15.0, 15.0));
        assert_eq!((ball.vx, ball.vy), (100.0, 100.0));

        let paddle = create_paddle();
        assert_eq!((paddle.x, paddle.y), (320.0, 500.0));
        assert_eq!((paddle.width, paddle.height), (100.0, 20.0));
        assert_eq!(paddle.move_direction, MoveDirection::Stopped);
    }

    #[test]
    fn test_direction_from_keys() {
        assert_eq!(MoveDirection::from_keys(true, false), MoveDirection::Right);
        assert_eq!(MoveDirection::from_keys(false, true), MoveDirection::Left);
        assert_eq!(MoveDirection::from_keys(true, true), MoveDirection::Stopped);
        assert_eq!(MoveDirection::from_keys(false, false), MoveDirection::Stopped);
    }

    #[test]
    fn test_paddle_is_not_clamped() {
        let mut paddle = create_paddle();
        paddle.move_direction = MoveDirection::Left;
        paddle.advance(10.0);
        assert_eq!(paddle.x, 320.0 - 2000.0);
        assert_eq!(paddle.y, 500.0);
    }
}
