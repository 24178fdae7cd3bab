//! Ball collision tests against the arena edges and the paddle
//!
//! The ball's box is deliberately lopsided: the left and top edges sit half a
//! size away from the position while the right and bottom edges sit a full
//! size away. Edges are truncated toward zero before comparison, the same way
//! the game has always measured them.

use super::entities::{Ball, Paddle};

/// Playfield dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Truncated edges of the ball's bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl BallBounds {
    pub fn of(ball: &Ball) -> Self {
        Self {
            left: (ball.x - ball.width / 2.0).trunc(),
            right: (ball.x + ball.width).trunc(),
            top: (ball.y - ball.height / 2.0).trunc(),
            bottom: (ball.y + ball.height).trunc(),
        }
    }
}

/// Which velocity components a collision pass flipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounce {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Bounce {
    pub fn any(self) -> bool {
        self.horizontal || self.vertical
    }
}

/// True when the ball touches or crosses a side wall
pub fn hits_side_wall(bounds: &BallBounds, arena: &Arena) -> bool {
    bounds.right > arena.width || bounds.left <= 0.0
}

/// True when the ball touches or crosses the floor or ceiling
pub fn hits_floor_or_ceiling(bounds: &BallBounds, arena: &Arena) -> bool {
    bounds.bottom > arena.height || bounds.top <= 0.0
}

/// AABB overlap between ball and paddle.
///
/// The near edges are the ball's raw position; the far edges are the
/// truncated right/bottom bounds.
pub fn overlaps_paddle(ball: &Ball, bounds: &BallBounds, paddle: &Paddle) -> bool {
    ball.x < paddle.x + paddle.width
        && bounds.right > paddle.x
        && ball.y < paddle.y + paddle.height
        && bounds.bottom > paddle.y
}

/// Flips the ball's velocity for every collision at its current position.
///
/// Runs before the ball moves, so it always judges last frame's position.
pub fn resolve(ball: &mut Ball, paddle: &Paddle, arena: &Arena) -> Bounce {
    let bounds = BallBounds::of(ball);
    let bounce = Bounce {
        horizontal: hits_side_wall(&bounds, arena),
        vertical: hits_floor_or_ceiling(&bounds, arena) || overlaps_paddle(ball, &bounds, paddle),
    };

    if bounce.horizontal {
        ball.vx = -ball.vx;
    }
    if bounce.vertical {
        ball.vy = -ball.vy;
    }

    bounce
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entities::{create_ball, create_paddle};

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            x,
            y,
            vx,
            vy,
            ..create_ball()
        }
    }

    #[test]
    fn test_bounds_are_asymmetric() {
        let bounds = BallBounds::of(&ball_at(100.0, 200.0, 0.0, 0.0));
        assert_eq!(bounds.left, 92.0); // 92.5 truncated
        assert_eq!(bounds.right, 115.0);
        assert_eq!(bounds.top, 192.0);
        assert_eq!(bounds.bottom, 215.0);
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut ball = ball_at(0.0, 300.0, -100.0, 50.0);
        let bounce = resolve(&mut ball, &create_paddle(), &Arena::default());
        assert_eq!(
            bounce,
            Bounce {
                horizontal: true,
                vertical: false
            }
        );
        assert_eq!(ball.vx, 100.0);
        assert_eq!(ball.vy, 50.0);
    }

    #[test]
    fn test_right_wall_uses_full_width() {
        let arena = Arena::default();
        // right edge exactly 800 is not past the wall
        let bounds = BallBounds::of(&ball_at(785.0, 300.0, 100.0, 0.0));
        assert!(!hits_side_wall(&bounds, &arena));
        // 800.9 truncates to 800, still inside
        let bounds = BallBounds::of(&ball_at(785.9, 300.0, 100.0, 0.0));
        assert!(!hits_side_wall(&bounds, &arena));
        let bounds = BallBounds::of(&ball_at(786.0, 300.0, 100.0, 0.0));
        assert!(hits_side_wall(&bounds, &arena));
    }

    #[test]
    fn test_left_edge_truncates_toward_zero() {
        let arena = Arena::default();
        // left edge 0.5 truncates to 0, which counts as touching
        let bounds = BallBounds::of(&ball_at(8.0, 300.0, -100.0, 0.0));
        assert!(hits_side_wall(&bounds, &arena));
        let bounds = BallBounds::of(&ball_at(8.5, 300.0, -100.0, 0.0));
        assert!(!hits_side_wall(&bounds, &arena));
    }

    #[test]
    fn test_paddle_overlap() {
        let paddle = create_paddle();
        let mut ball = ball_at(350.0, 490.0, 100.0, 100.0);
        let bounce = resolve(&mut ball, &paddle, &Arena::default());
        assert!(bounce.vertical);
        assert!(!bounce.horizontal);
        assert_eq!(ball.vy, -100.0);
    }

    #[test]
    fn test_paddle_miss_to_the_side() {
        let paddle = create_paddle();
        let ball = ball_at(420.0, 490.0, 100.0, 100.0);
        assert!(!overlaps_paddle(&ball, &BallBounds::of(&ball), &paddle));
        let ball = ball_at(305.0, 490.0, 100.0, 100.0);
        assert!(!overlaps_paddle(&ball, &BallBounds::of(&ball), &paddle));
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let mut ball = ball_at(790.0, 590.0, 100.0, 100.0);
        let bounce = resolve(&mut ball, &create_paddle(), &Arena::default());
        assert!(bounce.any());
        assert_eq!((ball.vx, ball.vy), (-100.0, -100.0));
    }

    #[test]
    fn test_open_field_no_bounce() {
        let mut ball = ball_at(400.0, 300.0, 100.0, 100.0);
        let bounce = resolve(&mut ball, &create_paddle(), &Arena::default());
        assert!(!bounce.any());
        assert_eq!((ball.vx, ball.vy), (100.0, 100.0));
    }
}
