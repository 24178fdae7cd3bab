//! Per-frame draw list
//!
//! Turns the world into the filled rectangles the renderer draws, so the
//! render step can be checked without a GPU.

use crate::sim::World;

/// Background colour, opaque black
pub const CLEAR_COLOR: [u8; 4] = [0, 0, 0, 255];

/// Ball and paddle colour, opaque white
pub const ENTITY_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Axis-aligned rectangle filled with one RGBA colour, in arena pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: [u8; 4],
}

impl FilledRect {
    /// Snaps to whole pixels, truncating toward zero
    pub fn pixel_aligned(x: f32, y: f32, width: f32, height: f32, color: [u8; 4]) -> Self {
        Self {
            x: x.trunc(),
            y: y.trunc(),
            width: width.trunc(),
            height: height.trunc(),
            color,
        }
    }

    /// Colour as normalized floats
    pub fn color_f32(&self) -> [f32; 4] {
        self.color.map(|c| c as f32 / 255.0)
    }

    /// Corner positions: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [[f32; 2]; 4] {
        let (left, top) = (self.x, self.y);
        let (right, bottom) = (self.x + self.width, self.y + self.height);
        [[left, top], [right, top], [right, bottom], [left, bottom]]
    }
}

/// Rectangles for one frame: the ball, then the paddle
pub fn frame_rects(world: &World) -> [FilledRect; 2] {
    let ball = world.ball();
    let paddle = world.paddle();
    [
        FilledRect::pixel_aligned(ball.x, ball.y, ball.width, ball.height, ENTITY_COLOR),
        FilledRect::pixel_aligned(paddle.x, paddle.y, paddle.width, paddle.height, ENTITY_COLOR),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_frame() {
        let rects = frame_rects(&World::new());
        assert_eq!(
            rects[0],
            FilledRect {
                x: 20.0,
                y: 20.0,
                width: 15.0,
                height: 15.0,
                color: ENTITY_COLOR,
            }
        );
        assert_eq!(rects[1].x, 320.0);
        assert_eq!(rects[1].y, 500.0);
        assert_eq!(rects[1].width, 100.0);
        assert_eq!(rects[1].height, 20.0);
    }

    #[test]
    fn test_positions_truncate() {
        let mut world = World::new();
        world.ball_mut().x = 41.9;
        world.paddle_mut().x = -3.7;
        let rects = frame_rects(&world);
        assert_eq!(rects[0].x, 41.0);
        assert_eq!(rects[1].x, -3.0);
    }

    #[test]
    fn test_corners_and_color() {
        let rect = FilledRect::pixel_aligned(1.0, 2.0, 3.0, 4.0, [255, 0, 0, 255]);
        assert_eq!(rect.corners(), [[1.0, 2.0], [4.0, 2.0], [4.0, 6.0], [1.0, 6.0]]);
        assert_eq!(rect.color_f32(), [1.0, 0.0, 0.0, 1.0]);
    }
}
