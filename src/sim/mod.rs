//! Game simulation module
//!
//! Holds the ball, the paddle and the running flag in one explicit state
//! record and advances them one frame at a time. Nothing here touches the
//! window or the GPU.

pub mod collision;
pub mod entities;

use collision::{Arena, Bounce};
use entities::{Ball, MoveDirection, Paddle, create_ball, create_paddle};

/// Game world state
#[derive(Debug, Clone)]
pub struct World {
    ball: Ball,
    paddle: Paddle,
    arena: Arena,
    /// Cleared by a quit request; the loop stops after the current iteration
    running: bool,
    /// Total number of simulation steps taken
    tick_count: u64,
    /// Total simulated time in seconds
    sim_time: f64,
}

impl World {
    /// Creates a world with the default 800x600 arena
    pub fn new() -> Self {
        Self::with_arena(Arena::default())
    }

    /// Creates a world with a custom arena size
    pub fn with_arena(arena: Arena) -> Self {
        Self {
            ball: create_ball(),
            paddle: create_paddle(),
            arena,
            running: true,
            tick_count: 0,
            sim_time: 0.0,
        }
    }

    /// Advances the world by `delta_time` seconds.
    ///
    /// Order is fixed: collisions are judged against the position from the
    /// previous step, then the ball integrates with the possibly flipped
    /// velocity, then the paddle moves.
    pub fn step(&mut self, delta_time: f32) -> Bounce {
        let bounce = collision::resolve(&mut self.ball, &self.paddle, &self.arena);
        self.ball.integrate(delta_time);
        self.paddle.advance(delta_time);

        self.tick_count += 1;
        self.sim_time += delta_time as f64;

        bounce
    }

    /// Puts the ball and paddle back to their starting state
    pub fn reset(&mut self) {
        self.ball = create_ball();
        self.paddle = create_paddle();
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn paddle_mut(&mut self) -> &mut Paddle {
        &mut self.paddle
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Sets the paddle's move direction
    pub fn set_move_direction(&mut self, direction: MoveDirection) {
        self.paddle.move_direction = direction;
    }

    /// Returns false once a quit has been requested
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Requests that the loop stop after the current iteration
    pub fn request_quit(&mut self) {
        self.running = false;
    }

    /// Returns the current tick count
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns the total simulation time in seconds
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
