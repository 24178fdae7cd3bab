//! Simulation scenarios with known outcomes

use crate::diagnostics::check::{Diagnostic, Finding};
use crate::sim::World;
use crate::sim::entities::{Ball, MoveDirection, create_ball, create_paddle};

/// Replays a few fixed scenarios through `World::step`
pub struct SimulationCheck;

impl SimulationCheck {
    fn scenarios() -> Vec<(&'static str, Result<(), String>)> {
        vec![
            ("initial state", Self::initial_state()),
            ("left wall bounce", Self::left_wall_bounce()),
            ("paddle bounce", Self::paddle_bounce()),
            ("paddle movement", Self::paddle_movement()),
        ]
    }

    fn initial_state() -> Result<(), String> {
        let world = World::new();
        if *world.ball() != create_ball() || *world.paddle() != create_paddle() {
            return Err("world does not start from create_ball/create_paddle".into());
        }
        if !world.is_running() || world.tick_count() != 0 {
            return Err("world should start running with no ticks".into());
        }
        Ok(())
    }

    fn left_wall_bounce() -> Result<(), String> {
        let mut world = World::new();
        *world.ball_mut() = Ball {
            x: 0.0,
            y: 300.0,
            vx: -100.0,
            vy: 50.0,
            ..create_ball()
        };
        world.step(0.1);
        let ball = world.ball();
        if ball.vx != 100.0 || ball.vy != 50.0 {
            return Err(format!("velocity after bounce: ({}, {})", ball.vx, ball.vy));
        }
        if (ball.x - 10.0).abs() > 1e-4 {
            return Err(format!("x after bounce: {}", ball.x));
        }
        Ok(())
    }

    fn paddle_bounce() -> Result<(), String> {
        let mut world = World::new();
        *world.ball_mut() = Ball {
            x: 350.0,
            y: 490.0,
            ..create_ball()
        };
        let bounce = world.step(0.0);
        if !bounce.vertical || world.ball().vy != -100.0 {
            return Err(format!("vy after paddle contact: {}", world.ball().vy));
        }
        Ok(())
    }

    fn paddle_movement() -> Result<(), String> {
        let mut world = World::new();
        world.set_move_direction(MoveDirection::Left);
        world.step(0.5);
        if world.paddle().x != 220.0 {
            return Err(format!("paddle x after 0.5s left: {}", world.paddle().x));
        }
        Ok(())
    }
}

impl Diagnostic for SimulationCheck {
    fn name(&self) -> &'static str {
        "Simulation"
    }

    fn run(&self) -> Finding {
        let mut notes = Vec::new();
        let mut failures = 0;

        for (name, outcome) in Self::scenarios() {
            match outcome {
                Ok(()) => notes.push(format!("✓ {}", name)),
                Err(reason) => {
                    failures += 1;
                    notes.push(format!("✗ {}: {}", name, reason));
                }
            }
        }

        if failures > 0 {
            Finding::fail(format!("{} scenario(s) diverged", failures)).with_notes(notes)
        } else {
            Finding::pass("All scenarios match").with_notes(notes)
        }
    }
}
