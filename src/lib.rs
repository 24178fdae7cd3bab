//! Paddle Bounce
//!
//! A single-paddle bouncing-ball demo built with Rust, winit, and wgpu.

/// Game application - windowing, input, pacing, and rendering
pub mod app;

/// Build-time information (timestamp, target, compiler)
pub mod build_info;

/// Startup self-check
pub mod diagnostics;

/// Game simulation - ball, paddle, and collisions
pub mod sim;
