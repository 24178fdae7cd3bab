//! Game application module
//!
//! Windowing, input, frame pacing and rendering around the simulation.

pub mod config;
pub mod error;
pub mod input;
pub mod pacer;
pub mod renderer;
mod runner;
pub mod scene;
mod window;

pub use config::{AppConfig, FrameConfig, WindowConfig};
pub use error::InitError;
pub use pacer::{Clock, FramePacer, MonotonicClock, PacingStrategy};
pub use runner::{App, run};
pub use window::{centered_position, window_attributes_from_config};
