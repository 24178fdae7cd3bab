//! Input handling
//!
//! ```text
//! WindowEvent (winit) → InputCollector → one InputEvent per frame
//!                                              ↓
//!                                      apply_input(&mut World)
//! ```
//!
//! The collector is a one-slot mailbox, not a queue: each frame polls at most
//! one event and a newer event replaces an older one that was never polled.

mod collector;
mod events;
mod mapper;

pub use collector::InputCollector;
pub use events::{InputEvent, Key};
pub use mapper::{InputOutcome, apply_input};
