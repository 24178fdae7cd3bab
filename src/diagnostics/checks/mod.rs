//! Built-in diagnostics

mod build_info;
mod config;
mod graphics;
mod pacing;
mod simulation;
mod system_info;

pub use build_info::BuildInfoCheck;
pub use config::ConfigCheck;
pub use graphics::GraphicsCheck;
pub use pacing::PacingCheck;
pub use simulation::SimulationCheck;
pub use system_info::SystemInfoCheck;
