//! Window configuration

use super::config::WindowConfig;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::window::WindowAttributes;

/// Creates window attributes from configuration
pub fn window_attributes_from_config(config: &WindowConfig) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(config.resizable)
        .with_decorations(config.decorated)
}

/// Top-left position that centers the configured window on a monitor.
///
/// Monitor position and size are physical pixels; the window size is logical
/// and scaled by `scale_factor`. A window larger than the monitor gets a
/// negative offset.
pub fn centered_position(
    monitor_position: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    scale_factor: f64,
    config: &WindowConfig,
) -> PhysicalPosition<i32> {
    let window: PhysicalSize<f64> =
        LogicalSize::new(config.width, config.height).to_physical(scale_factor);
    let x = (f64::from(monitor_size.width) - window.width) / 2.0;
    let y = (f64::from(monitor_size.height) - window.height) / 2.0;
    PhysicalPosition::new(
        monitor_position.x + x.trunc() as i32,
        monitor_position.y + y.trunc() as i32,
    )
}
