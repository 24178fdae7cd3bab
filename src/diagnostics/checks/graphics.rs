//! Graphics adapter availability

use crate::diagnostics::check::{Diagnostic, Finding};

/// Asks wgpu for an adapter without a surface.
///
/// A missing adapter is a warning, not a failure: headless machines can
/// still run every other check.
pub struct GraphicsCheck;

impl Diagnostic for GraphicsCheck {
    fn name(&self) -> &'static str {
        "Graphics"
    }

    fn run(&self) -> Finding {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let runtime = match tokio::runtime::Builder::new_current_thread().build() {
            Ok(runtime) => runtime,
            Err(e) => return Finding::fail(format!("Could not start runtime: {}", e)),
        };

        let adapter = runtime.block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: None,
            force_fallback_adapter: false,
        }));

        match adapter {
            Ok(adapter) => {
                let info = adapter.get_info();
                let notes = vec![
                    format!("Adapter: {}", info.name),
                    format!("Backend: {:?}", info.backend),
                    format!("Device type: {:?}", info.device_type),
                ];
                match info.device_type {
                    wgpu::DeviceType::Cpu => {
                        Finding::warn("Software adapter only").with_notes(notes)
                    }
                    _ => Finding::pass(format!("{} ({:?})", info.name, info.backend))
                        .with_notes(notes),
                }
            }
            Err(e) => Finding::warn("No graphics adapter available")
                .with_notes(vec![format!("wgpu: {}", e)]),
        }
    }
}
