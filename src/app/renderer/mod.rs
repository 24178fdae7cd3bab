//! wgpu renderer
//!
//! Owns the window surface and draws one frame: clear, fill the scene's
//! rectangles, present.

use std::sync::Arc;

use tracing::info;
use wgpu::{Device, Queue, Surface, SurfaceConfiguration};
use winit::window::Window;

pub mod rect_pipeline;

use super::scene::FilledRect;
use rect_pipeline::RectPipeline;

/// Renderer handles wgpu setup and per-frame drawing
pub struct Renderer {
    surface: Surface<'static>,
    device: Device,
    queue: Queue,
    config: SurfaceConfiguration,
    rects: RectPipeline,
    arena_size: [f32; 2],
}

impl Renderer {
    /// Creates a new renderer for the given window.
    ///
    /// `arena_size` is the coordinate space rectangles are given in; it is
    /// stretched over the whole surface.
    pub async fn new(
        window: Arc<Window>,
        arena_size: [f32; 2],
        vsync: bool,
    ) -> anyhow::Result<Self> {
        info!("Initializing wgpu renderer");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        info!(
            adapter.name = adapter.get_info().name,
            adapter.backend = ?adapter.get_info().backend,
            "Found GPU adapter"
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Main Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
                experimental_features: Default::default(),
            })
            .await?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no supported formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: if vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        info!(
            surface.width = config.width,
            surface.height = config.height,
            surface.format = ?config.format,
            "Surface configured"
        );

        let rects = RectPipeline::new(&device, config.format, arena_size);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            rects,
            arena_size,
        })
    }

    /// Resizes the surface
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);

            info!(
                width = new_size.width,
                height = new_size.height,
                "Surface resized"
            );
        }
    }

    /// Reconfigures the surface at its current size
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Clears to `clear_color`, fills `rects` and presents
    pub fn draw(
        &mut self,
        clear_color: [u8; 4],
        rects: &[FilledRect],
    ) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.rects
            .prepare(&self.device, &self.queue, self.arena_size, rects);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let [r, g, b, a] = clear_color.map(|c| c as f64 / 255.0);
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Frame Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.rects.render(&mut rpass);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
