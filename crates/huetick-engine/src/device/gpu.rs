use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// The two surface knobs the saver actually varies. Device features, limits
/// and frame latency stay at wgpu defaults: nothing in the workload needs
/// more than the baseline.
#[derive(Debug, Clone)]
pub struct GpuConfig {
    /// Prefer an sRGB surface format when the adapter offers one.
    pub prefer_srgb: bool,
    /// Swap behavior. FIFO is universally supported, and a saver that redraws
    /// four times a second never contends with vsync anyway.
    pub present_mode: wgpu::PresentMode,
}

impl Default for GpuConfig {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
        }
    }
}

/// One acquired surface frame. Short-lived: render into `encoder`, then hand
/// the whole thing back to [`Gpu::submit`].
pub struct Frame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// What the runtime should do after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceStatus {
    /// The surface was reconfigured; retry on the next frame.
    Recovered,
    /// Transient failure; skip this frame.
    SkipFrame,
    /// Unrecoverable (out of memory); shut down.
    Fatal,
}

/// wgpu device/queue plus the window's surface.
///
/// The surface borrows the window; the runtime keeps both in one
/// self-referencing entry so the borrow is sound for the window's lifetime.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
}

impl<'w> Gpu<'w> {
    pub async fn new(window: &'w Window, config: GpuConfig) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create surface for window")?;

        // A saver has no business spinning up the discrete GPU.
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no compatible GPU adapter found")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("huetick device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create GPU device")?;

        let caps = surface.get_capabilities(&adapter);
        let format = pick_format(&caps.formats, config.prefer_srgb)
            .context("surface reports no supported texture formats")?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: config.present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        log::debug!(
            "gpu ready: {} {:?}, surface {format:?} {}x{}",
            adapter.get_info().name,
            adapter.get_info().backend,
            surface_config.width,
            surface_config.height,
        );

        Ok(Self {
            surface,
            device,
            queue,
            surface_config,
            size,
        })
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_config.format
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Reconfigures the surface for a new window size. A zero dimension
    /// (minimized window) is recorded but not configured; wgpu rejects 0x0
    /// surfaces.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.surface_config.width = new_size.width;
        self.surface_config.height = new_size.height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Acquires the next surface texture and opens a command encoder for it.
    pub fn begin_frame(&self) -> Result<Frame, wgpu::SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("huetick frame encoder"),
            });

        Ok(Frame {
            surface_texture,
            view,
            encoder,
        })
    }

    /// Submits the frame's commands and presents it.
    pub fn submit(&self, frame: Frame) {
        self.queue.submit(std::iter::once(frame.encoder.finish()));
        frame.surface_texture.present();
    }

    /// Recovers from a [`begin_frame`](Self::begin_frame) error where
    /// possible.
    pub fn after_error(&mut self, err: wgpu::SurfaceError) -> SurfaceStatus {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                log::debug!("surface lost/outdated; reconfiguring");
                if self.size.width > 0 && self.size.height > 0 {
                    self.surface.configure(&self.device, &self.surface_config);
                }
                SurfaceStatus::Recovered
            }
            wgpu::SurfaceError::Timeout => {
                log::debug!("surface acquire timed out; skipping frame");
                SurfaceStatus::SkipFrame
            }
            wgpu::SurfaceError::OutOfMemory => {
                log::error!("surface out of memory");
                SurfaceStatus::Fatal
            }
            wgpu::SurfaceError::Other => {
                log::warn!("surface error; skipping frame");
                SurfaceStatus::SkipFrame
            }
        }
    }
}

/// Picks the surface format: the first known sRGB format when preferred,
/// otherwise whatever the adapter lists first.
fn pick_format(formats: &[wgpu::TextureFormat], prefer_srgb: bool) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        for candidate in [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ] {
            if formats.contains(&candidate) {
                return Some(candidate);
            }
        }
    }
    formats.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat::{Bgra8Unorm, Bgra8UnormSrgb, Rgba8Unorm, Rgba8UnormSrgb};

    #[test]
    fn pick_format_prefers_srgb() {
        let formats = [Bgra8Unorm, Rgba8UnormSrgb, Bgra8UnormSrgb];
        assert_eq!(pick_format(&formats, true), Some(Bgra8UnormSrgb));
        assert_eq!(
            pick_format(&[Bgra8Unorm, Rgba8UnormSrgb], true),
            Some(Rgba8UnormSrgb)
        );
    }

    #[test]
    fn pick_format_falls_back_to_first_listed() {
        let formats = [Rgba8Unorm, Bgra8Unorm];
        assert_eq!(pick_format(&formats, true), Some(Rgba8Unorm));
    }

    #[test]
    fn pick_format_takes_first_when_srgb_not_preferred() {
        let formats = [Bgra8Unorm, Bgra8UnormSrgb];
        assert_eq!(pick_format(&formats, false), Some(Bgra8Unorm));
    }

    #[test]
    fn pick_format_empty_list_is_none() {
        assert_eq!(pick_format(&[], true), None);
    }
}
