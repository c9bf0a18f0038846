use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use huetick_core::{Invalidate, Saver, Size};

use crate::coords::Viewport;
use crate::device::{Gpu, GpuConfig, SurfaceStatus};
use crate::render::{to_wgpu_color, TextRenderer};
use crate::scene::{Scene, ScenePainter};
use crate::text::Typeface;
use crate::time::Cadence;

/// How the saver window is hosted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WindowMode {
    /// A regular window; input does not dismiss the saver.
    Windowed,
    /// Borderless fullscreen with a hidden cursor; any key or button press
    /// dismisses the saver.
    Fullscreen,
}

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Initial size for windowed/preview hosting; ignored in fullscreen.
    pub initial_size: LogicalSize<f64>,
    pub mode: WindowMode,
    /// Passed through to [`Saver::setup`].
    pub preview: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "huetick".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            mode: WindowMode::Fullscreen,
            preview: false,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `saver` until it is dismissed or the window closes.
    pub fn run<S>(
        config: RuntimeConfig,
        gpu_config: GpuConfig,
        typeface: Typeface,
        saver: S,
    ) -> Result<()>
    where
        S: 'static + Saver,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = SaverState::new(config, gpu_config, typeface, saver);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct SaverState<S>
where
    S: Saver + 'static,
{
    config: RuntimeConfig,
    gpu_config: GpuConfig,
    typeface: Typeface,
    saver: S,

    entry: Option<WindowEntry>,
    cadence: Cadence,
    scene: Scene,
    text_renderer: TextRenderer,
}

impl<S> SaverState<S>
where
    S: Saver + 'static,
{
    fn new(config: RuntimeConfig, gpu_config: GpuConfig, typeface: Typeface, saver: S) -> Self {
        let cadence = Cadence::new(saver.frame_interval());
        Self {
            config,
            gpu_config,
            typeface,
            saver,
            entry: None,
            cadence,
            scene: Scene::new(),
            text_renderer: TextRenderer::new(),
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let mut attrs = Window::default_attributes().with_title(self.config.title.clone());
        attrs = match self.config.mode {
            WindowMode::Fullscreen => attrs.with_fullscreen(Some(Fullscreen::Borderless(None))),
            WindowMode::Windowed => attrs.with_inner_size(self.config.initial_size),
        };

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        if self.config.mode == WindowMode::Fullscreen {
            window.set_cursor_visible(false);
        }

        let gpu_config = self.gpu_config.clone();
        let entry = WindowEntryBuilder {
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_config))
                    .expect("GPU initialization failed for window")
            },
        }
        .build();

        let size = entry.with_window(surface_size);
        self.saver.setup(size, self.config.preview);
        self.cadence.reset(Instant::now());

        entry.with_window(|w| w.request_redraw());
        self.entry = Some(entry);
        Ok(())
    }

    /// Any key or button press ends a fullscreen saver. Windowed and preview
    /// hosting keep running so the view can be inspected.
    fn dismiss(&mut self, event_loop: &ActiveEventLoop) {
        if self.config.mode == WindowMode::Fullscreen {
            log::info!("saver dismissed by input");
            event_loop.exit();
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let bounds = entry.with_window(surface_size);

        // Minimized windows report 0x0; there is nothing to draw into.
        if !bounds.is_valid() {
            return;
        }

        self.scene.begin();
        {
            let mut painter = ScenePainter::new(&mut self.scene, &self.typeface);
            self.saver.draw(&mut painter, bounds);
        }

        // The saver recorded nothing (no usable clock reading): present
        // nothing this frame.
        if self.scene.is_empty() {
            return;
        }

        // Split borrows so the ouroboros closure does not capture `self`.
        let (text_renderer, scene, typeface) =
            (&mut self.text_renderer, &self.scene, &self.typeface);

        let mut fatal = false;

        entry.with_mut(|fields| {
            let gpu = fields.gpu;

            let mut frame = match gpu.begin_frame() {
                Ok(f) => f,
                Err(err) => {
                    if gpu.after_error(err) == SurfaceStatus::Fatal {
                        fatal = true;
                    }
                    return;
                }
            };

            let clear = scene
                .fill()
                .map(to_wgpu_color)
                .unwrap_or(wgpu::Color::BLACK);

            // Clear pass — dropped before the encoder is moved into submit().
            {
                let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("huetick clear"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &frame.view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(clear),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                    multiview_mask: None,
                });
            }

            let size = gpu.size();
            let viewport = Viewport::new(size.width as f32, size.height as f32);
            text_renderer.render(gpu, &mut frame, viewport, scene, typeface);

            fields.window.pre_present_notify();
            gpu.submit(frame);
        });

        if fatal {
            log::error!("fatal surface error; shutting down");
            event_loop.exit();
        }
    }
}

impl<S> ApplicationHandler for SaverState<S>
where
    S: Saver + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("failed to create saver window: {e:#}");
            event_loop.exit();
        }
    }

    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause {
            if self.cadence.advance(Instant::now())
                && self.saver.animate_one_frame() == Invalidate::Full
            {
                if let Some(entry) = self.entry.as_ref() {
                    entry.with_window(|w| w.request_redraw());
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Sleep until the next animation tick; redraws and input wake us early.
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.cadence.next_deadline()));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key, .. }
                if key.state == ElementState::Pressed =>
            {
                self.dismiss(event_loop);
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                ..
            } => {
                self.dismiss(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                    entry.with_window(|w| w.request_redraw());
                }
                // A minimized window reports 0x0; the saver keeps its last
                // real layout rather than recomputing against nothing.
                let size = Size::new(new_size.width as f32, new_size.height as f32);
                if size.is_valid() {
                    self.saver.resized(size);
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                    let size = Size::new(new_size.width as f32, new_size.height as f32);
                    if size.is_valid() {
                        self.saver.resized(size);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }
}

fn surface_size(window: &Window) -> Size {
    let size = window.inner_size();
    Size::new(size.width as f32, size.height as f32)
}
