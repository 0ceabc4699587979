use anyhow::Result;
use winit::dpi::LogicalSize;

use isoffice_engine::core::{App as EngineApp, AppControl, FrameCtx, WindowCtx};
use isoffice_engine::device::GpuInit;
use isoffice_engine::input::Key;
use isoffice_engine::render::MeshRenderer;
use isoffice_engine::window::{CursorIcon, Runtime, RuntimeConfig};

use crate::config::OfficeConfig;
use crate::office::{OfficeScene, SceneError};
use crate::session::{OfficeSession, ReadyCallback};

// ── Application ───────────────────────────────────────────────────────────

/// Top-level office viewer builder.
///
/// Configure the window and the office, queue work for when the scene is
/// ready, then hand control to the event loop with [`run`](Self::run).
///
/// ```rust,ignore
/// Application::new()
///     .title("Office")
///     .size(1280.0, 720.0)
///     .on_ready(|scene| scene.zoom_in())
///     .run()?;
/// ```
pub struct Application {
    title:  String,
    width:  f64,
    height: f64,
    config: OfficeConfig,
    gpu:    GpuInit,
    ready:  Vec<ReadyCallback>,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title:  "isoffice".to_string(),
            width:  1280.0,
            height: 720.0,
            config: OfficeConfig::default(),
            gpu:    GpuInit::default(),
            ready:  Vec::new(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    /// Replace the office layout, palette and camera limits.
    pub fn config(mut self, config: OfficeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the starting (and reset) zoom.
    pub fn zoom(mut self, zoom: f32) -> Self {
        self.config.camera.default_zoom = zoom;
        self
    }

    pub fn gpu(mut self, gpu: GpuInit) -> Self {
        self.gpu = gpu;
        self
    }

    /// Run `f` once the scene has been built for the window.
    pub fn on_ready<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut OfficeScene) + 'static,
    {
        self.ready.push(Box::new(f));
        self
    }

    /// Opens the window and blocks until it closes.
    ///
    /// An invalid configuration fails before any window is created.
    pub fn run(self) -> Result<()> {
        self.config.validate().map_err(SceneError::from)?;

        let config = RuntimeConfig {
            title:        self.title,
            initial_size: LogicalSize::new(self.width, self.height),
            gpu:          self.gpu,
        };

        let mut session = OfficeSession::new(self.config);
        for f in self.ready {
            session.on_ready(f);
        }

        let app = Runtime::run(config, OfficeApp::new(session))?;
        match app.error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── OfficeApp ─────────────────────────────────────────────────────────────

/// Engine-facing side of [`Application`].
struct OfficeApp {
    session:  OfficeSession,
    renderer: MeshRenderer,
    /// Scene creation failure, reported once the loop has exited.
    error:    Option<SceneError>,
    grabbing: bool,
}

impl OfficeApp {
    fn new(session: OfficeSession) -> Self {
        Self {
            session,
            renderer: MeshRenderer::new(),
            error:    None,
            grabbing: false,
        }
    }

    fn update_cursor(&mut self, window: &WindowCtx<'_>) {
        let dragging = self.session.scene().is_some_and(OfficeScene::is_dragging);
        if dragging != self.grabbing {
            self.grabbing = dragging;
            window.set_cursor(if dragging { CursorIcon::Grabbing } else { CursorIcon::Default });
        }
    }
}

impl EngineApp for OfficeApp {
    fn on_start(&mut self, window: &WindowCtx<'_>) {
        if let Err(e) = self.session.attach(window.viewport()) {
            log::error!("failed to build office scene: {e}");
            self.error = Some(e);
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.error.is_some() {
            return AppControl::Exit;
        }
        if ctx.input_frame.key_pressed(Key::Escape) || ctx.input_frame.key_pressed(Key::Q) {
            return AppControl::Exit;
        }

        self.session.resize(ctx.window.viewport());
        self.session.handle_input(ctx.input, ctx.input_frame);
        self.session.update(ctx.time.dt);
        self.update_cursor(&ctx.window);

        let Some(scene) = self.session.scene_mut() else {
            return AppControl::Continue;
        };

        let clear    = scene.background();
        let view     = scene.view();
        let dl       = scene.draw_list();
        let renderer = &mut self.renderer;

        let control = ctx.render(clear, |rctx, target| {
            renderer.render(rctx, target, dl, view);
        });

        log::trace!("frame {}: {} triangles", ctx.time.frame_index, renderer.last_triangle_count());
        control
    }

    fn on_exit(&mut self) {
        self.session.destroy();
    }
}
