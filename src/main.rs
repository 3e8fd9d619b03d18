use anyhow::Context as _;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use portfolio_scene::cli::Cli;
use portfolio_scene::config::PortfolioConfig;
use portfolio_scene::core::{
    Clock, DisplayContext, FrameClock, FrameCounter, GpuContext, SurfaceRenderer, Throttled, UiOverlay,
};
use portfolio_scene::field::random_source;
use portfolio_scene::page::{PageController, PageShell, PortfolioContent};
use portfolio_scene::scene::{PointRasterizer, SceneComposer};

// === Constants ===

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

// === Host ===

/// Window-bound GPU state, created once the event loop resumes
struct Host {
    window: Arc<Window>,
    gpu: Arc<GpuContext>,
    surface: SurfaceRenderer,
    overlay: UiOverlay,
}

impl Host {
    async fn new(window: Arc<Window>) -> Result<Self, Box<dyn std::error::Error>> {
        let size = window.inner_size();
        let (gpu, surface) = GpuContext::for_window(window.clone()).await?;
        let gpu = Arc::new(gpu);
        let surface = SurfaceRenderer::new(gpu.clone(), surface, size.width, size.height);
        let overlay = UiOverlay::new(&window, &gpu, surface.format());

        Ok(Self {
            window,
            gpu,
            surface,
            overlay,
        })
    }
}

// === Page state ===

/// Everything that animates, independent of the window
struct Portfolio {
    composer: SceneComposer,
    rasterizer: PointRasterizer,
    page: PageController,
    shell: PageShell,
}

impl Portfolio {
    fn new(cli: &Cli, config: &PortfolioConfig, content: PortfolioContent) -> Self {
        let mut rng = random_source(cli.seed);
        let composer = SceneComposer::compose(config, rng.as_mut());
        let mut page = PageController::new(&config.timeline, &content, rng.as_mut());
        if cli.skip_preloader {
            page.skip_preloader();
        }

        Self {
            composer,
            rasterizer: PointRasterizer::default(),
            page,
            shell: PageShell::new(content),
        }
    }
}

// === Application ===

struct App {
    show_ui: bool,
    host: Option<Host>,
    portfolio: Portfolio,
    clock: Clock,
    frames: FrameCounter,
    fps_log: Throttled,
    fps_frames: u32,
    fps_time: f32,
}

impl App {
    fn new(show_ui: bool, portfolio: Portfolio) -> Self {
        Self {
            show_ui,
            host: None,
            portfolio,
            clock: Clock::new(),
            frames: FrameCounter::new(),
            fps_log: Throttled::new(FPS_UPDATE_INTERVAL),
            fps_frames: 0,
            fps_time: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.fps_frames += 1;
        self.fps_time += delta;

        if self.fps_log.try_tick(delta) && self.fps_time > 0.0 {
            log::info!("FPS: {:.1}", self.fps_frames as f32 / self.fps_time);
            self.fps_frames = 0;
            self.fps_time = 0.0;
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.portfolio.page.dispose();
        event_loop.exit();
    }

    fn redraw(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let delta = self.clock.tick();
        let frame = self.frames.advance(delta);
        self.update_fps(frame.delta);

        let Some(host) = self.host.as_mut() else {
            return Ok(());
        };
        let Portfolio {
            composer,
            rasterizer,
            page,
            shell,
        } = &mut self.portfolio;

        page.update(delta);

        let (width, height) = host.surface.dimensions();
        let context = DisplayContext::new(width, height);
        let output = composer.render_frame(frame.delta, rasterizer, &context);

        let Host {
            window,
            surface,
            overlay,
            ..
        } = host;
        let show_ui = self.show_ui;
        surface.render(&output, |gpu, encoder, view| {
            if show_ui {
                overlay.paint(window, gpu, encoder, view, [width, height], |ctx| {
                    shell.show(ctx, page)
                });
            }
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.host.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Portfolio")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(Host::new(window)) {
            Ok(host) => {
                log::info!(
                    "Portfolio initialized: {} scene points on {}",
                    self.portfolio.composer.point_count(),
                    host.gpu.adapter().get_info().name
                );
                self.host = Some(host);
                // Loading time shouldn't count as the first frame
                self.clock.reset();
            }
            Err(e) => {
                log::error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if self.show_ui {
            if let Some(host) = &mut self.host {
                if host.overlay.on_window_event(&host.window, &event) {
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.shutdown(event_loop),
            WindowEvent::Resized(size) => {
                if let Some(host) = &mut self.host {
                    host.surface.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    log::error!("Render error: {}", e);
                    self.shutdown(event_loop);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(host) = &self.host {
            host.window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = PortfolioConfig::resolve(cli.config.as_deref())?;
    let content = PortfolioContent::resolve(config.content.as_deref())
        .context("loading portfolio content")?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(!cli.no_ui, Portfolio::new(&cli, &config, content));

    log::info!("Portfolio - Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
