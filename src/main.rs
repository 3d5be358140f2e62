//! Starry Sky - stars wheel slowly around a point on the horizon while a
//! soundtrack loops in the background.

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use starry_sky::audio::{AudioClip, AudioSystem};
use starry_sky::canvas::FrameBuffer;
use starry_sky::cli::Args;
use starry_sky::params::{AudioConfig, RenderConfig};
use starry_sky::render_loop::{LoopEvent, RenderLoop, Viewport};
use starry_sky::rendering::RenderSystem;
use starry_sky::{Result, StarryError};

/// Main application state
///
/// Platform resources are declared in release order: audio device first,
/// then the renderer, then the window.
struct App {
    audio: Option<AudioSystem>,
    render_system: Option<RenderSystem>,
    window: Option<Arc<Window>>,

    // Simulation
    render_loop: RenderLoop,
    frame: FrameBuffer,

    // Configuration
    render_config: RenderConfig,

    // Frame pacing
    next_frame: Instant,

    // First acquisition failure inside the event loop, reported after it exits
    startup_error: Option<StarryError>,
}

impl App {
    fn new(args: &Args, render_config: RenderConfig, audio: Option<AudioSystem>) -> Self {
        let viewport = Viewport::new(render_config.window_width, render_config.window_height);
        let render_loop = RenderLoop::new(
            viewport,
            args.star_field_params(),
            render_config.clone(),
            args.rng(),
        );

        Self {
            audio,
            render_system: None,
            window: None,
            render_loop,
            frame: FrameBuffer::new(viewport.width, viewport.height),
            render_config,
            next_frame: Instant::now(),
            startup_error: None,
        }
    }

    /// Create the window and renderer, then start the soundtrack
    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title(self.render_config.window_title.as_str())
            .with_resizable(true)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .map_err(|e| StarryError::resource("window", e))?,
        );

        let render_system = pollster::block_on(RenderSystem::new(Arc::clone(&window)))?;

        if let Some(ref audio) = self.audio {
            audio.start()?;
        }

        // HiDPI scaling can make the physical size differ from the requested one
        let size = window.inner_size();
        if Viewport::new(size.width, size.height) != self.render_loop.viewport() {
            self.apply_resize(size.width, size.height);
        }

        log::info!("Starry Sky is running! Close the window or press ESC to quit");

        self.window = Some(window);
        self.render_system = Some(render_system);
        Ok(())
    }

    fn apply_resize(&mut self, width: u32, height: u32) {
        self.render_loop
            .handle_event(LoopEvent::Resized { width, height });
        self.frame.resize(width, height);
        if let Some(ref mut render_system) = self.render_system {
            render_system.resize(width, height);
        }
    }

    fn quit(&mut self, event_loop: &ActiveEventLoop) {
        self.render_loop.handle_event(LoopEvent::Quit);
        event_loop.exit();
    }

    /// Run one tick: loop audio, advance, compose and present
    fn render_frame(&mut self) {
        if !self.render_loop.is_running() {
            return;
        }

        if let Some(ref audio) = self.audio {
            audio.requeue_if_drained();
        }

        self.render_loop.update();
        self.render_loop.draw(&mut self.frame);

        if let Some(ref mut render_system) = self.render_system {
            render_system.present(&self.frame);
        }

        // Fixed pause after each frame; time spent drawing is not compensated
        self.next_frame = Instant::now() + self.render_config.frame_delay();
    }

    /// Release platform resources in reverse acquisition order
    fn shutdown(&mut self) {
        if self.audio.take().is_some() {
            log::info!("Audio device closed");
        }
        self.render_system = None;
        self.window = None;
        log::info!("Shut down cleanly");
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.render_loop.is_running() {
            return;
        }
        if let Some(ref window) = self.window {
            if Instant::now() >= self.next_frame {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.init_graphics(event_loop) {
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.quit(event_loop),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.quit(event_loop),
            WindowEvent::Resized(size) => self.apply_resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.render_frame(),
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

/// Load the soundtrack and open the output device (skipped when muted)
fn open_audio(config: &AudioConfig) -> Result<Option<AudioSystem>> {
    if !config.enabled {
        return Ok(None);
    }
    let clip = AudioClip::load(&config.asset_path)?;
    AudioSystem::open(clip).map(Some)
}

fn run(args: &Args) -> Result<()> {
    let render_config = RenderConfig::default();

    // Audio is acquired before the window so a bad asset never shows one
    let audio = open_audio(&args.audio_config())?;

    let event_loop = EventLoop::new().map_err(|e| StarryError::init("event loop", e))?;
    let mut app = App::new(args, render_config, audio);
    event_loop
        .run_app(&mut app)
        .map_err(|e| StarryError::init("event loop", e))?;

    match app.startup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting Starry Sky");

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
