//! Bobber - a springy pool with a buoyant block
//!
//! A square actor drops into a pool of spring-coupled water columns, bobs
//! at its equilibrium depth, and kicks splashes across the surface whenever
//! it breaks through. Hold Space or the left mouse button to dive, release
//! to launch back out, R to restart.

use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use clap::Parser;

use bobber::cli::Args;
use bobber::params::RenderConfig;
use bobber::rendering::RenderSystem;
use bobber::sim::Simulation;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    sim: Simulation,

    // Configuration
    render_config: RenderConfig,

    // Time tracking
    start_time: Instant,
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        // Create window
        let window_attributes = Window::default_attributes()
            .with_title("Bobber")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        // Initialize rendering system
        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.sim.water,
            self.sim.scene(),
            &self.render_config,
        ))
        .unwrap();

        println!("\nBobber is running!");
        println!("Hold Space or the left mouse button to dive, release to jump");
        println!("R to restart, ESC to quit\n");

        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, event),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.sim.press(),
                ElementState::Released => self.sim.release(),
            },
            WindowEvent::RedrawRequested => {
                self.render_frame();
            }
            _ => {}
        }
    }
}

impl App {
    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        // Key repeat would re-trigger the dive while held
        if event.repeat {
            return;
        }
        match (event.physical_key, event.state) {
            (PhysicalKey::Code(KeyCode::Escape), ElementState::Pressed) => event_loop.exit(),
            (PhysicalKey::Code(KeyCode::KeyR), ElementState::Pressed) => self.sim.restart(),
            (PhysicalKey::Code(KeyCode::Space), ElementState::Pressed) => self.sim.press(),
            (PhysicalKey::Code(KeyCode::Space), ElementState::Released) => self.sim.release(),
            _ => {}
        }
    }

    /// Render a single frame
    fn render_frame(&mut self) {
        let Some(ref render_system) = self.render_system else {
            return;
        };

        // Advance the simulation to the current wall-clock time
        let now_s = self.start_time.elapsed().as_secs_f64();
        self.sim.advance(now_s);

        // Upload committed presentation state
        render_system.update_water_vertices(&self.sim.water.vertices);
        render_system.update_actor(&self.sim.actor);

        // Render
        if let Err(e) = render_system.render() {
            log::error!("render error: {:?}", e);
        }
    }
}

fn main() {
    env_logger::init();

    println!("Bobber - springy water playground");
    println!("Initializing simulation...\n");

    let args = Args::parse();
    let (scene, water, coupling, actor, render_config) = args.build_params();

    let sim = match Simulation::new(scene, water, coupling, actor) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut app = App {
        window: None,
        render_system: None,
        sim,
        render_config,
        start_time: Instant::now(),
    };
    let event_loop = EventLoop::new().unwrap();
    let _ = event_loop.run_app(&mut app);
}
