//! Command-line argument parsing.

use clap::Parser;

use crate::params::{ActorParams, CouplingParams, RenderConfig, SceneParams, WaterPhysics};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "bobber")]
#[command(about = "Springy water surface with a buoyant actor", long_about = None)]
pub struct Args {
    /// Number of water surface joints
    #[arg(long, value_name = "COUNT")]
    pub joints: Option<usize>,

    /// Gravity (points per second squared, negative is down)
    #[arg(long, value_name = "ACCEL")]
    pub gravity: Option<f32>,

    /// Buoyancy gain (how hard the water pushes toward equilibrium)
    #[arg(long, value_name = "GAIN")]
    pub buoyancy: Option<f32>,

    /// Water viscosity (drag on a submerged actor)
    #[arg(long, value_name = "DRAG")]
    pub viscosity: Option<f32>,

    /// Window width (pixels)
    #[arg(long, value_name = "PIXELS")]
    pub width: Option<u32>,

    /// Window height (pixels)
    #[arg(long, value_name = "PIXELS")]
    pub height: Option<u32>,
}

impl Args {
    /// Build the full parameter set: defaults, scene-derived water geometry,
    /// then command-line overrides (echoed to the console).
    pub fn build_params(
        &self,
    ) -> (
        SceneParams,
        WaterPhysics,
        CouplingParams,
        ActorParams,
        RenderConfig,
    ) {
        let mut scene = SceneParams::default();
        let mut render = RenderConfig::default();
        if let Some(w) = self.width {
            scene.width = w as f32;
            render.window_width = w;
            println!("Window width: {}px", w);
        }
        if let Some(h) = self.height {
            scene.height = h as f32;
            render.window_height = h;
            println!("Window height: {}px", h);
        }

        // The water spans the scene; its rest height is derived from the
        // scene height
        let mut water = WaterPhysics::default();
        water.width = scene.width;
        water.surface_height = scene.surface_height();
        if let Some(joints) = self.joints {
            water.num_joints = joints;
            println!("Surface joints: {}", joints);
        }

        let mut coupling = CouplingParams::default();
        if let Some(buoyancy) = self.buoyancy {
            coupling.buoyancy_gain = buoyancy;
            println!("Buoyancy gain: {}", buoyancy);
        }
        if let Some(viscosity) = self.viscosity {
            coupling.viscosity = viscosity;
            println!("Viscosity: {}", viscosity);
        }

        let mut actor = ActorParams::default();
        if let Some(gravity) = self.gravity {
            actor.gravity = gravity;
            println!("Gravity: {} points/s^2", gravity);
        }

        (scene, water, coupling, actor, render)
    }
}
