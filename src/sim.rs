//! Scene wiring: fixed-tick ordering, splash emission, restart, input toggle.

use crate::actor::{ActorState, Crossing};
use crate::buoyancy::BuoyancyCoupler;
use crate::params::{ActorParams, CouplingParams, SceneParams, WaterPhysics};
use crate::scheduler::FixedStepClock;
use crate::water::WaterField;

/// The whole scene: water, actor, coupling, and the fixed-step clock that
/// drives them. All state is mutated only inside the tick sequence, invoked
/// synchronously from `advance`.
pub struct Simulation {
    pub water: WaterField,
    pub actor: ActorState,
    /// True by default; suspended while the player holds the dive input
    pub underwater_physics: bool,
    coupler: BuoyancyCoupler,
    clock: FixedStepClock,
    scene: SceneParams,
    actor_params: ActorParams,
}

impl Simulation {
    pub fn new(
        scene: SceneParams,
        water_physics: WaterPhysics,
        coupling: CouplingParams,
        actor_params: ActorParams,
    ) -> Result<Self, String> {
        scene.validate()?;
        actor_params.validate()?;
        if f64::from(water_physics.spread) * scene.fixed_step > 0.5 {
            return Err(format!(
                "spread {} is unstable at a {} s step (spread * dt must stay <= 0.5)",
                water_physics.spread, scene.fixed_step
            ));
        }

        let water = WaterField::new(water_physics)?;
        let actor = ActorState::spawn(&actor_params, water.rest_level());
        let coupler = BuoyancyCoupler::new(coupling)?;
        let clock = FixedStepClock::new(scene.fixed_step)?;

        Ok(Self {
            water,
            actor,
            underwater_physics: true,
            coupler,
            clock,
            scene,
            actor_params,
        })
    }

    pub fn scene(&self) -> &SceneParams {
        &self.scene
    }

    /// Advance to wall-clock `now_s`: run every fixed tick the clock owes,
    /// then one presentation sync. Returns the number of whole fixed steps.
    ///
    /// Tick order: crossing check -> splash injection -> wave field step ->
    /// buoyancy coupling -> actor integration and scene clamp.
    pub fn advance(&mut self, now_s: f64) -> u32 {
        let Self {
            water,
            actor,
            underwater_physics,
            coupler,
            clock,
            scene,
            actor_params,
        } = self;

        let steps = clock.advance(now_s, |dt| {
            let dt = dt as f32;

            if let Some(crossing) = actor.check_crossing(water.rest_level()) {
                let coefficient = match crossing {
                    Crossing::Entry => actor_params.entry_splash_coefficient,
                    Crossing::Exit => actor_params.exit_splash_coefficient,
                };
                water.splash_at(
                    actor.position.x,
                    -actor.velocity.y * coefficient,
                    actor_params.splash_width,
                );
            }

            water.update(dt);
            coupler.apply(actor, water, *underwater_physics);
            actor.integrate(dt, actor_params.gravity);
            actor.clamp_to_scene(scene.width, scene.height);
        });

        self.water.rebuild_vertices();
        steps
    }

    /// Input press: suspend underwater physics; assist a submerged dive.
    pub fn press(&mut self) {
        self.underwater_physics = false;
        if !self.actor.above_surface {
            self.actor.dive(self.actor_params.dive_vertical_scale);
        }
    }

    /// Input release: restore underwater physics; launch a submerged actor
    /// upward proportionally to its depth below rest.
    pub fn release(&mut self) {
        self.underwater_physics = true;
        if !self.actor.above_surface {
            self.actor
                .jump(self.water.rest_level(), self.actor_params.jump_gain);
        }
    }

    /// Atomic scene restart: water back to rest, actor respawned, clock
    /// reference dropped so the next callback cannot see a stale delta.
    pub fn restart(&mut self) {
        self.water.reset();
        self.actor = ActorState::spawn(&self.actor_params, self.water.rest_level());
        self.underwater_physics = true;
        self.clock.reset();
        log::info!("scene restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn make_sim() -> Simulation {
        let scene = SceneParams::default();
        let mut water = WaterPhysics::default();
        water.width = scene.width;
        water.surface_height = scene.surface_height();
        Simulation::new(
            scene,
            water,
            CouplingParams::default(),
            ActorParams::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_unstable_spread() {
        let scene = SceneParams::default();
        let mut water = WaterPhysics::default();
        water.spread = 10_000.0;
        let result = Simulation::new(
            scene,
            water,
            CouplingParams::default(),
            ActorParams::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_actor_falls_from_spawn() {
        let mut sim = make_sim();
        sim.advance(0.0);
        let start_y = sim.actor.position.y;

        sim.advance(0.1);
        assert!(sim.actor.position.y < start_y);
        assert!(sim.actor.velocity.y < 0.0);
    }

    #[test]
    fn test_entry_crossing_agitates_the_water() {
        let mut sim = make_sim();
        sim.advance(0.0);

        // ~60 fps callbacks until the actor breaks the surface
        let mut t = 0.0;
        while sim.actor.above_surface && t < 2.0 {
            t += 0.0167;
            sim.advance(t);
        }
        assert!(!sim.actor.above_surface, "actor never entered the water");
        assert!(sim.water.samples.iter().any(|s| s.velocity != 0.0));
    }

    #[test]
    fn test_press_and_release_drive_dive_and_jump() {
        let mut sim = make_sim();
        sim.actor.above_surface = false;
        sim.actor.position.y = sim.water.rest_level() - 100.0;
        sim.actor.velocity = Vec2::new(3.0, -8.0);

        sim.press();
        assert!(!sim.underwater_physics);
        assert_eq!(sim.actor.velocity, Vec2::new(0.0, -4.0));

        sim.release();
        assert!(sim.underwater_physics);
        assert_eq!(sim.actor.velocity, Vec2::new(0.0, 500.0));
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut sim = make_sim();
        sim.advance(0.0);
        sim.advance(1.0);
        sim.press();

        sim.restart();
        assert!(sim.underwater_physics);
        assert!(sim.actor.above_surface);
        assert_eq!(sim.actor.velocity, Vec2::ZERO);
        for sample in &sim.water.samples {
            assert_eq!(sample.height_offset, 0.0);
            assert_eq!(sample.velocity, 0.0);
        }

        // The reference was dropped: a discontinuous jump after restart
        // anchors without simulating
        let steps = sim.advance(1000.0);
        assert_eq!(steps, 0);
        assert_eq!(sim.actor.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_presentation_sync_runs_once_per_callback() {
        let mut sim = make_sim();
        sim.advance(0.0);
        sim.advance(0.25);

        // After the callback the mesh reflects committed actor-driven state
        let spawn_x = sim.actor.position.x;
        let column = (spawn_x / (sim.water.width() / 149.0)).round() as usize;
        let top = sim.water.vertices[2 * column];
        let expected = sim.water.rest_level() + sim.water.samples[column].height_offset;
        assert!((top.position[1] - expected).abs() < 1e-4);
    }
}
