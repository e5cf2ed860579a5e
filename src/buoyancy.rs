//! Buoyancy coupling pulling a submerged actor toward its equilibrium depth.

use glam::Vec2;

use crate::actor::ActorState;
use crate::params::CouplingParams;
use crate::water::WaterField;

/// Buoyancy coupler: a leaky integrator that nudges the actor's velocity a
/// small fraction toward the velocity that would reach equilibrium within
/// one reference frame, after viscous attenuation of the current velocity.
pub struct BuoyancyCoupler {
    params: CouplingParams,
}

impl BuoyancyCoupler {
    pub fn new(params: CouplingParams) -> Result<Self, String> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Vertical level at which the actor's bottom edge settles. Derived from
    /// the field's bulk position and rest height; the settle offset lifts the
    /// equilibrium so the actor bobs near the surface instead of mid-water.
    pub fn equilibrium_level(&self, water: &WaterField) -> f32 {
        let h = water.surface_height();
        let settle_offset = h / self.params.settle_divisor;
        water.position_y + (h - settle_offset) + h / 2.0
    }

    /// One coupling step. Applies only while underwater physics is enabled,
    /// the actor is flagged below the surface, and its x lies inside the
    /// field extent. The x-axis target velocity is zero, so horizontally the
    /// coupling reduces to viscous drag.
    pub fn apply(&self, actor: &mut ActorState, water: &WaterField, enabled: bool) {
        if !enabled || actor.above_surface {
            return;
        }
        if actor.position.x < 0.0 || actor.position.x > water.width() {
            return;
        }

        let p = &self.params;
        let actor_bottom = actor.position.y - actor.half_size;
        let disp = (self.equilibrium_level(water) - actor_bottom) * p.buoyancy_gain;
        let target_vel = Vec2::new(0.0, disp / p.reference_frame_dt);
        let rel_vel = target_vel - actor.velocity * p.viscosity;
        actor.velocity += rel_vel * p.rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::WaterPhysics;

    fn make_water() -> WaterField {
        WaterField::new(WaterPhysics::default()).unwrap()
    }

    fn make_coupler() -> BuoyancyCoupler {
        BuoyancyCoupler::new(CouplingParams::default()).unwrap()
    }

    fn submerged_actor(y: f32) -> ActorState {
        ActorState {
            position: Vec2::new(400.0, y),
            velocity: Vec2::ZERO,
            above_surface: false,
            half_size: 25.0,
        }
    }

    #[test]
    fn test_rejects_bad_params() {
        let mut p = CouplingParams::default();
        p.rate = 0.0;
        assert!(BuoyancyCoupler::new(p).is_err());

        let mut p = CouplingParams::default();
        p.viscosity = f32::INFINITY;
        assert!(BuoyancyCoupler::new(p).is_err());
    }

    #[test]
    fn test_gates_block_coupling() {
        let water = make_water();
        let coupler = make_coupler();

        let mut actor = submerged_actor(100.0);
        actor.above_surface = true;
        coupler.apply(&mut actor, &water, true);
        assert_eq!(actor.velocity, Vec2::ZERO);

        let mut actor = submerged_actor(100.0);
        coupler.apply(&mut actor, &water, false);
        assert_eq!(actor.velocity, Vec2::ZERO);

        let mut actor = submerged_actor(100.0);
        actor.position.x = -10.0;
        coupler.apply(&mut actor, &water, true);
        assert_eq!(actor.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_pushes_toward_equilibrium() {
        let water = make_water();
        let coupler = make_coupler();
        let eq = coupler.equilibrium_level(&water);

        // Bottom edge 60 points below equilibrium: pushed up
        let mut actor = submerged_actor(eq + 25.0 - 60.0);
        coupler.apply(&mut actor, &water, true);
        assert!(actor.velocity.y > 0.0);
        assert_eq!(actor.velocity.x, 0.0);

        // Bottom edge 60 points above equilibrium: pulled down
        let mut actor = submerged_actor(eq + 25.0 + 60.0);
        coupler.apply(&mut actor, &water, true);
        assert!(actor.velocity.y < 0.0);
    }

    #[test]
    fn test_viscous_drag_opposes_horizontal_motion() {
        let water = make_water();
        let coupler = make_coupler();
        let eq = coupler.equilibrium_level(&water);

        let mut actor = submerged_actor(eq + 25.0);
        actor.velocity.x = 10.0;
        coupler.apply(&mut actor, &water, true);
        assert!(actor.velocity.x < 10.0);
        assert!(actor.velocity.x > 0.0);
    }

    #[test]
    fn test_converges_to_equilibrium() {
        let water = make_water();
        let coupler = make_coupler();
        let eq = coupler.equilibrium_level(&water);
        let delta = 50.0;

        let mut actor = submerged_actor(eq + 25.0 + delta);
        let dt = 1.0f32 / 500.0;
        let mut max_overshoot = 0.0f32;
        for _ in 0..5000 {
            coupler.apply(&mut actor, &water, true);
            actor.position += actor.velocity * dt;
            let err = (actor.position.y - actor.half_size) - eq;
            if err < 0.0 {
                max_overshoot = max_overshoot.max(-err);
            }
        }

        let final_err = (actor.position.y - actor.half_size) - eq;
        assert!(final_err.abs() < 0.5, "did not settle: {}", final_err);
        assert!(max_overshoot < 5.0, "overshot by {}", max_overshoot);
    }
}
