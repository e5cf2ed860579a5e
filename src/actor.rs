//! Actor kinematics, scene clamping, and surface-crossing detection.

use glam::Vec2;

use crate::params::ActorParams;

/// Which way the actor broke the surface this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    Entry,
    Exit,
}

/// Actor kinematic state. The buoyancy coupler mutates the velocity only;
/// everything else is owned by the scene tick.
#[derive(Debug, Clone)]
pub struct ActorState {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Derived flag maintained by `check_crossing`; the buoyancy gate and
    /// the dive/jump actions key off it
    pub above_surface: bool,
    pub half_size: f32,
}

impl ActorState {
    pub fn spawn(params: &ActorParams, rest_level: f32) -> Self {
        Self {
            position: Vec2::new(
                params.spawn_x,
                rest_level + params.spawn_height_above_surface,
            ),
            velocity: Vec2::ZERO,
            above_surface: true,
            half_size: params.size / 2.0,
        }
    }

    /// Gravity plus symplectic Euler integration for one tick.
    pub fn integrate(&mut self, dt: f32, gravity: f32) {
        self.velocity.y += gravity * dt;
        self.position += self.velocity * dt;
    }

    /// Keep the actor inside the scene edge loop, zeroing the velocity
    /// component normal to any wall it hits.
    pub fn clamp_to_scene(&mut self, scene_width: f32, scene_height: f32) {
        let min_x = self.half_size;
        let max_x = scene_width - self.half_size;
        if self.position.x < min_x {
            self.position.x = min_x;
            self.velocity.x = 0.0;
        } else if self.position.x > max_x {
            self.position.x = max_x;
            self.velocity.x = 0.0;
        }

        let min_y = self.half_size;
        let max_y = scene_height - self.half_size;
        if self.position.y < min_y {
            self.position.y = min_y;
            self.velocity.y = 0.0;
        } else if self.position.y > max_y {
            self.position.y = max_y;
            self.velocity.y = 0.0;
        }
    }

    /// Edge-triggered comparison against the water's rest level. Fires once
    /// per traversal; repeated ties at the exact boundary never re-fire.
    pub fn check_crossing(&mut self, rest_level: f32) -> Option<Crossing> {
        if self.above_surface && self.position.y <= rest_level {
            self.above_surface = false;
            Some(Crossing::Entry)
        } else if !self.above_surface && self.position.y > rest_level {
            self.above_surface = true;
            Some(Crossing::Exit)
        } else {
            None
        }
    }

    /// Submerged dive assist: kill horizontal motion, scale vertical.
    pub fn dive(&mut self, vertical_scale: f32) {
        self.velocity = Vec2::new(0.0, self.velocity.y * vertical_scale);
    }

    /// Launch straight up with velocity proportional to depth below rest.
    pub fn jump(&mut self, rest_level: f32, gain: f32) {
        self.velocity = Vec2::new(0.0, gain * (rest_level - self.position.y));
    }
}
