//! Water surface mesh: a row of damped springs with neighbor diffusion.

use bytemuck::{Pod, Zeroable};

use crate::params::WaterPhysics;

/// Vertex data for the water fill mesh (position + shade factor)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    /// 0 at the pool floor, 1 at the surface; drives the fill gradient
    pub shade: f32,
}

/// One surface column: displacement from rest plus vertical velocity
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WaveSample {
    pub height_offset: f32,
    pub velocity: f32,
}

/// Deformable water surface: a fixed-count row of spring-coupled columns.
///
/// Columns relax toward rest under a spring-damper force and exchange
/// velocity with their neighbors to carry waves sideways. The only external
/// forcing is `splash_at`, an instantaneous velocity impulse.
pub struct WaterField {
    pub samples: Vec<WaveSample>,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Bulk vertical position of the pool floor (tidal drift hook; 0 by default)
    pub position_y: f32,
    physics: WaterPhysics,
    spacing: f32,
    velocity_snapshot: Vec<f32>,
}

impl WaterField {
    pub fn new(physics: WaterPhysics) -> Result<Self, String> {
        physics.validate()?;

        let spacing = physics.width / (physics.num_joints - 1) as f32;
        let samples = vec![WaveSample::default(); physics.num_joints];
        let vertices = vec![
            Vertex {
                position: [0.0, 0.0],
                shade: 0.0,
            };
            physics.num_joints * 2
        ];

        // Two triangles per segment between neighboring columns; vertex 2i is
        // the surface point of column i, 2i+1 its floor point.
        let mut indices = Vec::with_capacity((physics.num_joints - 1) * 6);
        for i in 0..physics.num_joints - 1 {
            let top_left = (2 * i) as u32;
            let bottom_left = top_left + 1;
            let top_right = top_left + 2;
            let bottom_right = top_left + 3;
            indices.extend_from_slice(&[
                top_left,
                bottom_left,
                top_right,
                top_right,
                bottom_left,
                bottom_right,
            ]);
        }

        let mut field = Self {
            samples,
            vertices,
            indices,
            position_y: 0.0,
            spacing,
            velocity_snapshot: Vec::with_capacity(physics.num_joints),
            physics,
        };
        field.rebuild_vertices();
        Ok(field)
    }

    pub fn physics(&self) -> &WaterPhysics {
        &self.physics
    }

    /// Total horizontal extent of the surface.
    pub fn width(&self) -> f32 {
        self.physics.width
    }

    /// Rest height of the surface above the pool floor.
    pub fn surface_height(&self) -> f32 {
        self.physics.surface_height
    }

    /// Vertical level of the undisturbed surface. Coupling and crossing
    /// detection read this, not the per-column height.
    pub fn rest_level(&self) -> f32 {
        self.position_y + self.physics.surface_height
    }

    /// One integration step: spring-damper update per column, then symmetric
    /// velocity diffusion against a snapshot of the pre-exchange velocities.
    /// A zero-duration step is an exact no-op.
    pub fn update(&mut self, dt: f32) {
        let spring = self.physics.spring_constant;
        let damping = self.physics.damping;
        for sample in &mut self.samples {
            let accel = -spring * sample.height_offset - damping * sample.velocity;
            sample.velocity += accel * dt;
            sample.height_offset += sample.velocity * dt;
        }

        // Each column trades a fraction of the velocity difference with both
        // neighbors. Working from a snapshot keeps the exchange symmetric and
        // order-independent, so the pass cannot amplify total energy.
        let transfer = self.physics.spread * dt;
        self.velocity_snapshot.clear();
        self.velocity_snapshot
            .extend(self.samples.iter().map(|s| s.velocity));
        let n = self.samples.len();
        for i in 0..n {
            let v = self.velocity_snapshot[i];
            let mut diff = 0.0;
            if i > 0 {
                diff += self.velocity_snapshot[i - 1] - v;
            }
            if i + 1 < n {
                diff += self.velocity_snapshot[i + 1] - v;
            }
            self.samples[i].velocity += transfer * diff;
        }

        self.clamp_runaway();
    }

    /// Inject an instantaneous velocity impulse centered on `x`, spanning
    /// roughly `width` points with linear falloff toward the edges of the
    /// span. Out-of-range `x` clamps to the nearest column.
    pub fn splash_at(&mut self, x: f32, force: f32, width: f32) {
        let n = self.samples.len() as isize;
        let x = x.clamp(0.0, self.physics.width);
        let center = ((x / self.spacing).round() as isize).min(n - 1);
        let half_span = (0.5 * width.max(0.0) / self.spacing).round() as isize;

        let lo = (center - half_span).max(0);
        let hi = (center + half_span).min(n - 1);
        for i in lo..=hi {
            let falloff = 1.0 - (i - center).abs() as f32 / (half_span + 1) as f32;
            self.samples[i as usize].velocity += force * falloff;
        }
    }

    /// Interpolated surface height at `x`, clamped to the field extent.
    /// Presentation/query only; coupling reads `rest_level`.
    pub fn height_at(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, self.physics.width);
        let t = x / self.spacing;
        let i = (t.floor() as usize).min(self.samples.len() - 2);
        let frac = t - i as f32;
        let offset = self.samples[i].height_offset * (1.0 - frac)
            + self.samples[i + 1].height_offset * frac;
        self.rest_level() + offset
    }

    /// Return every column to rest (scene restart).
    pub fn reset(&mut self) {
        for sample in &mut self.samples {
            *sample = WaveSample::default();
        }
        self.rebuild_vertices();
    }

    /// Rebuild the presentation mesh from committed sample state. Run once
    /// per frame callback, after all ticks.
    pub fn rebuild_vertices(&mut self) {
        let rest = self.rest_level();
        let floor = self.position_y;
        let spacing = self.spacing;
        for (i, sample) in self.samples.iter().enumerate() {
            let x = i as f32 * spacing;
            self.vertices[2 * i] = Vertex {
                position: [x, rest + sample.height_offset],
                shade: 1.0,
            };
            self.vertices[2 * i + 1] = Vertex {
                position: [x, floor],
                shade: 0.0,
            };
        }
    }

    // Backstop against runaway oscillation from hostile tunings: visually odd
    // water beats a crash.
    fn clamp_runaway(&mut self) {
        let max_offset = self.physics.max_offset;
        let max_velocity = self.physics.max_velocity;
        let mut clamped = 0usize;
        for sample in &mut self.samples {
            if sample.height_offset.abs() > max_offset {
                sample.height_offset = sample.height_offset.clamp(-max_offset, max_offset);
                clamped += 1;
            }
            if sample.velocity.abs() > max_velocity {
                sample.velocity = sample.velocity.clamp(-max_velocity, max_velocity);
                clamped += 1;
            }
        }
        if clamped > 0 {
            log::warn!(
                "water surface left its stable range; clamped {} sample values",
                clamped
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 500.0;

    fn test_physics() -> WaterPhysics {
        WaterPhysics {
            num_joints: 150,
            width: 600.0,
            surface_height: 235.0,
            ..WaterPhysics::default()
        }
    }

    #[test]
    fn test_rejects_bad_config() {
        let mut p = WaterPhysics::default();
        p.num_joints = 0;
        assert!(WaterField::new(p).is_err());

        let mut p = WaterPhysics::default();
        p.spring_constant = f32::NAN;
        assert!(WaterField::new(p).is_err());

        let mut p = WaterPhysics::default();
        p.width = -5.0;
        assert!(WaterField::new(p).is_err());
    }

    #[test]
    fn test_splash_is_local() {
        let mut field = WaterField::new(test_physics()).unwrap();
        field.splash_at(75.0, -10.0, 20.0);
        field.update(DT);

        let spacing: f32 = 600.0 / 149.0;
        let center = (75.0 / spacing).round() as usize;
        assert!(field.samples[center].velocity < 0.0);

        // Columns far from the impulse are untouched, exactly
        assert_eq!(field.samples[0].velocity, 0.0);
        assert_eq!(field.samples[0].height_offset, 0.0);
        assert_eq!(field.samples[149].velocity, 0.0);
        assert_eq!(field.samples[149].height_offset, 0.0);
    }

    #[test]
    fn test_out_of_range_splash_clamps() {
        let mut field = WaterField::new(test_physics()).unwrap();
        field.splash_at(-50.0, -10.0, 20.0);
        assert!(field.samples[0].velocity < 0.0);

        let mut field = WaterField::new(test_physics()).unwrap();
        field.splash_at(10_000.0, -10.0, 20.0);
        assert!(field.samples.last().unwrap().velocity < 0.0);
    }

    #[test]
    fn test_disturbance_decays_to_rest() {
        let mut field = WaterField::new(test_physics()).unwrap();
        field.splash_at(300.0, -40.0, 30.0);

        // 10 simulated seconds
        for _ in 0..5000 {
            field.update(DT);
        }
        for (i, sample) in field.samples.iter().enumerate() {
            assert!(
                sample.height_offset.abs() < 0.05,
                "column {} still displaced by {}",
                i,
                sample.height_offset
            );
            assert!(sample.velocity.abs() < 0.05);
        }
    }

    #[test]
    fn test_propagation_does_not_amplify() {
        let mut p = test_physics();
        p.spring_constant = 0.0;
        p.damping = 0.0;
        let mut field = WaterField::new(p).unwrap();
        field.samples[10].velocity = 8.0;
        field.samples[11].velocity = -3.0;
        field.samples[80].velocity = 5.0;

        let before: f32 = field.samples.iter().map(|s| s.velocity.abs()).sum();
        field.update(DT);
        let after: f32 = field.samples.iter().map(|s| s.velocity.abs()).sum();
        assert!(after <= before + 1e-4, "{} > {}", after, before);
    }

    #[test]
    fn test_zero_duration_tick_is_noop() {
        let mut field = WaterField::new(test_physics()).unwrap();
        field.splash_at(100.0, -10.0, 20.0);
        field.update(DT);

        let before = field.samples.clone();
        field.update(0.0);
        assert_eq!(field.samples, before);
    }

    #[test]
    fn test_height_query_interpolates_and_clamps() {
        let mut field = WaterField::new(test_physics()).unwrap();
        let spacing: f32 = 600.0 / 149.0;
        field.samples[10].height_offset = 4.0;
        field.samples[11].height_offset = 8.0;

        let rest = field.rest_level();
        let mid = field.height_at(10.5 * spacing);
        assert!((mid - (rest + 6.0)).abs() < 1e-3);

        // Out-of-range queries clamp to the edge columns
        assert_eq!(field.height_at(-100.0), rest);
        assert_eq!(field.height_at(9_999.0), rest);
    }

    #[test]
    fn test_runaway_is_clamped() {
        let mut field = WaterField::new(test_physics()).unwrap();
        let max_offset = field.physics().max_offset;
        let max_velocity = field.physics().max_velocity;

        field.samples[5].velocity = 1.0e9;
        field.update(DT);
        for sample in &field.samples {
            assert!(sample.velocity.abs() <= max_velocity);
            assert!(sample.height_offset.abs() <= max_offset);
        }
    }

    #[test]
    fn test_vertices_follow_surface() {
        let mut field = WaterField::new(test_physics()).unwrap();
        assert_eq!(field.vertices.len(), 2 * 150);

        field.samples[3].height_offset = 12.0;
        field.rebuild_vertices();

        let top = field.vertices[6];
        let bottom = field.vertices[7];
        assert!((top.position[1] - (field.rest_level() + 12.0)).abs() < 1e-4);
        assert_eq!(top.shade, 1.0);
        assert_eq!(bottom.position[1], 0.0);
        assert_eq!(bottom.shade, 0.0);
    }
}
