//! Water surface physics parameters.

/// Wave field physics parameters
#[derive(Debug, Clone)]
pub struct WaterPhysics {
    /// Number of surface joints (columns); fixed for the field's lifetime
    pub num_joints: usize,

    /// Horizontal extent of the surface (points)
    pub width: f32,

    /// Rest height of the surface above the pool floor (points)
    pub surface_height: f32,

    /// Spring stiffness pulling each joint back toward rest (1/s^2)
    pub spring_constant: f32,

    /// Velocity damping coefficient (1/s); oscillation dies out in a few
    /// multiples of 2/damping seconds
    pub damping: f32,

    /// Neighbor velocity-diffusion coefficient (1/s)
    /// The propagation pass stays stable while spread * dt <= 0.5
    pub spread: f32,

    /// Defensive backstop on |height offset| (points)
    pub max_offset: f32,

    /// Defensive backstop on |joint velocity| (points/s)
    pub max_velocity: f32,
}

impl Default for WaterPhysics {
    fn default() -> Self {
        Self {
            num_joints: 150,
            width: 1280.0,
            surface_height: 288.0, // scene height / 2.5 for the default 720-point scene
            spring_constant: 120.0,
            damping: 3.0,
            spread: 40.0, // spread * (1/500) = 0.08, well inside the stable range
            max_offset: 400.0,
            max_velocity: 4000.0,
        }
    }
}

impl WaterPhysics {
    /// Fail fast on configurations that would poison the spring update.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_joints < 2 {
            return Err(format!(
                "Water needs at least 2 joints, got {}",
                self.num_joints
            ));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(format!("Water width must be positive, got {}", self.width));
        }
        if !self.surface_height.is_finite() || self.surface_height <= 0.0 {
            return Err(format!(
                "Surface height must be positive, got {}",
                self.surface_height
            ));
        }
        for (name, value) in [
            ("spring_constant", self.spring_constant),
            ("damping", self.damping),
            ("spread", self.spread),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                ));
            }
        }
        for (name, value) in [
            ("max_offset", self.max_offset),
            ("max_velocity", self.max_velocity),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be positive, got {}", name, value));
            }
        }
        Ok(())
    }
}
