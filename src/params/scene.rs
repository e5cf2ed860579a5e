//! Scene geometry and simulation timing.

/// Scene geometry and fixed-step timing
#[derive(Debug, Clone)]
pub struct SceneParams {
    /// Scene width (points); the water spans the full width
    pub width: f32,

    /// Scene height (points)
    pub height: f32,

    /// Simulation step duration (seconds)
    pub fixed_step: f64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            fixed_step: 1.0 / 500.0,
        }
    }
}

impl SceneParams {
    /// Rest height of the water surface for this scene.
    pub fn surface_height(&self) -> f32 {
        self.height / 2.5
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(format!("Scene width must be positive, got {}", self.width));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(format!("Scene height must be positive, got {}", self.height));
        }
        if !self.fixed_step.is_finite() || self.fixed_step <= 0.0 {
            return Err(format!(
                "Fixed step must be a positive duration, got {}",
                self.fixed_step
            ));
        }
        Ok(())
    }
}
