//! Actor physics and splash-emission parameters.

/// Actor physics parameters
#[derive(Debug, Clone)]
pub struct ActorParams {
    /// Side length of the square actor (points)
    pub size: f32,

    /// Gravity (points/s^2, negative is down).
    /// -1470 = 9.8 m/s^2 at 150 points per metre.
    pub gravity: f32,

    /// Spawn x position (points)
    pub spawn_x: f32,

    /// Spawn height above the water's rest level (points)
    pub spawn_height_above_surface: f32,

    /// Vertical velocity multiplier applied by a submerged dive
    pub dive_vertical_scale: f32,

    /// Upward launch velocity per point of depth below rest (1/s)
    pub jump_gain: f32,

    /// Splash force per unit of downward velocity when breaking in
    pub entry_splash_coefficient: f32,

    /// Splash force per unit of velocity when breaking out; lower than
    /// entry because the buoyancy spring puts extra velocity on exits
    pub exit_splash_coefficient: f32,

    /// Horizontal span of a crossing splash (points)
    pub splash_width: f32,
}

impl Default for ActorParams {
    fn default() -> Self {
        Self {
            size: 50.0,
            gravity: -1470.0,
            spawn_x: 150.0,
            spawn_height_above_surface: 50.0,
            dive_vertical_scale: 0.5,
            jump_gain: 5.0,
            entry_splash_coefficient: 0.125,
            exit_splash_coefficient: 0.05,
            splash_width: 20.0,
        }
    }
}

impl ActorParams {
    pub fn validate(&self) -> Result<(), String> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(format!("Actor size must be positive, got {}", self.size));
        }
        for (name, value) in [
            ("gravity", self.gravity),
            ("spawn_x", self.spawn_x),
            ("spawn_height_above_surface", self.spawn_height_above_surface),
            ("dive_vertical_scale", self.dive_vertical_scale),
            ("jump_gain", self.jump_gain),
            ("entry_splash_coefficient", self.entry_splash_coefficient),
            ("exit_splash_coefficient", self.exit_splash_coefficient),
        ] {
            if !value.is_finite() {
                return Err(format!("{} must be finite, got {}", name, value));
            }
        }
        if !self.splash_width.is_finite() || self.splash_width < 0.0 {
            return Err(format!(
                "splash_width must be finite and non-negative, got {}",
                self.splash_width
            ));
        }
        Ok(())
    }
}
