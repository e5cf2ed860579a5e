//! Buoyancy coupling parameters.

/// Buoyancy coupling parameters
#[derive(Debug, Clone)]
pub struct CouplingParams {
    /// Drag on the actor's existing velocity before it is compared to the
    /// target velocity (dimensionless). Increase to make the water thicker.
    pub viscosity: f32,

    /// Fraction of the distance to equilibrium converted into displacement
    /// each step (dimensionless). Increase to float up faster.
    pub buoyancy_gain: f32,

    /// Fraction of the relative velocity applied per step (dimensionless).
    /// The leaky-integrator gain; keep small relative to 1/viscosity.
    pub rate: f32,

    /// Divisor of the surface height that sets how far above true rest the
    /// actor settles. Smaller divisor floats the actor higher.
    pub settle_divisor: f32,

    /// Reference frame duration used as a unit-conversion scalar when
    /// turning displacement into a target velocity (seconds). Not a step
    /// size; changing it rescales the coupling strength.
    pub reference_frame_dt: f32,
}

impl Default for CouplingParams {
    fn default() -> Self {
        Self {
            viscosity: 4.0,
            buoyancy_gain: 0.4,
            rate: 0.01,
            settle_divisor: 7.0,
            reference_frame_dt: 1.0 / 60.0,
        }
    }
}

impl CouplingParams {
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("viscosity", self.viscosity),
            ("buoyancy_gain", self.buoyancy_gain),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                ));
            }
        }
        if !self.rate.is_finite() || self.rate <= 0.0 || self.rate > 1.0 {
            return Err(format!("rate must be in (0, 1], got {}", self.rate));
        }
        if !self.settle_divisor.is_finite() || self.settle_divisor <= 0.0 {
            return Err(format!(
                "settle_divisor must be positive, got {}",
                self.settle_divisor
            ));
        }
        if !self.reference_frame_dt.is_finite() || self.reference_frame_dt <= 0.0 {
            return Err(format!(
                "reference_frame_dt must be positive, got {}",
                self.reference_frame_dt
            ));
        }
        Ok(())
    }
}
