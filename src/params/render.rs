//! Rendering configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Water fill color (RGBA, translucent so a submerged actor shows through)
    pub water_color: [f32; 4],

    /// Actor fill color (RGBA)
    pub actor_color: [f32; 4],

    /// Background clear color (RGB)
    pub clear_color: [f32; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            water_color: [0.0, 0.0, 1.0, 0.5],
            actor_color: [0.85, 0.15, 0.15, 1.0],
            clear_color: [0.02, 0.02, 0.05],
        }
    }
}
