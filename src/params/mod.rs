//! Parameter definitions with physical units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Physical units (points, seconds, etc.)
//! - Documented ranges and meanings
//! - Fail-fast validation at construction

mod actor;
mod coupling;
mod render;
mod scene;
mod water;

// Re-export all types
pub use actor::ActorParams;
pub use coupling::CouplingParams;
pub use render::RenderConfig;
pub use scene::SceneParams;
pub use water::WaterPhysics;
