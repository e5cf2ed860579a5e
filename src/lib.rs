//! Bobber library - a deformable water surface coupled to a buoyant actor

pub mod actor;
pub mod buoyancy;
pub mod cli;
pub mod params;
pub mod rendering;
pub mod scheduler;
pub mod sim;
pub mod water;
