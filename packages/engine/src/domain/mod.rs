//! Domain model: viewport geometry, particles, the field that owns them and
//! the configuration they are tuned by.

pub mod config;
pub mod field;
pub mod palette;
pub mod particle;
pub mod viewport;

pub use config::CosmosConfig;
pub use field::ParticleField;
pub use palette::Palette;
pub use particle::{FieldContext, Particle, UpdateOutcome};
pub use viewport::ViewportFrame;
