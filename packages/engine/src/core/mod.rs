//! Core primitives shared by every layer: vector math, the seedable random
//! source and colours.

pub mod color;
pub mod random;
pub mod vec2;

pub use color::Rgba;
pub use random::Rng;
pub use vec2::Vec2;
