//! Page effects that sit beside the particle field.
//!
//! Each one is a small state machine with no DOM access; the page wires
//! events in and applies the returned text/style.

pub mod decrypt;
pub mod reveal;
pub mod signup;
pub mod tilt;

pub use decrypt::DecryptText;
pub use reveal::RevealTracker;
pub use signup::{ButtonState, SignupForm, SignupRequest, SubmitOutcome};
pub use tilt::TiltTransform;
