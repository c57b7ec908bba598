use std::f64::consts::TAU;

use crate::core::{Rng, Vec2};

/// Point on the annulus `[inner, inner + span)` around `center` with angle and
/// distance each drawn uniformly (angle first).
#[inline]
pub fn polar_spawn(center: Vec2, inner: f64, span: f64, rng: &mut Rng) -> Vec2 {
    let angle = rng.range(0.0, TAU);
    let distance = rng.range(inner, span);
    center + Vec2::from_angle(angle) * distance
}
