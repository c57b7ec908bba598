use crate::core::Vec2;
use crate::domain::config::FieldConfig;

/// Offsets shorter than this have no usable direction towards the center
pub const MIN_PULL_DISTANCE: f64 = f64::EPSILON;

/// Move `position` towards `center` by a softened inverse-square pull.
///
/// Returns `None` when the particle sits on the center itself; callers
/// recycle the particle instead of dividing by a zero distance.
#[inline(always)]
pub fn apply_pull(position: Vec2, center: Vec2, field: &FieldConfig) -> Option<Vec2> {
    let offset = position - center;
    let dist_sq = offset.length_squared();
    let dist = dist_sq.sqrt();
    if !(dist > MIN_PULL_DISTANCE) {
        return None;
    }

    let pull = field.pull_strength / (dist_sq + field.pull_softening);
    Some(position - offset * (pull * field.pull_gain / dist))
}

/// Revolve `position` about `center` by `angle` radians
#[inline(always)]
pub fn apply_swirl(position: Vec2, center: Vec2, angle: f64) -> Vec2 {
    center + (position - center).rotate(angle)
}
