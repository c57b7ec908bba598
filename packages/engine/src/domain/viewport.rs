use crate::core::Vec2;
use crate::domain::config::LayoutConfig;

/// Smallest surface edge accepted; zero or negative sizes collapse to this
pub const MIN_SURFACE_EDGE: f64 = 1.0;

/// Drawing surface geometry plus the gravity focal point.
///
/// Frames are never mutated: a resize builds a new one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportFrame {
    width: f64,
    height: f64,
    center: Vec2,
}

impl ViewportFrame {
    /// Frame for a surface using the default breakpoints
    pub fn recompute(surface_width: f64, surface_height: f64) -> Self {
        Self::recompute_with(surface_width, surface_height, &LayoutConfig::default())
    }

    pub fn recompute_with(surface_width: f64, surface_height: f64, layout: &LayoutConfig) -> Self {
        let width = sanitize_edge(surface_width);
        let height = sanitize_edge(surface_height);
        let bias = if width > layout.bias_breakpoint {
            layout.wide_center_bias
        } else {
            0.5
        };
        Self {
            width,
            height,
            center: Vec2::new(width * bias, height * 0.5),
        }
    }

    pub fn width(&self) -> f64 { self.width }

    pub fn height(&self) -> f64 { self.height }

    pub fn center(&self) -> Vec2 { self.center }

    pub fn center_x(&self) -> f64 { self.center.x }

    pub fn center_y(&self) -> f64 { self.center.y }

    /// Longest edge, the span of the respawn ring
    pub fn max_extent(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Inclusive bounds test against [0, width] x [0, height]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// Whether this frame qualifies for the dense particle field
    pub fn is_dense(&self, layout: &LayoutConfig) -> bool {
        self.width > layout.density_breakpoint
    }
}

fn sanitize_edge(edge: f64) -> f64 {
    if edge.is_finite() {
        edge.max(MIN_SURFACE_EDGE)
    } else {
        MIN_SURFACE_EDGE
    }
}
