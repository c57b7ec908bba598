use crate::core::{Rgba, Vec2};

/// Two-stop radial ramp between concentric circles, painted over the disk of
/// `outer_radius`. Inside `inner_radius` the inner colour is padded, as a
/// canvas `createRadialGradient` does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub inner: Rgba,
    pub outer: Rgba,
}

impl RadialGradient {
    /// Colour at `distance` from the center
    pub fn color_at(&self, distance: f64) -> Rgba {
        let span = self.outer_radius - self.inner_radius;
        let t = if span > 0.0 {
            (distance - self.inner_radius) / span
        } else if distance < self.inner_radius {
            0.0
        } else {
            1.0
        };
        self.inner.lerp(self.outer, t as f32)
    }
}

/// Drawing primitives the field needs from a host surface.
///
/// Surfaces composite source-over onto an opaque backing store, so painting a
/// translucent full-surface rect fades the previous frame instead of
/// clearing it.
pub trait Surface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba);

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient);

    /// Match a new viewport size; surfaces without a backing store ignore it
    fn resize(&mut self, _width: u32, _height: u32) {}
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        (**self).fill_rect(x, y, width, height, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        (**self).fill_circle(center, radius, color);
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient) {
        (**self).fill_radial_gradient(gradient);
    }

    fn resize(&mut self, width: u32, height: u32) {
        (**self).resize(width, height);
    }
}
