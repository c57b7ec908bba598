use crate::core::Vec2;
use crate::domain::config::RenderConfig;
use crate::domain::viewport::ViewportFrame;

use super::surface::{RadialGradient, Surface};

/// Paint everything behind the particles: the trail overlay, the opaque
/// event horizon and the accretion glow around it.
pub fn paint_backdrop<S: Surface + ?Sized>(surface: &mut S, frame: &ViewportFrame, render: &RenderConfig) {
    surface.fill_rect(0.0, 0.0, frame.width(), frame.height(), render.trail);

    let center = frame.center();
    surface.fill_circle(center, render.horizon_radius, render.horizon);
    surface.fill_radial_gradient(&accretion_glow(center, render));
}

pub fn accretion_glow(center: Vec2, render: &RenderConfig) -> RadialGradient {
    RadialGradient {
        center,
        inner_radius: render.horizon_radius,
        outer_radius: render.glow_outer_radius,
        inner: render.glow_inner,
        outer: render.glow_outer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rgba;
    use crate::render::recording::{DrawCommand, RecordingSurface};

    #[test]
    fn backdrop_paints_overlay_then_horizon_then_glow() {
        let frame = ViewportFrame::recompute(1920.0, 1080.0);
        let render = RenderConfig::default();
        let mut surface = RecordingSurface::new();
        paint_backdrop(&mut surface, &frame, &render);

        let center = Vec2::new(1440.0, 540.0);
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Rect {
                    x: 0.0,
                    y: 0.0,
                    width: 1920.0,
                    height: 1080.0,
                    color: Rgba::rgba(3, 3, 4, 0.2),
                },
                DrawCommand::Circle { center, radius: 60.0, color: Rgba::BLACK },
                DrawCommand::Gradient(RadialGradient {
                    center,
                    inner_radius: 60.0,
                    outer_radius: 120.0,
                    inner: Rgba::rgba(59, 130, 246, 0.8),
                    outer: Rgba::TRANSPARENT,
                }),
            ]
        );
    }
}
