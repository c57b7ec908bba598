/// Viewports narrower than this get no tilt
pub const MIN_TILT_VIEWPORT: f64 = 1024.0;

/// Peak rotation factor in degrees
const MAX_TILT_DEG: f64 = 8.0;
const HOVER_SCALE: f64 = 1.02;

/// 3D hover transform for a card under the pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltTransform {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub scale: f64,
}

impl TiltTransform {
    /// Resting pose restored on pointer leave
    pub const REST: TiltTransform = TiltTransform {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        scale: 1.0,
    };

    /// Transform for a pointer at `(x, y)` relative to a `width` x `height`
    /// card, or `None` on narrow viewports (touch layouts keep cards flat)
    pub fn for_pointer(viewport_width: f64, x: f64, y: f64, width: f64, height: f64) -> Option<Self> {
        if viewport_width < MIN_TILT_VIEWPORT || !(width > 0.0) || !(height > 0.0) {
            return None;
        }
        Some(Self {
            rotate_x_deg: (y - height / 2.0) / height / 2.0 * -MAX_TILT_DEG,
            rotate_y_deg: (x - width / 2.0) / width / 2.0 * MAX_TILT_DEG,
            scale: HOVER_SCALE,
        })
    }

    /// Value for `element.style.transform`
    pub fn to_css(&self) -> String {
        if *self == Self::REST {
            return "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)".to_string();
        }
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) scale3d({s}, {s}, {s})",
            self.rotate_x_deg,
            self.rotate_y_deg,
            s = self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewport_disables_tilt() {
        assert!(TiltTransform::for_pointer(1023.0, 10.0, 10.0, 200.0, 100.0).is_none());
    }

    #[test]
    fn corners_tilt_towards_pointer() {
        let t = TiltTransform::for_pointer(1440.0, 0.0, 0.0, 200.0, 100.0).unwrap();
        assert_eq!(t.rotate_x_deg, 2.0);
        assert_eq!(t.rotate_y_deg, -2.0);
        let centered = TiltTransform::for_pointer(1440.0, 100.0, 50.0, 200.0, 100.0).unwrap();
        assert_eq!(centered.rotate_x_deg, 0.0);
        assert_eq!(centered.rotate_y_deg, 0.0);
        assert_eq!(
            t.to_css(),
            "perspective(1000px) rotateX(2deg) rotateY(-2deg) scale3d(1.02, 1.02, 1.02)"
        );
    }

    #[test]
    fn rest_pose_css() {
        assert_eq!(
            TiltTransform::REST.to_css(),
            "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)"
        );
    }
}
