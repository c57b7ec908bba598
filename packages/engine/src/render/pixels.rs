//! Software rasterizer.
//!
//! Pixels are `0xAABBGGRR` (little-endian RGBA) so JS can wrap the buffer in
//! a `Uint8ClampedArray` and hand it to `putImageData` without swizzling.
//! The backing store is opaque: alpha is always 255 after any paint.

use crate::core::{Rgba, Vec2};

use super::surface::{RadialGradient, Surface};

const OPAQUE_BLACK: u32 = 0xFF00_0000;

pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![OPAQUE_BLACK; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Get pointer to the pixel buffer (for JS `ImageData`)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn pixels_len_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<u32>()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Half-open pixel span whose centers fall inside `[lo, hi)`
    #[inline]
    fn span(lo: f64, hi: f64, limit: u32) -> (u32, u32) {
        let start = (lo - 0.5).ceil().max(0.0);
        let end = (hi - 0.5).ceil().min(limit as f64);
        if !(end > start) {
            return (0, 0);
        }
        (start as u32, end as u32)
    }

    #[inline(always)]
    fn blend(&mut self, idx: usize, color: Rgba, coverage: f32) {
        let alpha = (color.a * coverage).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let src = color.with_alpha(1.0).to_abgr();
        if alpha >= 1.0 {
            self.pixels[idx] = src;
            return;
        }
        let dst = self.pixels[idx];
        let mix = |shift: u32| -> u32 {
            let s = ((src >> shift) & 0xFF) as f32;
            let d = ((dst >> shift) & 0xFF) as f32;
            ((s * alpha + d * (1.0 - alpha)).round() as u32).min(255) << shift
        };
        self.pixels[idx] = OPAQUE_BLACK | mix(16) | mix(8) | mix(0);
    }
}

impl Surface for PixelSurface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        let (x0, x1) = Self::span(x, x + width, self.width);
        let (y0, y1) = Self::span(y, y + height, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                let idx = self.index(px, py);
                self.blend(idx, color, 1.0);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        if !(radius > 0.0) {
            return;
        }

        // Sub-pixel motes: one pixel weighted by covered area
        if radius < 1.0 {
            let (px, py) = (center.x.floor(), center.y.floor());
            if px < 0.0 || py < 0.0 || px >= self.width as f64 || py >= self.height as f64 {
                return;
            }
            let coverage = (std::f64::consts::PI * radius * radius).min(1.0) as f32;
            let idx = self.index(px as u32, py as u32);
            self.blend(idx, color, coverage);
            return;
        }

        let r_sq = radius * radius;
        let (x0, x1) = Self::span(center.x - radius, center.x + radius, self.width);
        let (y0, y1) = Self::span(center.y - radius, center.y + radius, self.height);
        for py in y0..y1 {
            let dy = py as f64 + 0.5 - center.y;
            for px in x0..x1 {
                let dx = px as f64 + 0.5 - center.x;
                if dx * dx + dy * dy <= r_sq {
                    let idx = self.index(px, py);
                    self.blend(idx, color, 1.0);
                }
            }
        }
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient) {
        let radius = gradient.outer_radius;
        if !(radius > 0.0) {
            return;
        }
        let c = gradient.center;
        let (x0, x1) = Self::span(c.x - radius, c.x + radius, self.width);
        let (y0, y1) = Self::span(c.y - radius, c.y + radius, self.height);
        for py in y0..y1 {
            let dy = py as f64 + 0.5 - c.y;
            for px in x0..x1 {
                let dx = px as f64 + 0.5 - c.x;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist <= radius {
                    let idx = self.index(px, py);
                    self.blend(idx, gradient.color_at(dist), 1.0);
                }
            }
        }
    }

    /// Reallocate and clear to opaque black
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize((width as usize) * (height as usize), OPAQUE_BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(pixel: u32, shift: u32) -> u32 {
        (pixel >> shift) & 0xFF
    }

    #[test]
    fn starts_opaque_black() {
        let surface = PixelSurface::new(4, 3);
        assert_eq!(surface.pixels().len(), 12);
        assert!(surface.pixels().iter().all(|&p| p == OPAQUE_BLACK));
        assert_eq!(surface.pixels_len_bytes(), 48);
    }

    #[test]
    fn translucent_overlay_fades_towards_trail_color() {
        let mut surface = PixelSurface::new(2, 2);
        surface.fill_rect(0.0, 0.0, 2.0, 2.0, Rgba::WHITE);
        let trail = Rgba::rgba(3, 3, 4, 0.2);
        surface.fill_rect(0.0, 0.0, 2.0, 2.0, trail);
        let once = channel(surface.pixel(0, 0).unwrap(), 0);
        surface.fill_rect(0.0, 0.0, 2.0, 2.0, trail);
        let twice = channel(surface.pixel(0, 0).unwrap(), 0);
        assert!(once < 255 && twice < once && twice > 3);
        assert_eq!(surface.pixel(1, 1).unwrap() >> 24, 0xFF);
    }

    #[test]
    fn opaque_circle_covers_center_only() {
        let mut surface = PixelSurface::new(20, 20);
        surface.fill_circle(Vec2::new(10.0, 10.0), 3.0, Rgba::WHITE);
        assert_eq!(surface.pixel(10, 10), Some(0xFFFF_FFFF));
        assert_eq!(surface.pixel(0, 0), Some(OPAQUE_BLACK));
        assert_eq!(surface.pixel(19, 10), Some(OPAQUE_BLACK));
    }

    #[test]
    fn tiny_circle_is_dimmed_by_coverage() {
        let mut surface = PixelSurface::new(4, 4);
        surface.fill_circle(Vec2::new(1.5, 1.5), 0.3, Rgba::WHITE);
        let r = channel(surface.pixel(1, 1).unwrap(), 0);
        assert!(r > 0 && r < 255);
    }

    #[test]
    fn clipping_ignores_offscreen_shapes() {
        let mut surface = PixelSurface::new(8, 8);
        surface.fill_circle(Vec2::new(-50.0, -50.0), 5.0, Rgba::WHITE);
        surface.fill_rect(100.0, 100.0, 10.0, 10.0, Rgba::WHITE);
        surface.fill_circle(Vec2::new(-0.5, 3.0), 0.8, Rgba::WHITE);
        assert!(surface.pixels().iter().all(|&p| p == OPAQUE_BLACK));
    }

    #[test]
    fn gradient_pads_inner_color_and_fades_out() {
        let mut surface = PixelSurface::new(64, 64);
        let gradient = RadialGradient {
            center: Vec2::new(32.0, 32.0),
            inner_radius: 10.0,
            outer_radius: 30.0,
            inner: Rgba::rgb(0, 0, 255),
            outer: Rgba::TRANSPARENT,
        };
        surface.fill_radial_gradient(&gradient);
        let core = surface.pixel(32, 32).unwrap();
        assert_eq!(channel(core, 16), 255);
        let rim = surface.pixel(32 + 25, 32).unwrap();
        assert!(channel(rim, 16) < 128);
        assert_eq!(surface.pixel(0, 0), Some(OPAQUE_BLACK));
    }

    #[test]
    fn resize_reallocates() {
        let mut surface = PixelSurface::new(2, 2);
        surface.fill_rect(0.0, 0.0, 2.0, 2.0, Rgba::WHITE);
        surface.resize(3, 5);
        assert_eq!(surface.pixels().len(), 15);
        assert!(surface.pixels().iter().all(|&p| p == OPAQUE_BLACK));
    }
}
