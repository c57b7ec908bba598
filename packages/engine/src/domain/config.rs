//! Tunables for the black hole field.
//!
//! Every value has a default matching the landing page, so an empty JSON
//! object (`{}`) is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::core::Rgba;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CosmosConfig {
    pub layout: LayoutConfig,
    pub field: FieldConfig,
    pub render: RenderConfig,
}

/// Viewport breakpoints
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Widths strictly above this push the focal point right
    pub bias_breakpoint: f64,
    /// Horizontal position of the focal point on wide layouts, as a fraction of width
    pub wide_center_bias: f64,
    /// Widths strictly above this get the dense particle field
    pub density_breakpoint: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            bias_breakpoint: 1024.0,
            wide_center_bias: 0.75,
            density_breakpoint: 768.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub wide_count: usize,
    pub narrow_count: usize,
    /// Respawn ring starts this far from the center
    pub spawn_inner_radius: f64,
    /// Event horizon: particles closer than this are recycled
    pub horizon_radius: f64,
    pub pull_strength: f64,
    /// Added to dist² before dividing
    pub pull_softening: f64,
    pub pull_gain: f64,
    pub max_size: f64,
    pub min_angular_speed: f64,
    pub angular_speed_span: f64,
    /// Fixed seed for reproducible fields; entropy-seeded when absent
    pub seed: Option<u32>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            wide_count: 1500,
            narrow_count: 600,
            spawn_inner_radius: 100.0,
            horizon_radius: 50.0,
            pull_strength: 800.0,
            pull_softening: 0.1,
            pull_gain: 2.0,
            max_size: 1.5,
            min_angular_speed: 0.005,
            angular_speed_span: 0.01,
            seed: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub color: Rgba,
    pub weight: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Overlay painted instead of a clear; its alpha sets the trail length
    pub trail: Rgba,
    pub horizon_radius: f64,
    pub horizon: Rgba,
    pub glow_outer_radius: f64,
    pub glow_inner: Rgba,
    pub glow_outer: Rgba,
    pub palette: Vec<PaletteEntry>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            trail: Rgba::rgba(3, 3, 4, 0.2),
            horizon_radius: 60.0,
            horizon: Rgba::BLACK,
            glow_outer_radius: 120.0,
            glow_inner: Rgba::rgba(59, 130, 246, 0.8),
            glow_outer: Rgba::TRANSPARENT,
            palette: vec![
                // bright accent
                PaletteEntry { color: Rgba::WHITE, weight: 0.1 },
                // secondary accent
                PaletteEntry { color: Rgba::rgb(0x3b, 0x82, 0xf6), weight: 0.3 },
                // primary accent
                PaletteEntry { color: Rgba::rgb(0x06, 0xb6, 0xd4), weight: 0.6 },
            ],
        }
    }
}

impl CosmosConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: CosmosConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let layout = &self.layout;
        if !(layout.bias_breakpoint >= 0.0 && layout.density_breakpoint >= 0.0) {
            return Err("layout breakpoints must be non-negative".to_string());
        }
        if !(0.0..=1.0).contains(&layout.wide_center_bias) {
            return Err(format!(
                "wide_center_bias must be within [0, 1], got {}",
                layout.wide_center_bias
            ));
        }

        let field = &self.field;
        if field.wide_count == 0 || field.narrow_count == 0 {
            return Err("particle counts must be positive".to_string());
        }
        if !(field.horizon_radius >= 0.0) {
            return Err("horizon_radius must be non-negative".to_string());
        }
        if !(field.spawn_inner_radius > field.horizon_radius) {
            return Err(format!(
                "spawn_inner_radius ({}) must exceed horizon_radius ({})",
                field.spawn_inner_radius, field.horizon_radius
            ));
        }
        if !(field.pull_softening > 0.0) {
            return Err("pull_softening must be positive".to_string());
        }
        if !(field.max_size > 0.0) {
            return Err("max_size must be positive".to_string());
        }
        if !(field.min_angular_speed >= 0.0 && field.angular_speed_span >= 0.0) {
            return Err("angular speed range must be non-negative".to_string());
        }

        let render = &self.render;
        if !(render.horizon_radius >= 0.0 && render.glow_outer_radius >= render.horizon_radius) {
            return Err(format!(
                "glow_outer_radius ({}) must be at least horizon_radius ({})",
                render.glow_outer_radius, render.horizon_radius
            ));
        }
        if render.palette.is_empty() {
            return Err("palette must have at least one entry".to_string());
        }
        if let Some(bad) = render.palette.iter().find(|e| !(e.weight > 0.0) || !e.weight.is_finite()) {
            return Err(format!("palette weight must be positive, got {} for {}", bad.weight, bad.color));
        }
        Ok(())
    }
}
