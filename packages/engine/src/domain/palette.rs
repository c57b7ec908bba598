use crate::core::{Rgba, Rng};
use crate::domain::config::PaletteEntry;

/// Index into a [`Palette`]
pub type ColorId = u8;

/// Weighted discrete distribution over particle colours, sampled through a
/// cumulative-weight table.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<Rgba>,
    cumulative: Vec<f64>,
}

impl Palette {
    /// Entries must be non-empty with positive weights (`CosmosConfig::validate`
    /// guarantees both); at most 256 entries are kept.
    pub fn from_entries(entries: &[PaletteEntry]) -> Self {
        let mut colors = Vec::with_capacity(entries.len());
        let mut cumulative = Vec::with_capacity(entries.len());
        let mut total = 0.0;
        for entry in entries.iter().take(ColorId::MAX as usize + 1) {
            total += entry.weight.max(0.0);
            colors.push(entry.color);
            cumulative.push(total);
        }
        if colors.is_empty() {
            colors.push(Rgba::WHITE);
            cumulative.push(1.0);
        }
        Self { colors, cumulative }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color(&self, id: ColorId) -> Rgba {
        self.colors
            .get(id as usize)
            .copied()
            .unwrap_or(Rgba::WHITE)
    }

    pub fn sample(&self, rng: &mut Rng) -> ColorId {
        let total = self.cumulative.last().copied().unwrap_or(0.0);
        let target = rng.next_f64() * total;
        let idx = self.cumulative.partition_point(|&c| c <= target);
        idx.min(self.colors.len() - 1) as ColorId
    }
}
