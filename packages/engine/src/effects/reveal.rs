use std::collections::HashMap;

/// Share of an element that must be on screen before it fades in
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Scroll-reveal bookkeeping: each observed element flips to visible once
/// and never flips back.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    visible: HashMap<u32, bool>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, id: u32) {
        self.visible.entry(id).or_insert(false);
    }

    /// Feed an intersection entry; returns true exactly when the element
    /// should receive its `visible` class
    pub fn on_intersection(&mut self, id: u32, is_intersecting: bool, ratio: f64) -> bool {
        let Some(visible) = self.visible.get_mut(&id) else {
            return false;
        };
        if *visible || !is_intersecting || ratio < REVEAL_THRESHOLD {
            return false;
        }
        *visible = true;
        true
    }

    pub fn is_visible(&self, id: u32) -> bool {
        self.visible.get(&id).copied().unwrap_or(false)
    }

    /// Elements still waiting to be revealed
    pub fn pending(&self) -> usize {
        self.visible.values().filter(|v| !**v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once() {
        let mut tracker = RevealTracker::new();
        tracker.observe(1);
        tracker.observe(2);
        assert_eq!(tracker.pending(), 2);

        assert!(!tracker.on_intersection(1, true, 0.05));
        assert!(tracker.on_intersection(1, true, 0.4));
        assert!(!tracker.on_intersection(1, true, 0.9));
        assert!(!tracker.on_intersection(1, false, 0.0));
        assert!(tracker.is_visible(1));
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn unobserved_elements_are_ignored() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.on_intersection(7, true, 1.0));
        assert!(!tracker.is_visible(7));
    }
}
