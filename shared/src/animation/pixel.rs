use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Hover swap between two images through a grid of pixels flashing in random order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelTransition {
    pub grid: usize,
    /// Seconds over which all pixels appear; the content swaps at its end.
    pub step_duration: f64,
}

impl Default for PixelTransition {
    fn default() -> Self {
        Self { grid: 12, step_duration: 0.4 }
    }
}

impl PixelTransition {
    pub fn cell_count(&self) -> usize {
        self.grid * self.grid
    }

    /// Every cell index exactly once, shuffled deterministically by `seed`.
    pub fn reveal_order(&self, seed: u64) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.cell_count()).collect();
        let mut rng = SmallRng::seed_from_u64(seed);
        order.shuffle(&mut rng);
        order
    }

    /// Per-cell delay (seconds), indexed by cell.
    pub fn cell_delays(&self, seed: u64) -> Vec<f64> {
        let count = self.cell_count();
        let mut delays = vec![0.0; count];
        for (rank, cell) in self.reveal_order(seed).into_iter().enumerate() {
            delays[cell] = rank as f64 / count as f64 * self.step_duration;
        }
        delays
    }

    pub fn cell_size_percent(&self) -> f64 {
        if self.grid == 0 {
            return 100.0;
        }
        100.0 / self.grid as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_a_permutation() {
        let transition = PixelTransition::default();
        let mut order = transition.reveal_order(7);
        assert_eq!(order.len(), 144);
        order.sort_unstable();
        assert_eq!(order, (0..144).collect::<Vec<_>>());
    }

    #[test]
    fn test_seed_is_deterministic() {
        let transition = PixelTransition::default();
        assert_eq!(transition.reveal_order(42), transition.reveal_order(42));
    }

    #[test]
    fn test_delays_fit_step_duration() {
        let transition = PixelTransition { grid: 4, step_duration: 0.4 };
        let delays = transition.cell_delays(1);
        assert_eq!(delays.len(), 16);
        assert!(delays.iter().all(|d| (0.0..0.4).contains(d)));
        assert_eq!(delays.iter().filter(|d| **d == 0.0).count(), 1);
    }

    #[test]
    fn test_empty_grid() {
        let transition = PixelTransition { grid: 0, step_duration: 0.4 };
        assert!(transition.cell_delays(3).is_empty());
        assert_eq!(transition.cell_size_percent(), 100.0);
    }
}
