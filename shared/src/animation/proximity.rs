#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Falloff {
    #[default]
    Linear,
    Exponential,
    Gaussian,
}

/// Variable-font emphasis that grows as the pointer approaches a glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proximity {
    pub radius: f64,
    pub falloff: Falloff,
    pub from_weight: f64,
    pub to_weight: f64,
    pub from_opsz: f64,
    pub to_opsz: f64,
}

impl Default for Proximity {
    fn default() -> Self {
        Self {
            radius: 100.0,
            falloff: Falloff::Linear,
            from_weight: 400.0,
            to_weight: 1000.0,
            from_opsz: 9.0,
            to_opsz: 40.0,
        }
    }
}

impl Proximity {
    /// Influence in `[0, 1]` at a given pointer distance.
    pub fn strength(&self, distance: f64) -> f64 {
        if self.radius <= 0.0 || distance >= self.radius || !distance.is_finite() {
            return 0.0;
        }
        let norm = (distance.max(0.0) / self.radius).min(1.0);
        match self.falloff {
            Falloff::Linear => 1.0 - norm,
            Falloff::Exponential => (1.0 - norm).powi(2),
            Falloff::Gaussian => (-(norm * 3.0).powi(2) / 2.0).exp(),
        }
    }

    pub fn font_variation(&self, distance: f64) -> String {
        let s = self.strength(distance);
        let weight = self.from_weight + (self.to_weight - self.from_weight) * s;
        let opsz = self.from_opsz + (self.to_opsz - self.from_opsz) * s;
        format!("'wght' {:.0}, 'opsz' {:.0}", weight, opsz)
    }
}

pub fn distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_strength() {
        let p = Proximity::default();
        assert_eq!(p.strength(0.0), 1.0);
        assert_eq!(p.strength(50.0), 0.5);
        assert_eq!(p.strength(100.0), 0.0);
        assert_eq!(p.strength(250.0), 0.0);
    }

    #[test]
    fn test_font_variation_range() {
        let p = Proximity::default();
        assert_eq!(p.font_variation(0.0), "'wght' 1000, 'opsz' 40");
        assert_eq!(p.font_variation(500.0), "'wght' 400, 'opsz' 9");
    }

    #[test]
    fn test_falloff_shapes_decrease() {
        for falloff in [Falloff::Linear, Falloff::Exponential, Falloff::Gaussian] {
            let p = Proximity { falloff, ..Proximity::default() };
            assert!(p.strength(10.0) > p.strength(60.0), "{:?}", falloff);
        }
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
    }

    #[test]
    fn test_distance_reachable_from_animation_root() {
        use crate::animation::{distance as root_distance, Falloff as RootFalloff};
        assert_eq!(root_distance(1.0, 1.0, 4.0, 5.0), 5.0);
        assert_eq!(RootFalloff::Linear, Falloff::Linear);
    }
}
