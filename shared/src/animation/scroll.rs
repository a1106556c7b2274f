/// Scroll-linked progress from the moment a section's top meets the viewport top
/// until its bottom does.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollTrigger;

impl ScrollTrigger {
    /// `top` is the section's bounding-rect top relative to the viewport.
    pub fn progress(&self, top: f64, height: f64) -> f64 {
        if height <= 0.0 || !top.is_finite() {
            return 0.0;
        }
        (-top / height).clamp(0.0, 1.0)
    }
}

/// Scrubbed translate/rotate reached at full progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub y: f64,
    pub rotate: f64,
}

impl Parallax {
    pub const fn new(y: f64, rotate: f64) -> Self {
        Self { y, rotate }
    }

    pub fn transform(&self, progress: f64) -> String {
        let p = progress.clamp(0.0, 1.0);
        if self.rotate == 0.0 {
            format!("translate3d(0, {:.2}px, 0)", self.y * p)
        } else {
            format!("translate3d(0, {:.2}px, 0) rotate({:.2}deg)", self.y * p, self.rotate * p)
        }
    }
}

pub const HERO_GLOW: Parallax = Parallax::new(100.0, 0.0);
pub const HERO_TEXT: Parallax = Parallax::new(-80.0, 0.0);
pub const HERO_IMAGE: Parallax = Parallax::new(-140.0, 2.0);
