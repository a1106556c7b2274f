#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    Power3Out,
    ExpoOut,
    BackOut,
}

const BACK_OVERSHOOT: f64 = 1.70158;

impl Easing {
    /// CSS timing function approximating the curve.
    pub fn css(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Self::ExpoOut => "cubic-bezier(0.16, 1, 0.3, 1)",
            Self::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }

    /// Eased progress for `t` in `[0, 1]`, for effects driven frame by frame.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power3Out => 1.0 - (1.0 - t).powi(3),
            Self::ExpoOut => (1.001 - 2f64.powf(-10.0 * t)).min(1.0),
            Self::BackOut => {
                let c3 = BACK_OVERSHOOT + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + BACK_OVERSHOOT * (t - 1.0).powi(2)
            }
        }
    }
}
