/// Pointer-following 3D tilt for cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Maximum rotation in degrees at the card's edge.
    pub amplitude: f64,
    pub hover_scale: f64,
}

impl Default for Tilt {
    fn default() -> Self {
        Self { amplitude: 12.0, hover_scale: 1.05 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltPose {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl TiltPose {
    pub const REST: TiltPose = TiltPose { rotate_x: 0.0, rotate_y: 0.0, scale: 1.0 };

    pub fn css(&self) -> String {
        format!(
            "perspective(800px) rotateX({:.2}deg) rotateY({:.2}deg) scale({})",
            self.rotate_x, self.rotate_y, self.scale
        )
    }
}

impl Tilt {
    /// `x`/`y` are pointer coordinates relative to the card's top-left corner.
    pub fn pose(&self, x: f64, y: f64, width: f64, height: f64) -> TiltPose {
        if width <= 0.0 || height <= 0.0 {
            return TiltPose::REST;
        }
        let offset_x = (x - width / 2.0) / (width / 2.0);
        let offset_y = (y - height / 2.0) / (height / 2.0);
        TiltPose {
            rotate_x: -offset_y.clamp(-1.0, 1.0) * self.amplitude,
            rotate_y: offset_x.clamp(-1.0, 1.0) * self.amplitude,
            scale: self.hover_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_flat() {
        let pose = Tilt::default().pose(210.0, 250.0, 420.0, 500.0);
        assert_eq!(pose.rotate_x, 0.0);
        assert_eq!(pose.rotate_y, 0.0);
        assert_eq!(pose.scale, 1.05);
    }

    #[test]
    fn test_corner_hits_amplitude() {
        let pose = Tilt::default().pose(0.0, 0.0, 420.0, 500.0);
        assert_eq!(pose.rotate_x, 12.0);
        assert_eq!(pose.rotate_y, -12.0);
    }

    #[test]
    fn test_outside_pointer_is_clamped() {
        let pose = Tilt::default().pose(900.0, 250.0, 420.0, 500.0);
        assert_eq!(pose.rotate_y, 12.0);
    }

    #[test]
    fn test_zero_sized_card_rests() {
        assert_eq!(Tilt::default().pose(1.0, 1.0, 0.0, 10.0), TiltPose::REST);
        assert_eq!(TiltPose::REST.css(), "perspective(800px) rotateX(0.00deg) rotateY(0.00deg) scale(1)");
    }
}
