use super::easing::Easing;
use super::timeline::Tween;

/// Entrance played the first time an element scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub tween: Tween,
}

impl Reveal {
    pub fn fade_up() -> Self {
        Self { x: 0.0, y: 30.0, scale: 1.0, tween: Tween::new(0.6, Easing::Power3Out) }
    }

    pub fn slide_from_left() -> Self {
        Self { x: -30.0, y: 0.0, scale: 1.0, tween: Tween::new(0.8, Easing::Power3Out) }
    }

    pub fn zoom_in() -> Self {
        Self { x: 0.0, y: 0.0, scale: 0.9, tween: Tween::new(0.6, Easing::Power3Out) }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.tween = self.tween.with_delay(delay);
        self
    }

    pub fn hidden_style(&self) -> String {
        format!(
            "opacity: 0; transform: translate3d({}px, {}px, 0) scale({});",
            self.x, self.y, self.scale
        )
    }

    pub fn shown_style(&self) -> String {
        format!(
            "opacity: 1; transform: none; transition: {};",
            self.tween.transition(&["opacity", "transform"])
        )
    }
}

/// True once any part of the element sits inside the lower edge margin of the viewport.
pub fn is_in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height * 0.9 && bottom > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_view() {
        assert!(is_in_view(100.0, 400.0, 800.0));
        assert!(!is_in_view(750.0, 1000.0, 800.0));
        assert!(!is_in_view(-500.0, -10.0, 800.0));
    }

    #[test]
    fn test_styles() {
        let reveal = Reveal::fade_up();
        assert_eq!(reveal.hidden_style(), "opacity: 0; transform: translate3d(0px, 30px, 0) scale(1);");
        assert!(reveal.shown_style().starts_with("opacity: 1; transform: none; transition: opacity 0.60s"));
    }
}
