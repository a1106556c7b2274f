use super::easing::Easing;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(duration: f64, easing: Easing) -> Self {
        Self { duration, delay: 0.0, easing }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// `transition` value covering each listed property.
    pub fn transition(&self, properties: &[&str]) -> String {
        properties
            .iter()
            .map(|p| format!("{} {:.2}s {} {:.2}s", p, self.duration, self.easing.css(), self.delay))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `animation` shorthand for a named keyframe set.
    pub fn animation(&self, keyframes: &str) -> String {
        format!("{} {:.2}s {} {:.2}s both", keyframes, self.duration, self.easing.css(), self.delay)
    }
}

/// Where a step starts relative to the timeline built so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    AfterPrevious,
    /// Starts this many seconds before the previous step ends.
    Overlap(f64),
    At(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    duration: f64,
    easing: Easing,
    steps: Vec<(String, Tween)>,
}

impl Timeline {
    pub fn new(duration: f64, easing: Easing) -> Self {
        Self { duration, easing, steps: Vec::new() }
    }

    pub fn then(mut self, target: &str, position: Position) -> Self {
        let previous_end = self.steps.last().map(|(_, t)| t.delay + t.duration).unwrap_or(0.0);
        let start = match position {
            Position::AfterPrevious => previous_end,
            Position::Overlap(seconds) => (previous_end - seconds).max(0.0),
            Position::At(seconds) => seconds.max(0.0),
        };
        self.steps.push((target.to_string(), Tween::new(self.duration, self.easing).with_delay(start)));
        self
    }

    pub fn tween(&self, target: &str) -> Option<Tween> {
        self.steps.iter().find(|(name, _)| name == target).map(|(_, tween)| *tween)
    }

    pub fn steps(&self) -> impl Iterator<Item = (&str, &Tween)> {
        self.steps.iter().map(|(name, tween)| (name.as_str(), tween))
    }

    pub fn total_duration(&self) -> f64 {
        self.steps.iter().map(|(_, t)| t.delay + t.duration).fold(0.0, f64::max)
    }
}

pub fn stagger(index: usize, step: f64, base: f64) -> f64 {
    base + index as f64 * step
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_overlapping_entrance() {
        let timeline = Timeline::new(0.8, Easing::Power3Out)
            .then("badge", Position::AfterPrevious)
            .then("title", Position::Overlap(0.6))
            .then("typing", Position::Overlap(0.6))
            .then("description", Position::Overlap(0.6));

        let delays: Vec<f64> = timeline.steps().map(|(_, t)| t.delay).collect();
        assert!(approx(delays[0], 0.0));
        assert!(approx(delays[1], 0.2));
        assert!(approx(delays[2], 0.4));
        assert!(approx(delays[3], 0.6));
        assert!(approx(timeline.total_duration(), 1.4));
    }

    #[test]
    fn test_overlap_never_negative() {
        let timeline = Timeline::new(0.5, Easing::Linear).then("first", Position::Overlap(2.0));
        assert_eq!(timeline.tween("first").unwrap().delay, 0.0);
        assert!(timeline.tween("missing").is_none());
    }

    #[test]
    fn test_stagger() {
        assert!(approx(stagger(3, 0.12, 0.1), 0.46));
    }

    #[test]
    fn test_transition_string() {
        let tween = Tween::new(0.3, Easing::Linear).with_delay(0.1);
        assert_eq!(tween.transition(&["opacity", "transform"]), "opacity 0.30s linear 0.10s, transform 0.30s linear 0.10s");
    }
}
