use crate::constants::{DELETING_SPEED_MS, TYPING_PAUSE_MS, TYPING_SPEED_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub typing_ms: u32,
    pub deleting_ms: u32,
    pub pause_ms: u32,
    pub looping: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing_ms: TYPING_SPEED_MS,
            deleting_ms: DELETING_SPEED_MS,
            pause_ms: TYPING_PAUSE_MS,
            looping: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
    Done,
}

/// Types each phrase character by character, holds, deletes, then moves to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: Vec<String>,
    config: TypewriterConfig,
    index: usize,
    visible: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, config: TypewriterConfig) -> Self {
        let phase = if phrases.is_empty() { Phase::Done } else { Phase::Typing };
        Self { phrases, config, index: 0, visible: 0, phase }
    }

    pub fn displayed(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.index) else {
            return "";
        };
        match phrase.char_indices().nth(self.visible) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advances one step and returns the delay (ms) before the next, or `None` once finished.
    pub fn tick(&mut self) -> Option<u32> {
        let len = self.phrases.get(self.index)?.chars().count();
        match self.phase {
            Phase::Typing => {
                if self.visible < len {
                    self.visible += 1;
                }
                if self.visible >= len {
                    self.phase = Phase::Holding;
                    Some(self.config.pause_ms)
                } else {
                    Some(self.config.typing_ms)
                }
            }
            Phase::Holding => {
                let last = self.index + 1 == self.phrases.len();
                if last && !self.config.looping {
                    self.phase = Phase::Done;
                    None
                } else {
                    self.phase = Phase::Deleting;
                    Some(self.config.deleting_ms)
                }
            }
            Phase::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    Some(self.config.typing_ms)
                } else {
                    Some(self.config.deleting_ms)
                }
            }
            Phase::Done => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(phrases: &[&str], looping: bool) -> Typewriter {
        let config = TypewriterConfig { looping, ..TypewriterConfig::default() };
        Typewriter::new(phrases.iter().map(|p| p.to_string()).collect(), config)
    }

    #[test]
    fn test_types_then_holds() {
        let mut tw = writer(&["Rust"], true);
        assert_eq!(tw.displayed(), "");
        assert_eq!(tw.tick(), Some(70));
        assert_eq!(tw.displayed(), "R");
        tw.tick();
        tw.tick();
        assert_eq!(tw.tick(), Some(2000));
        assert_eq!(tw.displayed(), "Rust");
    }

    #[test]
    fn test_cycles_through_phrases() {
        let mut tw = writer(&["ab", "cd"], true);
        // type "ab", hold, delete twice
        for _ in 0..5 {
            tw.tick();
        }
        assert_eq!(tw.displayed(), "");
        tw.tick();
        assert_eq!(tw.displayed(), "c");
        for _ in 0..4 {
            tw.tick();
        }
        assert_eq!(tw.displayed(), "");
        tw.tick();
        assert_eq!(tw.displayed(), "a");
    }

    #[test]
    fn test_non_looping_stops_on_last_phrase() {
        let mut tw = writer(&["ok"], false);
        tw.tick();
        tw.tick();
        assert_eq!(tw.tick(), None);
        assert!(tw.is_done());
        assert_eq!(tw.displayed(), "ok");
    }

    #[test]
    fn test_multibyte_phrase() {
        let mut tw = writer(&["héllo"], true);
        tw.tick();
        tw.tick();
        assert_eq!(tw.displayed(), "hé");
    }

    #[test]
    fn test_no_phrases() {
        let mut tw = writer(&[], true);
        assert_eq!(tw.tick(), None);
        assert_eq!(tw.displayed(), "");
        assert!(tw.is_done());
    }
}
