use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl fmt::Display for UnknownThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme mode: {:?}", self.0)
    }
}

impl std::error::Error for UnknownThemeMode {}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Picks the style variant matching this mode.
    pub fn pick<T>(&self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }

    /// Resolves a stored preference. Missing or unreadable values fall back to the default mode.
    pub fn from_preference(stored: Option<&str>) -> Self {
        match stored {
            Some(value) => value.parse().unwrap_or_else(|err: UnknownThemeMode| {
                log::warn!("{}, falling back to {}", err, Self::default());
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownThemeMode(s.to_string())),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owner of the active display mode. `toggle` is the only mutator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let mut state = ThemeState::new(mode);
            state.toggle();
            state.toggle();
            assert_eq!(state.mode(), mode);
        }
    }

    #[test]
    fn test_toggle_flips_mode() {
        let mut state = ThemeState::default();
        assert_eq!(state.mode(), ThemeMode::Dark);
        assert_eq!(state.toggle(), ThemeMode::Light);
        assert_eq!(state.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut first = ThemeState::default();
        let second = ThemeState::default();
        first.toggle();
        assert_ne!(first.mode(), second.mode());
    }

    #[test]
    fn test_preference_fallback() {
        assert_eq!(ThemeMode::from_preference(None), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_preference(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_preference(Some(" Dark ")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_preference(Some("sepia")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_preference(Some("")), ThemeMode::Dark);
    }

    #[test]
    fn test_pick() {
        assert_eq!(ThemeMode::Light.pick("bg-white", "bg-black"), "bg-white");
        assert_eq!(ThemeMode::Dark.pick("bg-white", "bg-black"), "bg-black");
    }
}
