use crate::constants::{DESKTOP_BREAKPOINT, NAV_SCROLL_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl NavTarget {
    /// Page order.
    pub const ALL: [NavTarget; 5] = [
        NavTarget::Home,
        NavTarget::About,
        NavTarget::Skills,
        NavTarget::Projects,
        NavTarget::Contact,
    ];

    pub fn anchor(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn accent(&self) -> &'static str {
        match self {
            Self::Home => "#3b82f6",
            Self::About => "#10b981",
            Self::Skills => "#8b5cf6",
            Self::Projects => "#f59e0b",
            Self::Contact => "#ef4444",
        }
    }

    /// Resting tilt (degrees) of the pill in the bubble menu.
    pub fn bubble_rotation(&self) -> f64 {
        match self {
            Self::Home | Self::Skills => -8.0,
            Self::About | Self::Projects | Self::Contact => 8.0,
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        Self::ALL.into_iter().find(|target| target.anchor() == anchor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVariant {
    Desktop,
    Bubble,
}

impl NavVariant {
    pub fn for_width(width: f64) -> Self {
        if width >= DESKTOP_BREAKPOINT {
            Self::Desktop
        } else {
            Self::Bubble
        }
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

/// Open/closed flag of the narrow-viewport overlay menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_anchors_are_unique_and_ordered() {
        let anchors: Vec<&str> = NavTarget::ALL.iter().map(|t| t.anchor()).collect();
        assert_eq!(anchors, vec!["home", "about", "skills", "projects", "contact"]);
        assert_eq!(anchors.iter().collect::<HashSet<_>>().len(), 5);
    }

    #[test]
    fn test_from_anchor() {
        assert_eq!(NavTarget::from_anchor("#skills"), Some(NavTarget::Skills));
        assert_eq!(NavTarget::from_anchor("contact"), Some(NavTarget::Contact));
        assert_eq!(NavTarget::from_anchor("#resume"), None);
    }

    #[test]
    fn test_variant_breakpoint() {
        assert_eq!(NavVariant::for_width(767.9), NavVariant::Bubble);
        assert_eq!(NavVariant::for_width(768.0), NavVariant::Desktop);
        assert_eq!(NavVariant::for_width(1440.0), NavVariant::Desktop);
    }

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
