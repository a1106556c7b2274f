pub const THEME_STORAGE_KEY: &str = "theme";

/// Viewport width (px) at which the navbar switches from the bubble menu to the top bar.
pub const DESKTOP_BREAKPOINT: f64 = 768.0;
/// Vertical scroll offset (px) after which the navbar condenses.
pub const NAV_SCROLL_THRESHOLD: f64 = 20.0;

pub const LIGHT_SAFE_WHITE: &str = "#FFFFFF";
pub const LIGHT_SAFE_REPLACEMENT: &str = "#0F172A";

pub const TYPING_SPEED_MS: u32 = 70;
pub const DELETING_SPEED_MS: u32 = 40;
pub const TYPING_PAUSE_MS: u32 = 2000;

pub const ENTRANCE_DURATION: f64 = 0.8;
pub const ENTRANCE_OVERLAP: f64 = 0.6;

pub const BUBBLE_ANIMATION_DURATION: f64 = 0.5;
pub const BUBBLE_STAGGER_DELAY: f64 = 0.12;
