use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

use crate::constants::{LIGHT_SAFE_REPLACEMENT, LIGHT_SAFE_WHITE};
use crate::theme::ThemeMode;
use crate::validation::{
    validate_email, validate_hex_color, validate_link_url, validate_messaging_url, validate_tech_tags, validate_title,
};

/// A `#RGB` / `#RRGGBB` colour hint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Pure white hints vanish on light backgrounds, so light mode swaps them for slate.
    pub fn for_theme(&self, mode: ThemeMode) -> &str {
        if mode == ThemeMode::Light && self.0.eq_ignore_ascii_case(LIGHT_SAFE_WHITE) {
            LIGHT_SAFE_REPLACEMENT
        } else {
            &self.0
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn validate_color(color: &Color) -> Result<(), ValidationError> {
    validate_hex_color(color.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Proficiency {
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Skill {
    #[validate(custom = "validate_title")]
    pub name: String,
    #[validate(custom = "validate_color")]
    pub color: Color,
    pub level: Proficiency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SkillGroup {
    #[validate(custom = "validate_title")]
    pub category: String,
    pub description: String,
    #[validate(custom = "validate_color")]
    pub color: Color,
    #[validate]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechTag {
    pub name: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Project {
    pub id: u32,
    #[validate(custom = "validate_title")]
    pub title: String,
    pub short_label: String,
    pub description: String,
    pub image: String,
    #[validate(custom = "validate_tech_tags")]
    pub tech: Vec<TechTag>,
    #[validate(custom = "validate_link_url")]
    pub live_url: String,
    #[validate(custom = "validate_link_url")]
    pub repo_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SocialLink {
    #[validate(custom = "validate_title")]
    pub name: String,
    #[validate(custom = "validate_link_url")]
    pub url: String,
    #[validate(custom = "validate_color")]
    pub color: Color,
    #[serde(default)]
    pub handle: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Portrait {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct Profile {
    pub name: String,
    pub short_name: String,
    pub role: String,
    pub location: String,
    pub experience: String,
    pub tagline: String,
    /// Phrases cycled by the hero typewriter.
    pub roles: Vec<String>,
    pub about: Vec<String>,
    pub focus: Vec<String>,
    pub philosophy: String,
    pub availability: String,
    pub portraits: Vec<Portrait>,
    pub stats: Vec<Stat>,
    #[validate(custom = "validate_link_url")]
    pub resume_url: String,
}

impl Profile {
    /// Label/value pairs shown on the About quick-facts card.
    pub fn quick_facts(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Name", self.name.as_str()),
            ("Role", self.role.as_str()),
            ("Location", self.location.as_str()),
            ("Experience", self.experience.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct ContactDetails {
    #[validate(custom = "validate_email")]
    pub email: String,
    #[serde(default)]
    #[validate(custom = "validate_messaging_url")]
    pub messaging_url: Option<String>,
    pub location: String,
    pub blurb: String,
    #[validate(custom = "validate_link_url")]
    pub profile_url: String,
}

impl ContactDetails {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
