//! The static content rendered by the page: profile, skills, projects and links.
//!
//! Content is authored as JSON, compiled into the binary and validated once when
//! first accessed. Nothing mutates it afterwards.

mod model;

pub use model::*;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationErrors};

const EMBEDDED_CATALOG: &str = include_str!("../../content/catalog.json");

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::load().unwrap_or_else(|err| {
        log::error!("Failed to load content catalog: {}", err);
        Catalog::empty()
    })
});

#[derive(Debug)]
pub enum CatalogError {
    Parse(serde_json::Error),
    Invalid(ValidationErrors),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(e) => write!(f, "malformed catalog: {}", e),
            CatalogError::Invalid(e) => write!(f, "invalid catalog: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(e) => Some(e),
            CatalogError::Invalid(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}

impl From<ValidationErrors> for CatalogError {
    fn from(err: ValidationErrors) -> Self {
        CatalogError::Invalid(err)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct Catalog {
    #[validate]
    pub profile: Profile,
    #[serde(default)]
    #[validate]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    #[validate]
    pub projects: Vec<Project>,
    #[serde(default)]
    #[validate]
    pub socials: Vec<SocialLink>,
    #[validate]
    pub contact: ContactDetails,
}

impl Catalog {
    /// Parses and validates the embedded content.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The process-wide catalog. Falls back to an empty catalog if the embedded content is broken.
    pub fn get() -> &'static Catalog {
        &CATALOG
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn skill_count(&self) -> usize {
        self.skill_groups.iter().map(|group| group.skills.len()).sum()
    }
}
