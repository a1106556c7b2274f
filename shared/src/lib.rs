pub mod animation;
pub mod catalog;
pub mod constants;
pub mod nav;
pub mod selection;
pub mod theme;
pub mod validation;

pub use catalog::{Catalog, CatalogError};
pub use theme::{ThemeMode, ThemeState};
