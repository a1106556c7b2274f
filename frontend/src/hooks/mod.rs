pub mod use_reveal;
pub mod use_scroll;
pub mod use_theme;
pub mod use_typewriter;

pub use use_reveal::*;
pub use use_scroll::*;
pub use use_theme::*;
pub use use_typewriter::*;
