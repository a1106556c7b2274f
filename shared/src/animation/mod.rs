//! Configuration and pure math for the page's motion effects.
//!
//! The frontend binds these to DOM events and CSS; nothing here touches the DOM,
//! and no effect feeds data back into application state.

pub mod easing;
pub mod pixel;
pub mod proximity;
pub mod reveal;
pub mod scroll;
pub mod tilt;
pub mod timeline;
pub mod typewriter;

pub use easing::Easing;
pub use pixel::PixelTransition;
pub use proximity::{distance, Falloff, Proximity};
pub use reveal::Reveal;
pub use scroll::{Parallax, ScrollTrigger};
pub use tilt::{Tilt, TiltPose};
pub use timeline::{stagger, Position, Timeline, Tween};
pub use typewriter::{Typewriter, TypewriterConfig};
