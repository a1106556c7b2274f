pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod skills;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;
