pub mod anchor;
pub mod bubble_menu;
pub mod footer;
pub mod gradual_blur;
pub mod navbar;
pub mod pixel_transition;
pub mod project_modal;
pub mod reveal;
pub mod section_header;
pub mod skill_inspector;
pub mod text_type;
pub mod theme_provider;
pub mod theme_toggle;
pub mod tilted_card;
pub mod variable_proximity;

pub use bubble_menu::BubbleMenu;
pub use footer::Footer;
pub use gradual_blur::GradualBlur;
pub use navbar::Navbar;
pub use pixel_transition::PixelTransition;
pub use project_modal::ProjectModal;
pub use reveal::Reveal;
pub use section_header::SectionHeader;
pub use skill_inspector::SkillInspectorPanel;
pub use text_type::TextType;
pub use theme_provider::ThemeProvider;
pub use theme_toggle::ThemeToggle;
pub use tilted_card::TiltedCard;
pub use variable_proximity::VariableProximity;
