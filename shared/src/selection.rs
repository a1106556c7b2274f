use crate::catalog::{Project, Skill};

/// Detail modal for the project gallery. Re-selecting while open swaps the payload in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProjectModal {
    #[default]
    Closed,
    Open(Project),
}

impl ProjectModal {
    pub fn select(&mut self, project: &Project) {
        *self = Self::Open(project.clone());
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn selected(&self) -> Option<&Project> {
        match self {
            Self::Open(project) => Some(project),
            Self::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InspectedSkill {
    pub skill: Skill,
    pub category: String,
}

/// Last-hover-wins inspector for skill badges.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkillInspector {
    inspected: Option<InspectedSkill>,
}

impl SkillInspector {
    pub fn hover(&mut self, skill: &Skill, category: &str) {
        self.inspected = Some(InspectedSkill {
            skill: skill.clone(),
            category: category.to_string(),
        });
    }

    pub fn clear(&mut self) {
        self.inspected = None;
    }

    pub fn inspected(&self) -> Option<&InspectedSkill> {
        self.inspected.as_ref()
    }

    pub fn is_active_category(&self, category: &str) -> bool {
        self.inspected.as_ref().is_some_and(|i| i.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Color, Proficiency};

    fn skill(name: &str, color: &str, level: Proficiency) -> Skill {
        Skill { name: name.to_string(), color: Color::new(color), level }
    }

    #[test]
    fn test_select_carries_project() {
        let catalog = Catalog::load().unwrap();
        let mut modal = ProjectModal::default();
        assert!(!modal.is_open());

        modal.select(&catalog.projects[2]);
        assert!(modal.is_open());
        assert_eq!(modal.selected(), Some(&catalog.projects[2]));
    }

    #[test]
    fn test_close_after_many_reselections() {
        let catalog = Catalog::load().unwrap();
        let mut modal = ProjectModal::default();
        for project in catalog.projects.iter().chain(catalog.projects.iter().rev()) {
            modal.select(project);
            assert_eq!(modal.selected().map(|p| p.id), Some(project.id));
        }
        modal.close();
        assert_eq!(modal, ProjectModal::Closed);
        assert!(modal.selected().is_none());
    }

    #[test]
    fn test_close_when_already_closed() {
        let mut modal = ProjectModal::default();
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn test_last_hover_wins() {
        let a = skill("React", "#61DAFB", Proficiency::Expert);
        let b = skill("PostgreSQL", "#4169E1", Proficiency::Intermediate);
        let c = skill("Git", "#F05032", Proficiency::Advanced);

        let mut inspector = SkillInspector::default();
        inspector.hover(&a, "Frontend Development");
        inspector.hover(&b, "Databases");
        inspector.hover(&c, "Architecture & Tools");

        let inspected = inspector.inspected().unwrap();
        assert_eq!(inspected.skill, c);
        assert_eq!(inspected.category, "Architecture & Tools");
        assert!(inspector.is_active_category("Architecture & Tools"));
        assert!(!inspector.is_active_category("Databases"));
    }

    #[test]
    fn test_clear_inspector() {
        let mut inspector = SkillInspector::default();
        inspector.hover(&skill("Vite", "#646CFF", Proficiency::Expert), "Architecture & Tools");
        inspector.clear();
        assert!(inspector.inspected().is_none());
        assert!(!inspector.is_active_category("Architecture & Tools"));
    }
}
