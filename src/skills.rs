#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Devops,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
    /// Decorative glyph, never announced to assistive technology.
    pub icon: &'static str,
}

/// Tab ids of the skills filter. `All` is the synthetic "no filter" entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryId {
    #[default]
    All,
    Frontend,
    Backend,
    Devops,
    Other,
}

impl CategoryId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Devops => "devops",
            Self::Other => "other",
        }
    }

    pub fn admits(self, category: SkillCategory) -> bool {
        match self {
            Self::All => true,
            other => other == Self::from(category),
        }
    }
}

impl From<SkillCategory> for CategoryId {
    fn from(category: SkillCategory) -> Self {
        match category {
            SkillCategory::Frontend => Self::Frontend,
            SkillCategory::Backend => Self::Backend,
            SkillCategory::Devops => Self::Devops,
            SkillCategory::Other => Self::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryStyle {
    pub id: CategoryId,
    pub label_key: &'static str,
    pub text_class: &'static str,
    pub fill_class: &'static str,
    pub border_class: &'static str,
}

/// Tab order of the filter; the first entry doubles as the fallback style.
pub const CATEGORY_STYLES: [CategoryStyle; 5] = [
    CategoryStyle {
        id: CategoryId::All,
        label_key: "skills.categories.all",
        text_class: "tone-all-text",
        fill_class: "tone-all-fill",
        border_class: "tone-all-border",
    },
    CategoryStyle {
        id: CategoryId::Frontend,
        label_key: "skills.categories.frontend",
        text_class: "tone-frontend-text",
        fill_class: "tone-frontend-fill",
        border_class: "tone-frontend-border",
    },
    CategoryStyle {
        id: CategoryId::Backend,
        label_key: "skills.categories.backend",
        text_class: "tone-backend-text",
        fill_class: "tone-backend-fill",
        border_class: "tone-backend-border",
    },
    CategoryStyle {
        id: CategoryId::Devops,
        label_key: "skills.categories.devops",
        text_class: "tone-devops-text",
        fill_class: "tone-devops-fill",
        border_class: "tone-devops-border",
    },
    CategoryStyle {
        id: CategoryId::Other,
        label_key: "skills.categories.other",
        text_class: "tone-other-text",
        fill_class: "tone-other-fill",
        border_class: "tone-other-border",
    },
];

pub fn style_for(id: CategoryId) -> &'static CategoryStyle {
    CATEGORY_STYLES
        .iter()
        .find(|style| style.id == id)
        .unwrap_or(&CATEGORY_STYLES[0])
}

/// Tab reached from `active` by a tablist key (arrows wrap, Home/End jump).
/// Other keys leave the selection alone.
pub fn tab_for_key(active: CategoryId, key: &str) -> Option<CategoryId> {
    let count = CATEGORY_STYLES.len();
    let current = CATEGORY_STYLES
        .iter()
        .position(|style| style.id == active)
        .unwrap_or(0);

    let target = match key {
        "ArrowRight" | "ArrowDown" => (current + 1) % count,
        "ArrowLeft" | "ArrowUp" => (current + count - 1) % count,
        "Home" => 0,
        "End" => count - 1,
        _ => return None,
    };
    Some(CATEGORY_STYLES[target].id)
}

pub fn filter_skills(skills: &[Skill], active: CategoryId) -> Vec<&Skill> {
    skills
        .iter()
        .filter(|skill| active.admits(skill.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SKILLS;

    #[test]
    fn all_returns_every_skill_in_order() {
        let filtered = filter_skills(&SKILLS, CategoryId::All);
        let names: Vec<&str> = filtered.iter().map(|skill| skill.name).collect();
        let expected: Vec<&str> = SKILLS.iter().map(|skill| skill.name).collect();

        assert_eq!(names, expected);
    }

    #[test]
    fn each_category_returns_exactly_its_members() {
        for style in &CATEGORY_STYLES[1..] {
            let filtered = filter_skills(&SKILLS, style.id);
            let expected: Vec<&Skill> = SKILLS
                .iter()
                .filter(|skill| CategoryId::from(skill.category) == style.id)
                .collect();

            assert!(!filtered.is_empty(), "{} has no skills", style.id.as_str());
            assert_eq!(filtered, expected);
        }
    }

    #[test]
    fn empty_skill_list_filters_to_nothing() {
        assert!(filter_skills(&[], CategoryId::Backend).is_empty());
    }

    #[test]
    fn every_category_has_its_own_style() {
        for category in [
            SkillCategory::Frontend,
            SkillCategory::Backend,
            SkillCategory::Devops,
            SkillCategory::Other,
        ] {
            let style = style_for(category.into());
            assert_eq!(style.id, CategoryId::from(category));
        }
        assert_eq!(style_for(CategoryId::All).id, CategoryId::All);
    }

    #[test]
    fn arrow_keys_walk_the_tabs_and_wrap() {
        assert_eq!(tab_for_key(CategoryId::All, "ArrowRight"), Some(CategoryId::Frontend));
        assert_eq!(tab_for_key(CategoryId::Other, "ArrowRight"), Some(CategoryId::All));
        assert_eq!(tab_for_key(CategoryId::All, "ArrowLeft"), Some(CategoryId::Other));
        assert_eq!(tab_for_key(CategoryId::Backend, "ArrowUp"), Some(CategoryId::Frontend));
        assert_eq!(tab_for_key(CategoryId::Devops, "Home"), Some(CategoryId::All));
        assert_eq!(tab_for_key(CategoryId::Frontend, "End"), Some(CategoryId::Other));
        assert_eq!(tab_for_key(CategoryId::Frontend, "Enter"), None);
    }

    #[test]
    fn every_tab_is_reachable_from_the_first() {
        let mut seen = vec![CategoryId::All];
        let mut current = CategoryId::All;
        while let Some(next) = tab_for_key(current, "ArrowRight") {
            if next == CategoryId::All {
                break;
            }
            seen.push(next);
            current = next;
        }
        let expected: Vec<CategoryId> = CATEGORY_STYLES.iter().map(|style| style.id).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn skill_names_are_unique() {
        let mut names: Vec<&str> = SKILLS.iter().map(|skill| skill.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SKILLS.len());
    }
}
