//! Project showcase state: the card tag preview, the single "active project"
//! slot behind the modal, and the focus trap used while the modal is open.

/// Number of technology tags a card shows before collapsing the rest into `+k`.
pub const CARD_TAG_LIMIT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub details: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub link: String,
    pub date_published: Option<String>,
    pub client: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagPreview<'a> {
    pub visible: &'a [String],
    pub hidden: usize,
}

impl TagPreview<'_> {
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{}", self.hidden))
    }
}

pub fn tag_preview(technologies: &[String], limit: usize) -> TagPreview<'_> {
    let shown = technologies.len().min(limit);
    TagPreview {
        visible: &technologies[..shown],
        hidden: technologies.len() - shown,
    }
}

/// The project whose modal is open, referenced by its stable id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectSelection {
    active: Option<u32>,
}

impl ProjectSelection {
    pub fn active(&self) -> Option<u32> {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Replaces the selection and returns the project it displaced.
    pub fn select(&mut self, id: u32) -> Option<u32> {
        self.active.replace(id)
    }

    /// Returns `false` when nothing was open.
    pub fn close(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn resolve<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        let id = self.active?;
        projects.iter().find(|project| project.id == id)
    }
}

/// Where Tab focus must be redirected to stay inside a dialog with `count`
/// focusable elements. `None` lets the browser move focus normally.
pub fn trap_focus(current: Option<usize>, count: usize, backwards: bool) -> Option<usize> {
    let last = count.checked_sub(1)?;
    match (current, backwards) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(index), false) if index >= last => Some(0),
        (Some(0), true) => Some(last),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, technologies: &[&str]) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: "short".to_string(),
            details: "long".to_string(),
            image: format!("/projects/{id}.webp"),
            technologies: technologies.iter().map(|tech| tech.to_string()).collect(),
            link: "https://example.com".to_string(),
            date_published: None,
            client: None,
        }
    }

    #[test]
    fn five_tags_show_four_and_a_plus_one_badge() {
        let sample = project(1, &["A", "B", "C", "D", "E"]);
        let preview = tag_preview(&sample.technologies, CARD_TAG_LIMIT);

        assert_eq!(preview.visible, ["A", "B", "C", "D"]);
        assert_eq!(preview.overflow_label().as_deref(), Some("+1"));
    }

    #[test]
    fn short_tag_lists_have_no_badge() {
        for count in 0..=CARD_TAG_LIMIT {
            let tags: Vec<String> = (0..count).map(|index| index.to_string()).collect();
            let preview = tag_preview(&tags, CARD_TAG_LIMIT);

            assert_eq!(preview.visible.len(), count);
            assert_eq!(preview.overflow_label(), None);
        }
    }

    #[test]
    fn badge_counts_every_hidden_tag() {
        let tags: Vec<String> = (0..12).map(|index| format!("t{index}")).collect();
        let preview = tag_preview(&tags, CARD_TAG_LIMIT);

        assert_eq!(preview.hidden, 8);
        assert_eq!(preview.overflow_label().as_deref(), Some("+8"));
    }

    #[test]
    fn opening_another_project_replaces_the_first() {
        let projects = vec![project(1, &[]), project(2, &[])];
        let mut selection = ProjectSelection::default();

        assert_eq!(selection.select(1), None);
        assert_eq!(selection.select(2), Some(1));
        assert_eq!(selection.active(), Some(2));
        assert_eq!(selection.resolve(&projects).map(|p| p.id), Some(2));
    }

    #[test]
    fn closing_is_idempotent() {
        let mut selection = ProjectSelection::default();
        assert!(!selection.close());

        selection.select(3);
        assert!(selection.close());
        assert!(!selection.close());
        assert!(!selection.is_open());
    }

    #[test]
    fn unknown_id_resolves_to_nothing() {
        let mut selection = ProjectSelection::default();
        selection.select(99);
        assert_eq!(selection.resolve(&[project(1, &[])]), None);
        assert_eq!(selection.resolve(&[]), None);
    }

    #[test]
    fn focus_wraps_at_both_ends_of_the_dialog() {
        assert_eq!(trap_focus(Some(1), 2, false), Some(0));
        assert_eq!(trap_focus(Some(0), 2, true), Some(1));
        assert_eq!(trap_focus(Some(0), 2, false), None);
        assert_eq!(trap_focus(Some(1), 2, true), None);
        assert_eq!(trap_focus(None, 2, false), Some(0));
        assert_eq!(trap_focus(None, 2, true), Some(1));
        assert_eq!(trap_focus(None, 0, false), None);
    }
}
