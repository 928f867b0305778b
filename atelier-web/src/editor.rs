//! State machine behind the dual-entity admin form.
//!
//! Pure logic, extracted from the admin page component so the
//! create/edit/cancel lifecycle can be tested without a browser.

use serde_json::{Value, json};
use shared::models::{Post, Project};
use strum_macros::EnumIter;
use thiserror::Error;

/// The two collections managed by the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Tab {
    Projects,
    Blog,
}

impl Tab {
    /// Tab bar caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Blog => "Blog",
        }
    }

    /// Collection endpoint under the API prefix.
    pub fn collection_path(self) -> &'static str {
        match self {
            Self::Projects => "/projects",
            Self::Blog => "/blog",
        }
    }

    /// Endpoint of a single entity in this collection.
    pub fn entity_path(self, id: &str) -> String {
        format!("{}/{}", self.collection_path(), id)
    }
}

/// A required form field was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("title is required")]
    TitleRequired,
    #[error("description is required")]
    DescriptionRequired,
    #[error("image URL is required")]
    ImageUrlRequired,
    #[error("content is required")]
    ContentRequired,
}

/// Draft of the entity being created or edited.
///
/// Exactly one variant is live at a time, selected by the active tab, so
/// one entity's fields can never leak into the other's submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft {
    Project {
        title: String,
        description: String,
        image_url: String,
        link: String,
    },
    Post {
        title: String,
        content: String,
        author: String,
    },
}

impl Draft {
    /// Blank draft matching `tab`'s field set.
    pub fn blank(tab: Tab) -> Self {
        match tab {
            Tab::Projects => Self::Project {
                title: String::new(),
                description: String::new(),
                image_url: String::new(),
                link: String::new(),
            },
            Tab::Blog => Self::Post {
                title: String::new(),
                content: String::new(),
                author: "Admin".to_string(),
            },
        }
    }

    /// Populate a draft from a persisted project. Absent values become
    /// empty strings so controlled inputs never detach.
    pub fn from_project(project: &Project) -> Self {
        Self::Project {
            title: project.title.clone(),
            description: project.description.clone(),
            image_url: project.image_url.clone(),
            link: project.link.clone().unwrap_or_default(),
        }
    }

    /// Populate a draft from a persisted post.
    pub fn from_post(post: &Post) -> Self {
        Self::Post {
            title: post.title.clone(),
            content: post.content.clone(),
            author: if post.author.is_empty() {
                "Admin".to_string()
            } else {
                post.author.clone()
            },
        }
    }

    /// Which tab this draft belongs to.
    pub fn tab(&self) -> Tab {
        match self {
            Self::Project { .. } => Tab::Projects,
            Self::Post { .. } => Tab::Blog,
        }
    }

    /// Current value of a named field. Names outside the live variant
    /// read as empty.
    pub fn field(&self, name: &str) -> &str {
        match (self, name) {
            (Self::Project { title, .. } | Self::Post { title, .. }, "title") => title,
            (Self::Project { description, .. }, "description") => description,
            (Self::Project { image_url, .. }, "imageUrl") => image_url,
            (Self::Project { link, .. }, "link") => link,
            (Self::Post { content, .. }, "content") => content,
            (Self::Post { author, .. }, "author") => author,
            _ => "",
        }
    }

    /// Merge a single field edit into the draft. Names outside the live
    /// variant are ignored; the draft's shape never changes.
    pub fn set_field(&mut self, name: &str, value: String) {
        match (self, name) {
            (Self::Project { title, .. } | Self::Post { title, .. }, "title") => *title = value,
            (Self::Project { description, .. }, "description") => *description = value,
            (Self::Project { image_url, .. }, "imageUrl") => *image_url = value,
            (Self::Project { link, .. }, "link") => *link = value,
            (Self::Post { content, .. }, "content") => *content = value,
            (Self::Post { author, .. }, "author") => *author = value,
            _ => {}
        }
    }

    /// Check the fields required by the live variant.
    pub fn validate(&self) -> Result<(), DraftError> {
        match self {
            Self::Project {
                title,
                description,
                image_url,
                ..
            } => {
                if title.trim().is_empty() {
                    return Err(DraftError::TitleRequired);
                }
                if description.trim().is_empty() {
                    return Err(DraftError::DescriptionRequired);
                }
                if image_url.trim().is_empty() {
                    return Err(DraftError::ImageUrlRequired);
                }
                Ok(())
            }
            Self::Post { title, content, .. } => {
                if title.trim().is_empty() {
                    return Err(DraftError::TitleRequired);
                }
                if content.trim().is_empty() {
                    return Err(DraftError::ContentRequired);
                }
                Ok(())
            }
        }
    }

    /// Wire payload restricted to the live variant's field set.
    pub fn payload(&self) -> Value {
        match self {
            Self::Project {
                title,
                description,
                image_url,
                link,
            } => json!({
                "title": title,
                "description": description,
                "imageUrl": image_url,
                "link": link,
            }),
            Self::Post {
                title,
                content,
                author,
            } => json!({
                "title": title,
                "content": content,
                "author": author,
            }),
        }
    }
}

/// Create/edit mode of the admin form. The edit target travels with the
/// mode, so a target id can exist if and only if we are editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit(String),
}

/// The admin form's full state: mode plus draft contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorForm {
    mode: Mode,
    draft: Draft,
}

impl EditorForm {
    /// Blank create form for `tab`. Also the reset target for tab
    /// switches, cancel, and successful submits.
    pub fn create(tab: Tab) -> Self {
        Self {
            mode: Mode::Create,
            draft: Draft::blank(tab),
        }
    }

    /// Begin editing a persisted project.
    pub fn edit_project(project: &Project) -> Self {
        Self {
            mode: Mode::Edit(project.id.clone()),
            draft: Draft::from_project(project),
        }
    }

    /// Begin editing a persisted post.
    pub fn edit_post(post: &Post) -> Self {
        Self {
            mode: Mode::Edit(post.id.clone()),
            draft: Draft::from_post(post),
        }
    }

    pub fn tab(&self) -> Tab {
        self.draft.tab()
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Identifier of the entity being edited, if any.
    pub fn target_id(&self) -> Option<&str> {
        match &self.mode {
            Mode::Edit(id) => Some(id),
            Mode::Create => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Edit(_))
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Pure field merge; never changes mode or target.
    pub fn change(&mut self, name: &str, value: String) {
        self.draft.set_field(name, value);
    }

    /// Discard the draft and return to a blank create form on the same tab.
    pub fn cancel(&self) -> Self {
        Self::create(self.tab())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        Project {
            id: "p1".to_string(),
            title: "Atelier".to_string(),
            description: "A portfolio site".to_string(),
            image_url: "https://example.com/cover.png".to_string(),
            link: None,
        }
    }

    fn sample_post() -> Post {
        serde_json::from_value(serde_json::json!({
            "_id": "b1",
            "title": "Hello",
            "author": "Ada",
            "content": "First post",
            "createdAt": "2026-01-05T09:30:00Z",
        }))
        .unwrap()
    }

    #[test]
    fn blank_drafts_match_their_tab() {
        let project = Draft::blank(Tab::Projects);
        assert_eq!(project.tab(), Tab::Projects);
        assert_eq!(project.field("title"), "");

        let post = Draft::blank(Tab::Blog);
        assert_eq!(post.tab(), Tab::Blog);
        assert_eq!(post.field("author"), "Admin");
    }

    #[test]
    fn tab_switch_reset_discards_the_previous_draft() {
        let mut form = EditorForm::create(Tab::Projects);
        form.change("title", "Half-typed project".to_string());

        // Switching tabs always starts over with the new tab's blank draft.
        let switched = EditorForm::create(Tab::Blog);
        assert_eq!(switched.tab(), Tab::Blog);
        assert!(!switched.is_editing());
        assert_eq!(switched.target_id(), None);
        assert_eq!(switched.draft(), &Draft::blank(Tab::Blog));
    }

    #[test]
    fn begin_edit_populates_fields_and_defaults_absent_ones() {
        let form = EditorForm::edit_project(&sample_project());
        assert_eq!(form.target_id(), Some("p1"));
        assert_eq!(form.draft().field("title"), "Atelier");
        // `link` is absent on the entity and must read as empty string.
        assert_eq!(form.draft().field("link"), "");
    }

    #[test]
    fn change_merges_without_touching_mode_or_target() {
        let mut form = EditorForm::edit_post(&sample_post());
        form.change("content", "Edited".to_string());

        assert_eq!(form.draft().field("content"), "Edited");
        assert_eq!(form.target_id(), Some("b1"));
        assert!(form.is_editing());
    }

    #[test]
    fn fields_of_the_other_entity_are_ignored() {
        let mut form = EditorForm::create(Tab::Blog);
        form.change("imageUrl", "https://example.com/x.png".to_string());

        assert_eq!(form.draft(), &Draft::blank(Tab::Blog));
        assert_eq!(form.draft().field("imageUrl"), "");
    }

    #[test]
    fn cancel_returns_to_blank_create_on_the_same_tab() {
        let mut form = EditorForm::edit_post(&sample_post());
        form.change("title", "Edited title".to_string());

        let cancelled = form.cancel();
        assert_eq!(cancelled, EditorForm::create(Tab::Blog));
        assert_eq!(cancelled.target_id(), None);
    }

    #[test]
    fn project_validation_requires_title_description_and_image() {
        let mut draft = Draft::blank(Tab::Projects);
        assert_eq!(draft.validate(), Err(DraftError::TitleRequired));

        draft.set_field("title", "T".to_string());
        assert_eq!(draft.validate(), Err(DraftError::DescriptionRequired));

        draft.set_field("description", "D".to_string());
        assert_eq!(draft.validate(), Err(DraftError::ImageUrlRequired));

        draft.set_field("imageUrl", "https://example.com/x.png".to_string());
        // `link` stays optional.
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn post_validation_requires_title_and_content() {
        let mut draft = Draft::blank(Tab::Blog);
        assert_eq!(draft.validate(), Err(DraftError::TitleRequired));

        draft.set_field("title", "T".to_string());
        assert_eq!(draft.validate(), Err(DraftError::ContentRequired));

        draft.set_field("content", "C".to_string());
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn whitespace_only_fields_do_not_validate() {
        let mut draft = Draft::blank(Tab::Blog);
        draft.set_field("title", "   ".to_string());
        assert_eq!(draft.validate(), Err(DraftError::TitleRequired));
    }

    #[test]
    fn payload_carries_exactly_the_live_variant_fields() {
        let mut draft = Draft::blank(Tab::Blog);
        draft.set_field("title", "Hi".to_string());
        draft.set_field("content", "World".to_string());
        draft.set_field("author", "A".to_string());

        let payload = draft.payload();
        let object = payload.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["author", "content", "title"]);
    }

    #[test]
    fn project_payload_has_no_post_fields() {
        let payload = Draft::from_project(&sample_project()).payload();
        let object = payload.as_object().unwrap();
        assert!(object.contains_key("imageUrl"));
        assert!(!object.contains_key("content"));
        assert!(!object.contains_key("author"));
    }

    #[test]
    fn entity_paths_are_scoped_by_tab() {
        assert_eq!(Tab::Projects.entity_path("p1"), "/projects/p1");
        assert_eq!(Tab::Blog.entity_path("b1"), "/blog/b1");
    }
}
