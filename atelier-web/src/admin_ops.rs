//! Gateway-driven CRUD operations for the admin console.
//!
//! Every mutation ends with a full refetch of the active collection, so
//! the displayed list is always the server's truth rather than a
//! client-side merge.

use crate::api::{ApiError, Gateway};
use crate::editor::{DraftError, EditorForm, Mode, Tab};
use serde_json::from_value;
use shared::models::{Post, Project};
use thiserror::Error;

/// Server-authoritative collection for one tab.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityList {
    Projects(Vec<Project>),
    Posts(Vec<Post>),
}

impl EntityList {
    /// Empty list for `tab`, used before the first fetch lands.
    pub fn empty(tab: Tab) -> Self {
        match tab {
            Tab::Projects => Self::Projects(Vec::new()),
            Tab::Blog => Self::Posts(Vec::new()),
        }
    }

    /// Which tab this list belongs to.
    pub fn tab(&self) -> Tab {
        match self {
            Self::Projects(_) => Tab::Projects,
            Self::Posts(_) => Tab::Blog,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Projects(items) => items.is_empty(),
            Self::Posts(items) => items.is_empty(),
        }
    }
}

/// Why a submit did not go through.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// Caught before dispatch; no call was issued.
    #[error(transparent)]
    Invalid(#[from] DraftError),
    /// The create/update call or the follow-up refetch failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Decide whether an async outcome may still be applied.
///
/// Every gateway call is issued for the tab that was active at dispatch
/// time. By the time its reply lands the user may have switched tabs,
/// and a late reply for the previous tab must be dropped rather than
/// overwrite the now-active tab's state.
pub fn apply_if_current<T>(issued_for: Tab, active: Tab, outcome: T) -> Option<T> {
    (issued_for == active).then_some(outcome)
}

/// Fetch the full collection for `tab`.
pub async fn fetch_list<G: Gateway + ?Sized>(
    gateway: &G,
    tab: Tab,
) -> Result<EntityList, ApiError> {
    let body = gateway.get(tab.collection_path()).await?;
    match tab {
        Tab::Projects => from_value(body)
            .map(EntityList::Projects)
            .map_err(|_| ApiError::Decode),
        Tab::Blog => from_value(body)
            .map(EntityList::Posts)
            .map_err(|_| ApiError::Decode),
    }
}

/// Validate and dispatch the form, then refetch the active collection.
///
/// Nothing is sent while a required field is empty. On any error the
/// caller keeps the form exactly as it was, so no user input is lost.
pub async fn submit<G: Gateway + ?Sized>(
    gateway: &G,
    form: &EditorForm,
) -> Result<EntityList, SubmitError> {
    form.draft().validate()?;

    let tab = form.tab();
    let payload = form.draft().payload();
    match form.mode() {
        Mode::Create => {
            gateway.post(tab.collection_path(), &payload).await?;
        }
        Mode::Edit(id) => {
            gateway.put(&tab.entity_path(id), &payload).await?;
        }
    }

    Ok(fetch_list(gateway, tab).await?)
}

/// Delete `id` from `tab` after explicit confirmation, then refetch.
///
/// Returns `Ok(None)` without issuing any call when the confirmation is
/// declined. A failed delete leaves the displayed list untouched.
pub async fn delete_entity<G, F>(
    gateway: &G,
    tab: Tab,
    id: &str,
    confirm: F,
) -> Result<Option<EntityList>, ApiError>
where
    G: Gateway + ?Sized,
    F: FnOnce(&str) -> bool,
{
    if !confirm("Delete this record? This cannot be undone.") {
        return Ok(None);
    }

    gateway.delete(&tab.entity_path(id)).await?;
    fetch_list(gateway, tab).await.map(Some)
}
