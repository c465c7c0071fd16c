//! Site change value objects

use serde::{Deserialize, Serialize};

/// Kind of mutation a [`SiteChange`] applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Create,
    Update,
    Delete,
}

/// A single page mutation returned by the generator (Value Object)
///
/// Applying it to a page set is the caller's job; see
/// [`apply_changes`](super::page::apply_changes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteChange {
    pub name: String,
    pub path: String,
    #[serde(default, alias = "html")]
    pub html_content: String,
    pub action: ChangeAction,
}

impl SiteChange {
    pub fn create(
        name: impl Into<String>,
        path: impl Into<String>,
        html: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            html_content: html.into(),
            action: ChangeAction::Create,
        }
    }

    pub fn update(
        name: impl Into<String>,
        path: impl Into<String>,
        html: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            html_content: html.into(),
            action: ChangeAction::Update,
        }
    }

    pub fn delete(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            html_content: String::new(),
            action: ChangeAction::Delete,
        }
    }
}
