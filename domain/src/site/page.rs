//! Page entity and page-set mutation

use serde::{Deserialize, Serialize};

use super::change::{ChangeAction, SiteChange};

/// A named HTML document at a path (Entity)
///
/// Pages are identified by `path` within a page set. Fields the client
/// attaches beyond the known ones are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub name: String,
    pub path: String,
    #[serde(default, alias = "htmlContent")]
    pub html: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Page {
    pub fn new(name: impl Into<String>, path: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            html: html.into(),
            is_active: false,
            extra: serde_json::Map::new(),
        }
    }

    pub fn active(mut self) -> Self {
        self.is_active = true;
        self
    }
}

/// Apply generator changes to a client-held page set, in order.
///
/// - `create` appends one page, marked active
/// - `update` replaces the HTML of the page at the same path and marks it active
/// - `delete` removes the page at the same path
///
/// Pages not named by a change are left untouched. Updates and deletes of
/// unknown paths are no-ops; create does not check for duplicate paths.
pub fn apply_changes(pages: &mut Vec<Page>, changes: &[SiteChange]) {
    for change in changes {
        match change.action {
            ChangeAction::Create => {
                pages.push(
                    Page::new(&change.name, &change.path, &change.html_content).active(),
                );
            }
            ChangeAction::Update => {
                if let Some(page) = pages.iter_mut().find(|p| p.path == change.path) {
                    page.html = change.html_content.clone();
                    page.is_active = true;
                }
            }
            ChangeAction::Delete => {
                pages.retain(|p| p.path != change.path);
            }
        }
    }
}
