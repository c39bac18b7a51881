use serde::{Deserialize, Serialize};

use super::page::Page;
use super::payload::NavigationPayload;

/// The navigation a crumb triggers when clicked: a page plus the partial
/// scope it re-supplies, so depth clearing does not discard what the
/// click intended to keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrumbLink {
    pub page: Page,
    pub payload: NavigationPayload,
}

/// One segment of the breadcrumb trail. The final segment (the current
/// page) never carries a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crumb {
    pub label: String,
    pub navigate: Option<CrumbLink>,
}

impl Crumb {
    pub fn terminal(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            navigate: None,
        }
    }

    pub fn link(label: impl Into<String>, page: Page, payload: NavigationPayload) -> Self {
        Self {
            label: label.into(),
            navigate: Some(CrumbLink { page, payload }),
        }
    }
}
