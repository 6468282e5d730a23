//! URL path canonicalization matching the routing layer's rules.

use url::Url;

use crate::model::PathKey;

/// Symbolic route description resolved to a canonical page path.
#[derive(Debug, Clone)]
pub struct RouteOptions {
    pub controller: String,
    pub action: String,
    pub id: Option<String>,
}

impl RouteOptions {
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Resolves to the canonical path `/controller/action[/id]`, with the
    /// default `index` action elided when no id follows it.
    pub fn to_path(&self) -> PathKey {
        let mut path = format!("/{}", self.controller);
        if self.action != "index" || self.id.is_some() {
            path.push('/');
            path.push_str(&self.action);
        }
        if let Some(id) = &self.id {
            path.push('/');
            path.push_str(id);
        }
        canonical_path(&path)
    }
}

/// Canonicalizes a URL or path the way the routing layer does: only-path
/// (scheme and host dropped), query and fragment stripped, leading slash
/// guaranteed, trailing slash removed except for the root.
pub fn canonical_path(input: &str) -> PathKey {
    let raw = match Url::parse(input) {
        Ok(url) => url.path().to_string(),
        // not an absolute URL, treat as a raw path
        Err(_) => input
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    let mut path = if raw.starts_with('/') {
        raw
    } else {
        format!("/{raw}")
    };
    while path.len() > 1 && path.ends_with('/') {
        path.pop();
    }

    PathKey::new(path)
}
