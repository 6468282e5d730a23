//! Action reference normalization.

use std::fmt;

/// Reference to a controller action or named fragment under test.
///
/// A bare name is the single-controller (functional) shorthand; the qualified
/// form names the controller explicitly, as integration tests must.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRef {
    Name(String),
    Qualified {
        controller: Option<String>,
        action: String,
        suffix: Option<String>,
    },
}

impl ActionRef {
    /// Bare name referring to an action or fragment of the current controller.
    pub fn name(name: impl Into<String>) -> Self {
        ActionRef::Name(name.into())
    }

    /// Fully qualified controller/action reference.
    pub fn qualified(controller: impl Into<String>, action: impl Into<String>) -> Self {
        ActionRef::Qualified {
            controller: Some(controller.into()),
            action: action.into(),
            suffix: None,
        }
    }

    /// Attaches an action suffix, qualifying a bare name if needed.
    pub fn with_suffix(self, suffix: impl Into<String>) -> Self {
        let (controller, action) = match self.normalize() {
            ActionRef::Qualified {
                controller, action, ..
            } => (controller, action),
            ActionRef::Name(action) => (None, action),
        };
        ActionRef::Qualified {
            controller,
            action,
            suffix: Some(suffix.into()),
        }
    }

    /// Total normalization: a bare name is equivalent to a qualified
    /// reference carrying only the action.
    pub fn normalize(self) -> Self {
        match self {
            ActionRef::Name(action) => ActionRef::Qualified {
                controller: None,
                action,
                suffix: None,
            },
            qualified => qualified,
        }
    }

    pub fn action(&self) -> &str {
        match self {
            ActionRef::Name(name) => name,
            ActionRef::Qualified { action, .. } => action,
        }
    }

    pub fn controller(&self) -> Option<&str> {
        match self {
            ActionRef::Name(_) => None,
            ActionRef::Qualified { controller, .. } => controller.as_deref(),
        }
    }

    pub fn suffix(&self) -> Option<&str> {
        match self {
            ActionRef::Name(_) => None,
            ActionRef::Qualified { suffix, .. } => suffix.as_deref(),
        }
    }

    /// Whether the reference carries an explicit controller identity.
    pub fn has_controller(&self) -> bool {
        self.controller().is_some()
    }
}

impl fmt::Display for ActionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionRef::Name(name) => f.write_str(name),
            ActionRef::Qualified {
                controller,
                action,
                suffix,
            } => {
                if let Some(controller) = controller {
                    write!(f, "{controller}/")?;
                }
                f.write_str(action)?;
                if let Some(suffix) = suffix {
                    write!(f, "/{suffix}")?;
                }
                Ok(())
            }
        }
    }
}
