use std::path::PathBuf;

use crate::id::{ExtensionId, WindowId};
use crate::types::Slot;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure to attach a surface inside one window's chrome tree.
///
/// Always scoped to a single window; callers log it and move on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("anchor '{anchor}' for slot {slot} is missing from window {window}")]
    MissingAnchor {
        window: WindowId,
        slot: Slot,
        anchor: &'static str,
    },

    #[error("window {0} has no chrome document")]
    MissingWindow(WindowId),

    #[error("node is not part of window {0}")]
    DetachedNode(WindowId),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    #[error("unknown panel property: {0}")]
    UnknownProperty(String),

    #[error("invalid value for panel property '{property}': {reason}")]
    InvalidValue {
        property: &'static str,
        reason: String,
    },

    #[error("no panel registered for extension {0}")]
    NotRegistered(ExtensionId),
}

#[derive(Debug, thiserror::Error)]
pub enum WebPanelError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Panel(#[from] PanelError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
