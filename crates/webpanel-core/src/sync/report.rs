use webpanel_common::{PlacementError, WindowId};

/// Outcome of a `refresh_all` pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub updated: Vec<WindowId>,
    pub failed: Vec<(WindowId, PlacementError)>,
}

impl SyncReport {
    /// `true` when no window failed.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
