use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::{ExtensionId, WindowId};
use crate::types::NodeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PanelEvent {
    /// A surface was materialized or refreshed and is fully attached.
    /// Observers use it to inject support scripts into the content host.
    SurfaceUpdated {
        extension: ExtensionId,
        window: WindowId,
        content_host: NodeId,
        url: String,
    },
    SurfaceRemoved {
        extension: ExtensionId,
        window: WindowId,
    },
    PanelRegistered(ExtensionId),
    PanelUnregistered(ExtensionId),
    #[serde(other)]
    Unknown,
}

#[derive(Debug)]
pub struct EventBus {
    sender: broadcast::Sender<PanelEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PanelEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: PanelEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
