pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, PanelError, PlacementError, WebPanelError};
pub use events::{EventBus, PanelEvent};
pub use id::{make_widget_id, ExtensionId, SubscriptionId, TabId, WindowId};
pub use types::{NodeId, PanelProperty, PropertyValue, ShutdownReason, Slot};

pub type Result<T> = std::result::Result<T, WebPanelError>;
