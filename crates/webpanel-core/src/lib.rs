//! Extension panels embedded in browser window chrome.
//!
//! Provides:
//! - A per-tab override store layered over extension defaults
//! - Surface construction and placement in every window
//! - Window synchronization on tab selection and property writes
//! - A per-extension controller and the registry that owns them
//! - The `setPanel` / `getPanel` extension API

pub mod api;
pub mod controller;
pub mod registry;
pub mod store;
pub mod surface;
pub mod sync;

pub use api::{GetPanelDetails, PanelsApi, SetPanelDetails};
pub use controller::{ExtensionInfo, PanelController};
pub use registry::PanelRegistry;
pub use store::{DefaultsRecord, EffectiveProperties, OverrideRecord, OverrideStore};
pub use surface::{SurfaceFactory, SurfaceInstance, SurfaceStyle};
pub use sync::{SyncReport, WindowSynchronizer};
