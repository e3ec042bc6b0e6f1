//! Per-tab override store.

mod operations;
mod types;

pub use operations::OverrideStore;
pub use types::{DefaultsRecord, EffectiveProperties, OverrideRecord};
