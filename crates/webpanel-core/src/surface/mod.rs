//! Panel surfaces: one container plus content host per window.

mod factory;
mod types;

pub use factory::SurfaceFactory;
pub use types::{SurfaceInstance, SurfaceStyle};
