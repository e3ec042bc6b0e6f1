pub mod document;
pub mod host;
pub mod layout;
pub mod placement;

pub use document::{ChromeDocument, Element, NodeSnapshot};
pub use host::{BrowserHost, SimulatedBrowser, TabClosed, TabSelected};
