use webpanel_common::{NodeId, WindowId};

/// A panel surface living in one window: the container box and the content
/// host inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceInstance {
    pub window: WindowId,
    pub container: NodeId,
    pub content_host: NodeId,
}

/// Static presentation attributes applied once when a surface is built.
#[derive(Debug, Clone)]
pub struct SurfaceStyle {
    /// Attributes of the container box.
    pub container: Vec<(&'static str, String)>,
    /// Attributes of the content host.
    pub content_host: Vec<(&'static str, String)>,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        let owned = |pairs: &[(&'static str, &str)]| {
            pairs
                .iter()
                .map(|(k, v)| (*k, v.to_string()))
                .collect::<Vec<_>>()
        };
        Self {
            container: owned(&[
                ("pack", "end"),
                ("customizable", "false"),
                ("style", "padding: 2px; min-width: 40px; min-height: 40px;"),
                ("mode", "icons"),
                ("iconsize", "small"),
            ]),
            content_host: owned(&[
                (
                    "style",
                    "-moz-appearance: none; overflow: hidden; background: transparent; padding: 4px;",
                ),
                ("type", "content"),
                ("transparent", "true"),
                ("webextension-view-type", "panel"),
                ("context", "contentAreaContextMenu"),
                ("tooltip", "aHTMLTooltip"),
                ("flex", "1"),
            ]),
        }
    }
}
