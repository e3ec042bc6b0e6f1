use tracing::debug;
use webpanel_chrome::placement;
use webpanel_chrome::ChromeDocument;
use webpanel_common::{PlacementError, WindowId};

use super::types::{SurfaceInstance, SurfaceStyle};
use crate::store::EffectiveProperties;

/// Builds the per-window surface of one extension's panel.
#[derive(Debug, Clone)]
pub struct SurfaceFactory {
    surface_id: String,
    content_host_id: String,
    fallback_title: String,
    style: SurfaceStyle,
}

impl SurfaceFactory {
    pub fn new(surface_id: impl Into<String>, fallback_title: impl Into<String>) -> Self {
        let surface_id = surface_id.into();
        Self {
            content_host_id: format!("inner-{surface_id}"),
            surface_id,
            fallback_title: fallback_title.into(),
            style: SurfaceStyle::default(),
        }
    }

    pub fn with_style(mut self, style: SurfaceStyle) -> Self {
        self.style = style;
        self
    }

    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    pub fn content_host_id(&self) -> &str {
        &self.content_host_id
    }

    /// Label shown for `title`, falling back to the extension name.
    pub fn label_for<'a>(&'a self, title: &'a str) -> &'a str {
        if title.is_empty() {
            &self.fallback_title
        } else {
            title
        }
    }

    /// The surface already attached to `doc`, if any.
    pub fn find(&self, doc: &ChromeDocument, window: WindowId) -> Option<SurfaceInstance> {
        let container = doc.get_element_by_id(&self.surface_id)?;
        let content_host = doc
            .children(container)
            .iter()
            .copied()
            .find(|&n| {
                doc.element(n).and_then(|el| el.id()) == Some(self.content_host_id.as_str())
            })?;
        Some(SurfaceInstance {
            window,
            container,
            content_host,
        })
    }

    /// Return the window's surface, building and placing one if needed.
    ///
    /// The boolean is `true` when the surface was created by this call. A new
    /// surface gets its identity, label and collapsed flag but no content
    /// URL. If it cannot be placed it is discarded and the error returned.
    pub fn ensure(
        &self,
        doc: &mut ChromeDocument,
        window: WindowId,
        props: &EffectiveProperties,
    ) -> Result<(SurfaceInstance, bool), PlacementError> {
        if let Some(existing) = self.find(doc, window) {
            return Ok((existing, false));
        }
        // A container that lost its content host is rebuilt from scratch.
        if let Some(stale) = doc.get_element_by_id(&self.surface_id) {
            doc.remove(stale);
        }

        let container = doc.create_element_with_id("box", &self.surface_id);
        doc.set_attribute(container, "collapsed", props.renders_collapsed().to_string());
        doc.set_attribute(container, "label", self.label_for(&props.title));
        for (name, value) in &self.style.container {
            doc.set_attribute(container, name, value.as_str());
        }

        let content_host = doc.create_element_with_id("browser", &self.content_host_id);
        for (name, value) in &self.style.content_host {
            doc.set_attribute(content_host, name, value.as_str());
        }
        doc.append_child(container, content_host);

        if let Err(e) = placement::place(doc, window, props.location, container) {
            doc.remove(container);
            return Err(e);
        }

        debug!(%window, surface = %self.surface_id, slot = %props.location, "surface created");
        Ok((
            SurfaceInstance {
                window,
                container,
                content_host,
            },
            true,
        ))
    }

    /// Remove the window's surface. Returns `true` if one was attached.
    pub fn remove(&self, doc: &mut ChromeDocument) -> bool {
        match doc.get_element_by_id(&self.surface_id) {
            Some(container) => doc.remove(container),
            None => false,
        }
    }
}
