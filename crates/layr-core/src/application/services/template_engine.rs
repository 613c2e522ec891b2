//! Lookup plus render, shared by every generator.

use tracing::debug;

use crate::{
    application::ports::{TemplateRenderer, TemplateStore},
    domain::{RelativePath, RenderContext, TemplateKey},
    error::{Context, LayrResult},
};

/// Borrowed pair of template ports.
///
/// Generators never talk to the store or the renderer directly, so every
/// artifact gets the same stage context on failure.
#[derive(Clone, Copy)]
pub struct TemplateEngine<'a> {
    store: &'a dyn TemplateStore,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> TemplateEngine<'a> {
    pub fn new(store: &'a dyn TemplateStore, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { store, renderer }
    }

    /// Render the template under `key` for the artifact at `path`.
    pub fn render(
        &self,
        key: TemplateKey,
        context: &RenderContext,
        path: &RelativePath,
    ) -> LayrResult<String> {
        let template = self
            .store
            .get(key)
            .with_context(|| format!("render {path}"))?;
        let content = self
            .renderer
            .render(&template, context)
            .with_context(|| format!("render {path}"))?;

        debug!(template = %key, path = %path, bytes = content.len(), "artifact planned");
        Ok(content)
    }
}
