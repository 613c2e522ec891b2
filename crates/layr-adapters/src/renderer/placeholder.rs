//! `{{.Key}}` placeholder renderer.
//!
//! Grammar: literal text interleaved with `{{ .Key }}` placeholders, where
//! whitespace inside the braces is optional and `Key` is an identifier.
//! A `}}` outside a placeholder is literal text. Before parsing, every
//! import-path marker is replaced by the context's import path.

use layr_core::{
    application::{TemplateError, ports::TemplateRenderer},
    domain::{IMPORT_PATH_MARKER, RenderContext, TemplateKey, TemplateSpec},
    error::LayrResult,
};
use tracing::instrument;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// One parsed piece of a template body.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

/// Renders template bodies by placeholder substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    /// Create a new placeholder renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    #[instrument(skip_all, fields(template = %template.key()))]
    fn render(&self, template: &TemplateSpec, context: &RenderContext) -> LayrResult<String> {
        let key = template.key();
        let body = substitute_import_path(key, template.body(), context)?;
        let segments = parse(key, &body)?;
        Ok(execute(key, &segments, context)?)
    }
}

fn substitute_import_path(
    key: TemplateKey,
    body: &str,
    context: &RenderContext,
) -> Result<String, TemplateError> {
    if !body.contains(IMPORT_PATH_MARKER) {
        return Ok(body.to_owned());
    }
    match context.import_path() {
        Some(path) => Ok(body.replace(IMPORT_PATH_MARKER, path)),
        None => Err(TemplateError::execute(
            key,
            "template needs an import path but none was supplied",
        )),
    }
}

fn parse(key: TemplateKey, body: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut segments = Vec::new();
    let mut rest = body;
    let mut offset = 0;

    while let Some(start) = rest.find(OPEN) {
        if start > 0 {
            segments.push(Segment::Text(&rest[..start]));
        }

        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            return Err(TemplateError::parse(
                key,
                format!("unclosed '{OPEN}' at byte {}", offset + start),
            ));
        };

        let inner = after_open[..end].trim();
        let Some(name) = inner.strip_prefix('.') else {
            return Err(TemplateError::parse(
                key,
                format!("expected '.Key' in placeholder, found '{inner}'"),
            ));
        };
        if !is_identifier(name) {
            return Err(TemplateError::parse(
                key,
                format!("invalid placeholder key '{name}'"),
            ));
        }
        segments.push(Segment::Placeholder(name));

        let consumed = start + OPEN.len() + end + CLOSE.len();
        offset += consumed;
        rest = &rest[consumed..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }
    Ok(segments)
}

fn execute(
    key: TemplateKey,
    segments: &[Segment<'_>],
    context: &RenderContext,
) -> Result<String, TemplateError> {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder(name) => match context.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    return Err(TemplateError::execute(
                        key,
                        format!("unknown key '{name}'"),
                    ));
                }
            },
        }
    }
    Ok(out)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
