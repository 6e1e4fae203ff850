//! Template rendering — pure placeholder substitution.
//!
//! The renderer is a trait so the substitution backend is independent of
//! the emitted language: the assembly algorithm only ever asks for
//! `render(template, context)` and never inspects the text it splices.

use std::collections::BTreeMap;

/// The merged key→text structure fed into a template. Ordered so iteration
/// (and therefore anything derived from it) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    values: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a substitution. Keys are distinct by construction — the context
    /// builders never write the same placeholder twice.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A rendering backend: substitute a context into a template.
///
/// Implementations must be pure — identical `(template, context)` pairs
/// yield byte-identical output.
pub trait TemplateRenderer {
    fn render(&self, template: &str, context: &RenderContext) -> String;
}

/// The default backend: replaces `{{key}}` markers with context values.
/// Markers with no context entry are left untouched.
pub struct PlaceholderRenderer;

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &str, context: &RenderContext) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let key = after[..end].trim();
                    match context.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(&after[..end]);
                            out.push_str("}}");
                        }
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    // Unterminated marker: emit verbatim.
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}
