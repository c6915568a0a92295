//! Placeholder substitution for template bodies

use std::collections::BTreeMap;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Renders a template body against named values
pub trait Renderer {
    fn render(&self, template: &str, values: &BTreeMap<&'static str, String>) -> String;
}

/// Replaces `{{key}}` tokens with their values.
///
/// Tokens whose key is not present are left exactly as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer;

impl Renderer for PlaceholderRenderer {
    fn render(&self, template: &str, values: &BTreeMap<&'static str, String>) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];

            let Some(end) = after_open.find(CLOSE) else {
                // Unterminated token, keep the remainder verbatim
                out.push_str(&rest[start..]);
                return out;
            };

            let key = after_open[..end].trim();
            match values.get(key) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]),
            }
            rest = &after_open[end + CLOSE.len()..];
        }

        out.push_str(rest);
        out
    }
}
