//! Canonical identifier forms derived from a user-supplied name.
//!
//! Every generator derives its names through [`NameForm::derive`], which is
//! what keeps independently generated files in agreement: the handler of a
//! module refers to `entity.Order` because the model was rendered from the
//! very same `NameForm`.

use std::fmt;

use serde::Serialize;

/// The identifier forms of one raw name.
///
/// | Raw            | `capitalized`   | `lower`         |
/// |----------------|-----------------|-----------------|
/// | `order`        | `Order`         | `order`         |
/// | `defaultModule`| `DefaultModule` | `defaultmodule` |
/// | `HTTPLog`      | `HTTPLog`       | `httplog`       |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NameForm {
    raw: String,
    capitalized: String,
    lower: String,
}

impl NameForm {
    /// Derive the name forms of `raw`.
    ///
    /// Pure and total: never fails, reads no external state. An empty input
    /// yields empty forms; generators reject empty names before deriving.
    pub fn derive(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let capitalized = capitalize_first(&raw);
        let lower = raw.to_lowercase();

        Self {
            raw,
            capitalized,
            lower,
        }
    }

    /// The name exactly as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Type-identifier form (`{{.Name}}`).
    pub fn capitalized(&self) -> &str {
        &self.capitalized
    }

    /// Lowercase form (`{{.LowerName}}`), used for file names and routes.
    pub fn lower(&self) -> &str {
        &self.lower
    }
}

impl fmt::Display for NameForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Uppercase the first character, leave the rest untouched.
///
/// `to_uppercase` may expand a single char (`ß` -> `SS`), so this goes
/// through `extend` rather than `char::to_ascii_uppercase`.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_capitalized_and_lower() {
        let name = NameForm::derive("order");
        assert_eq!(name.raw(), "order");
        assert_eq!(name.capitalized(), "Order");
        assert_eq!(name.lower(), "order");
    }

    #[test]
    fn keeps_inner_casing_in_capitalized_form() {
        let name = NameForm::derive("defaultModule");
        assert_eq!(name.capitalized(), "DefaultModule");
        assert_eq!(name.lower(), "defaultmodule");
    }

    #[test]
    fn already_capitalized_is_unchanged() {
        let name = NameForm::derive("Order");
        assert_eq!(name.capitalized(), "Order");
        assert_eq!(name.lower(), "order");
    }

    #[test]
    fn derive_is_deterministic() {
        for raw in ["order", "OrderItem", "x", "ünicode", "snake_case"] {
            assert_eq!(NameForm::derive(raw), NameForm::derive(raw));
        }
    }

    #[test]
    fn derive_is_idempotent_on_capitalized_form() {
        let once = NameForm::derive("order");
        let twice = NameForm::derive(once.capitalized());
        assert_eq!(once.capitalized(), twice.capitalized());
        assert_eq!(once.lower(), twice.lower());
    }

    #[test]
    fn empty_input_is_total() {
        let name = NameForm::derive("");
        assert_eq!(name.capitalized(), "");
        assert_eq!(name.lower(), "");
    }

    #[test]
    fn unicode_first_letter() {
        assert_eq!(capitalize_first("éclair"), "Éclair");
    }
}
