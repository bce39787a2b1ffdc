//! Inline CSS declarations for `style` attributes.

use std::fmt;

/// Ordered list of CSS declarations.
///
/// Later declarations of the same property are kept; the browser applies
/// the last one, same as object spread in a style literal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `property:value` declaration
    pub fn with(mut self, property: impl Into<String>, value: impl AsRef<str>) -> Self {
        self.declarations
            .push((property.into(), value.as_ref().to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (property, value) in &self.declarations {
            write!(f, "{}:{};", property, value)?;
        }
        Ok(())
    }
}
