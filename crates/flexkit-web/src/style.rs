// crates/flexkit-web/src/style.rs

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use flexkit_core::{FlexAlign, FlexDirection, FlexJustify};

/// Spacing prop on the web variant.
///
/// `Scale(n)` runs through the configured gap calculator (Tailwind-like rem
/// scale by default). `Css` is the escape hatch for arbitrary CSS lengths
/// and bypasses the calculator entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Space {
    Scale(f32),
    Css(String),
}

impl From<f32> for Space {
    fn from(value: f32) -> Self {
        Space::Scale(value)
    }
}

impl From<i32> for Space {
    fn from(value: i32) -> Self {
        Space::Scale(value as f32)
    }
}

impl From<&str> for Space {
    fn from(value: &str) -> Self {
        Space::Css(value.to_string())
    }
}

impl From<String> for Space {
    fn from(value: String) -> Self {
        Space::Css(value)
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::Scale(n) => write!(f, "{n}"),
            Space::Css(s) => f.write_str(s),
        }
    }
}

/// Ordered CSS declaration bag.
///
/// Declarations keep insertion order; `set` on an existing property
/// overwrites in place. Serializes as a property -> value map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CssStyle {
    decls: Vec<(String, String)>,
}

impl CssStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration, replacing any existing value for the property.
    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        match self.decls.iter_mut().find(|(p, _)| p == property) {
            Some(decl) => decl.1 = value,
            None => self.decls.push((property.to_string(), value)),
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, property: &str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.decls.iter().any(|(p, _)| p == property)
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn decls(&self) -> impl Iterator<Item = (&str, &str)> {
        self.decls.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Merge this (resolved base) style over a caller-supplied inline style.
    ///
    /// Explicit two-step merge: copy the caller fields, then overwrite with
    /// the base fields, so component-derived layout properties always win
    /// while non-conflicting caller properties pass through.
    pub fn merged_over(&self, user: &CssStyle) -> CssStyle {
        let mut merged = user.clone();
        for (property, value) in &self.decls {
            merged.set(property, value.clone());
        }
        merged
    }
}

impl fmt::Display for CssStyle {
    /// Inline-style rendering: `display:flex;flex-direction:row;...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (property, value) in &self.decls {
            if !first {
                f.write_str(";")?;
            }
            write!(f, "{property}:{value}")?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for CssStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.decls.len()))?;
        for (property, value) in &self.decls {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

/// Build the base descriptor for one distinct style key.
pub(crate) fn base_style(
    direction: FlexDirection,
    full_width: bool,
    full_height: bool,
    align: FlexAlign,
    justify: FlexJustify,
    gap: String,
) -> CssStyle {
    let mut style = CssStyle::new()
        .with("display", "flex")
        .with("flex-direction", direction.as_keyword())
        .with("align-items", align.as_keyword())
        .with("justify-content", justify.as_keyword())
        .with("gap", gap);
    if full_width {
        style.set("width", "100%");
    }
    if full_height {
        style.set("height", "100%");
    }
    style
}
