//! Passthrough inline style

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered CSS declarations, rendered as an inline `style` attribute
///
/// Values are passed through untouched; nothing is validated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(IndexMap<String, String>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// The container style: an unstyled, clickable button
    pub fn button_reset() -> Self {
        Self::new()
            .set("background", "none")
            .set("border", "none")
            .set("padding", "0")
            .set("margin", "0")
            .set("cursor", "pointer")
    }

    /// Add or replace a declaration; a replaced key keeps its position
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `self` followed by `other`; keys in `other` win
    pub fn merged(&self, other: &Style) -> Style {
        let mut merged = self.clone();
        for (property, value) in other.iter() {
            merged.0.insert(property.to_string(), value.to_string());
        }
        merged
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Style(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_insertion_order() {
        let style = Style::new().set("opacity", "0.5").set("color", "red");
        assert_eq!(style.to_string(), "opacity: 0.5; color: red;");
    }

    #[test]
    fn merged_lets_later_keys_win() {
        let base = Style::new().set("transform", "rotate(0deg)").set("color", "red");
        let caller = Style::new().set("color", "blue");
        let merged = base.merged(&caller);
        assert_eq!(merged.get("color"), Some("blue"));
        assert_eq!(merged.to_string(), "transform: rotate(0deg); color: blue;");
    }

    #[test]
    fn button_reset_is_unstyled() {
        let style = Style::button_reset();
        assert_eq!(style.get("border"), Some("none"));
        assert_eq!(style.get("cursor"), Some("pointer"));
    }
}
