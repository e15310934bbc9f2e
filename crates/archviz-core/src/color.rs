//! Color handling for diagram styling
//!
//! This module provides the [`Color`] type, a CSS color string validated
//! through the color crate's `DynamicColor` parser. Only the original
//! spelling is kept, since Graphviz consumes color names and hex strings
//! verbatim.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A validated CSS color that remembers how it was written.
///
/// Edge and fill colors in the architecture description are plain CSS color
/// names ("red", "darkorange", ...). Parsing them up front catches typos;
/// the original string is what ends up in the DOT output.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    css: String,
}

impl Color {
    /// Create a new `Color` from a string.
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use archviz_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(_) => Ok(Self {
                css: color_str.to_string(),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the color exactly as it was written.
    pub fn as_css(&self) -> &str {
        &self.css
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_colors() {
        for name in ["red", "blue", "purple", "darkgray", "darkorange"] {
            assert!(Color::new(name).is_ok(), "{name} should parse");
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn keeps_original_spelling() {
        let color = Color::new("darkblue").unwrap();
        assert_eq!(color.as_css(), "darkblue");
        assert_eq!(color.to_string(), "darkblue");
    }

    #[test]
    fn equality_follows_the_written_form() {
        assert_eq!(Color::new("red").unwrap(), Color::new("red").unwrap());
        assert_ne!(Color::new("red").unwrap(), Color::new("#ff0000").unwrap());
    }
}
