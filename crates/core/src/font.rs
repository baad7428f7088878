use serde::{Deserialize, Serialize};

/// A font request: a family name plus a point size.
///
/// `family == None` means "the platform system font" — the consumer picks
/// whatever its toolkit considers the default face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub family: Option<String>,
    pub size: f32,
}

impl Font {
    /// The system font at `size` points.
    pub const fn system(size: f32) -> Self {
        Self { family: None, size }
    }

    /// A named font family at `size` points.
    pub fn named(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: Some(family.into()),
            size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(16.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_font_has_no_family() {
        let font = Font::system(10.0);
        assert_eq!(font.family, None);
        assert_eq!(font.size, 10.0);
    }

    #[test]
    fn named_font_keeps_family() {
        let font = Font::named("Avenir Next", 14.0);
        assert_eq!(font.family.as_deref(), Some("Avenir Next"));
    }
}
