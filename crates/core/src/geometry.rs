use serde::{Deserialize, Serialize};

/// Insets from each edge of a rectangle, in logical points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: Self = Self { top: 0.0, left: 0.0, bottom: 0.0, right: 0.0 };

    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self { top, left, bottom, right }
    }

    /// Same inset on all four edges.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// A width/height pair in logical points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_insets() {
        let insets = EdgeInsets::uniform(4.0);
        assert_eq!(insets, EdgeInsets::new(4.0, 4.0, 4.0, 4.0));
    }

    #[test]
    fn zero_is_default() {
        assert_eq!(EdgeInsets::default(), EdgeInsets::ZERO);
        assert_eq!(Size::default(), Size::ZERO);
    }
}
