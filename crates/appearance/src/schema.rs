use serde::{Deserialize, Serialize};
use tabstrip_core::{Color, EdgeInsets, Font, Size};

/// Appearance configuration for a tab bar.
///
/// Eight independent groups, every field optional: `None` means "defer to
/// the default".  No cross-field validation happens here — conflicting
/// combinations (say `bounces` and `compresses` both on) are legal to store,
/// and reconciling them is the renderer's concern.
///
/// Built with [`Appearance::new`], which seeds every field with its default
/// before the caller's overrides run.  Parsed from TOML, any subset of keys
/// is valid; missing keys stay `None`.
///
/// Treat a constructed value as a snapshot: hand it to consumers and do not
/// mutate it afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    /// The indicator configuration.
    pub indicator: Indicator,
    /// Bottom separator configuration.
    pub separator: Separator,
    /// The selection state configuration.
    pub state: State,
    /// Text display configuration.
    pub text: Text,
    /// Layout configuration.
    pub layout: Layout,
    /// Bar style configuration.
    pub style: Style,
    /// Bar interaction configuration.
    pub interaction: Interaction,
    /// Badge display configuration.
    pub badge: Badge,
}

impl Appearance {
    /// Build an appearance in two steps: every field is populated with its
    /// default, then `build` is invoked exactly once to overwrite any
    /// subset.  Fields the closure does not touch keep their default.
    ///
    /// Construction cannot fail; the closure has unrestricted write access
    /// to every field.
    pub fn new(build: impl FnOnce(&mut Appearance)) -> Self {
        let mut appearance = Self::default_appearance();
        build(&mut appearance);
        appearance
    }

    /// The canonical all-defaults appearance: every field in every group is
    /// `Some`.  Derived from the default [`ResolvedAppearance`] so the
    /// default table has a single home.
    ///
    /// [`ResolvedAppearance`]: crate::resolved::ResolvedAppearance
    pub fn default_appearance() -> Self {
        crate::resolved::ResolvedAppearance::default().into_partial()
    }
}

// ── Indicator ─────────────────────────────────────────────────────────────────

/// Configuration for the active-item indicator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Indicator {
    /// The preferred style to use for the indicator.
    /// This is optionally honoured by the bar.
    pub preferred_style: Option<IndicatorStyle>,
    /// The color of the bar indicator.
    pub color: Option<Color>,
    /// The weight (thickness) of the bar indicator if using a line indicator.
    pub line_weight: Option<LineWeight>,
    /// Whether the indicator transition is progressive.
    pub is_progressive: Option<bool>,
    /// Whether the indicator bounces at the end of page ranges.
    pub bounces: Option<bool>,
    /// Whether the indicator compresses at the end of page ranges
    /// (ignored by renderers when bouncing is enabled).
    pub compresses: Option<bool>,
    /// Whether to use rounded corners on line indicators.
    pub use_rounded_corners: Option<bool>,
}

/// Visual style of the active-item indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorStyle {
    Line,
    Dot,
    Chevron,
    Clear,
}

/// Weight of a line indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineWeight {
    Thin,
    Normal,
    Thick,
}

// ── Separator ─────────────────────────────────────────────────────────────────

/// Configuration for the separator at the bottom of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Separator {
    /// Edge insets for the separator relative to the bar.
    pub edge_insets: Option<EdgeInsets>,
    /// The height of the separator.
    pub height: Option<SeparatorHeight>,
    /// Color of the separator.
    pub color: Option<Color>,
}

/// Height of the bottom separator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorHeight {
    /// The platform hairline height.
    Default,
    /// An explicit height in points.
    Custom(f32),
}

// ── Interaction ───────────────────────────────────────────────────────────────

/// Configuration for user interaction with the bar.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Interaction {
    /// Whether user scroll is enabled on a scrolling bar.
    pub is_scroll_enabled: Option<bool>,
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Configuration for item layout within the bar.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// The spacing between items in the bar.
    pub inter_item_spacing: Option<f32>,
    /// The spacing at the edge of the items in the bar.
    pub edge_inset: Option<f32>,
    /// The height for the bar.
    pub height: Option<BarHeight>,
    /// The vertical padding between an item and the bar bounds.
    pub item_vertical_padding: Option<f32>,
    /// How items in the bar should be distributed.
    pub item_distribution: Option<ItemDistribution>,
    /// The minimum width for an item.
    pub minimum_item_width: Option<f32>,
    /// Whether to extend the background edge insets in certain scenarios,
    /// e.g. so the background runs underneath an adjacent system bar.
    pub extend_background_edge_insets: Option<bool>,
}

/// Height of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarHeight {
    /// Size the bar to fit its content.
    Auto,
    /// An explicit height in points.
    Custom(f32),
}

/// The distribution of items within the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemDistribution {
    /// Items are laid out from the leading edge of the bar.
    LeftAligned,
    /// Items are laid out from the center of the bar.
    Centered,
    /// Items are padded with extra inter-item spacing if laying them out
    /// normally doesn't fill the entire width of the bar.  Only applicable
    /// to scrolling bars.
    Fill,
}

// ── State ─────────────────────────────────────────────────────────────────────

/// Item colours for the selected / unselected states.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    /// The color to use for selected items in the bar (text/images etc.).
    pub selected_color: Option<Color>,
    /// The color to use for unselected items in the bar (text/images etc.).
    pub color: Option<Color>,
}

// ── Style ─────────────────────────────────────────────────────────────────────

/// Configuration for the overall style of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// The background style for the bar.
    pub background: Option<Background>,
    /// Whether to show a fade on the items at the bounds edge of a
    /// scrolling bar.
    pub show_edge_fade: Option<bool>,
    /// The image rendering mode for items that have an image.
    pub image_rendering_mode: Option<ImageRenderingMode>,
}

/// Background style for the bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    /// A translucent blur of the content behind the bar.
    Blur(BlurStyle),
    /// A solid color fill.
    Solid(Color),
    /// No background.
    Clear,
}

/// Blur intensity for [`Background::Blur`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurStyle {
    ExtraLight,
    Light,
    Dark,
}

/// How item images are recoloured when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageRenderingMode {
    /// Draw the image as supplied.
    AlwaysOriginal,
    /// Draw the image as a template, tinted with the item state color.
    AlwaysTemplate,
}

// ── Text ──────────────────────────────────────────────────────────────────────

/// Fonts for item text labels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Text {
    /// The font to use for text labels in the bar.
    pub font: Option<Font>,
    /// The font to use for the selected item's text label.
    pub selected_font: Option<Font>,
}

// ── Badge ─────────────────────────────────────────────────────────────────────

/// Configuration for the badge displayed alongside an item title.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Badge {
    /// The font to use for the badge text.
    pub font: Option<Font>,
    /// The text color for the badge text.
    pub text_color: Option<Color>,
    /// The color of the badge that the text is rendered on top of.
    pub badge_color: Option<Color>,
    /// The position of the badge in relation to the title text.
    pub position: Option<BadgePosition>,
    /// The amount of space between the badge and the title text.
    pub spacing: Option<f32>,
    /// The margin between the badge text and the edge of the badge.
    pub insets: Option<Size>,
    /// The width of the border around the badge.
    pub border_width: Option<f32>,
    /// The color of the border around the badge.
    pub border_color: Option<Color>,
    /// The corner radius of the badge.
    pub corner_radius: Option<CornerRadius>,
}

/// The position of the badge in relation to the title text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgePosition {
    /// The badge is displayed before the title text.
    Leading,
    /// The badge is displayed after the title text.
    Trailing,
}

/// The corner radius of the badge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerRadius {
    /// Half of the badge height, making the badge pill shaped.
    FullyRounded,
    /// Zero, giving the badge sharp corners.
    Square,
    /// An explicit radius in points.
    Custom(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_appearance_is_fully_populated() {
        let a = Appearance::default_appearance();

        assert!(a.indicator.preferred_style.is_some());
        assert!(a.indicator.color.is_some());
        assert!(a.indicator.line_weight.is_some());
        assert!(a.indicator.is_progressive.is_some());
        assert!(a.indicator.bounces.is_some());
        assert!(a.indicator.compresses.is_some());
        assert!(a.indicator.use_rounded_corners.is_some());

        assert!(a.separator.edge_insets.is_some());
        assert!(a.separator.height.is_some());
        assert!(a.separator.color.is_some());

        assert!(a.interaction.is_scroll_enabled.is_some());

        assert!(a.layout.inter_item_spacing.is_some());
        assert!(a.layout.edge_inset.is_some());
        assert!(a.layout.height.is_some());
        assert!(a.layout.item_vertical_padding.is_some());
        assert!(a.layout.item_distribution.is_some());
        assert!(a.layout.minimum_item_width.is_some());
        assert!(a.layout.extend_background_edge_insets.is_some());

        assert!(a.state.selected_color.is_some());
        assert!(a.state.color.is_some());

        assert!(a.style.background.is_some());
        assert!(a.style.show_edge_fade.is_some());
        assert!(a.style.image_rendering_mode.is_some());

        assert!(a.text.font.is_some());
        assert!(a.text.selected_font.is_some());

        assert!(a.badge.font.is_some());
        assert!(a.badge.text_color.is_some());
        assert!(a.badge.badge_color.is_some());
        assert!(a.badge.position.is_some());
        assert!(a.badge.spacing.is_some());
        assert!(a.badge.insets.is_some());
        assert!(a.badge.border_width.is_some());
        assert!(a.badge.border_color.is_some());
        assert!(a.badge.corner_radius.is_some());
    }

    #[test]
    fn builder_overrides_only_touched_fields() {
        let a = Appearance::new(|a| {
            a.layout.inter_item_spacing = Some(30.0);
        });

        assert_eq!(a.layout.inter_item_spacing, Some(30.0));
        // Untouched fields keep their defaults.
        assert_eq!(a.layout.edge_inset, Some(16.0));
        assert_eq!(a.badge.spacing, Some(5.0));
    }

    #[test]
    fn noop_builder_equals_default_appearance() {
        assert_eq!(Appearance::new(|_| {}), Appearance::default_appearance());
    }

    #[test]
    fn equivalent_builders_yield_equal_values() {
        let build = |a: &mut Appearance| {
            a.state.selected_color = Some(tabstrip_core::Color::RED);
            a.indicator.bounces = Some(true);
        };
        assert_eq!(Appearance::new(build), Appearance::new(build));
    }

    #[test]
    fn conflicting_fields_are_storable() {
        // Conflict resolution belongs to the renderer, not this layer.
        let a = Appearance::new(|a| {
            a.indicator.bounces = Some(true);
            a.indicator.compresses = Some(true);
        });
        assert_eq!(a.indicator.bounces, Some(true));
        assert_eq!(a.indicator.compresses, Some(true));
    }

    #[test]
    fn parse_partial_toml() {
        let raw = r##"
            [layout]
            inter_item_spacing = 30.0
            item_distribution = "centered"

            [style]
            background = { solid = "#ffffff" }
        "##;
        let a: Appearance = toml::from_str(raw).unwrap();

        assert_eq!(a.layout.inter_item_spacing, Some(30.0));
        assert_eq!(a.layout.item_distribution, Some(ItemDistribution::Centered));
        assert_eq!(
            a.style.background,
            Some(Background::Solid(tabstrip_core::Color::WHITE))
        );
        // Absent keys stay unset.
        assert_eq!(a.layout.edge_inset, None);
        assert_eq!(a.badge.spacing, None);
    }
}
