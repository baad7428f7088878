//! The fully-resolved counterpart of the partial [`Appearance`] schema.
//!
//! Every `Resolved*` struct mirrors its schema group field-for-field with no
//! `Option`s, and its `Default` impl carries the canonical default table.
//! [`Appearance::resolve`] merges a partial appearance over these defaults
//! with last-write-wins per field — pure, total, and the type system
//! guarantees the fallback chain terminates.

use crate::schema::{
    Appearance, Background, Badge, BadgePosition, BarHeight, BlurStyle, CornerRadius,
    ImageRenderingMode, Indicator, IndicatorStyle, Interaction, ItemDistribution, Layout,
    LineWeight, Separator, SeparatorHeight, State, Style, Text,
};
use tabstrip_core::{Color, EdgeInsets, Font, Size};

/// Fully-resolved bar appearance — every field has a concrete value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedAppearance {
    pub indicator: ResolvedIndicator,
    pub separator: ResolvedSeparator,
    pub state: ResolvedState,
    pub text: ResolvedText,
    pub layout: ResolvedLayout,
    pub style: ResolvedStyle,
    pub interaction: ResolvedInteraction,
    pub badge: ResolvedBadge,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedIndicator {
    pub preferred_style: IndicatorStyle,
    pub color: Color,
    pub line_weight: LineWeight,
    pub is_progressive: bool,
    pub bounces: bool,
    pub compresses: bool,
    pub use_rounded_corners: bool,
}

impl Default for ResolvedIndicator {
    fn default() -> Self {
        Self {
            preferred_style: IndicatorStyle::Line,
            color: Color::TINT,
            line_weight: LineWeight::Normal,
            is_progressive: false,
            bounces: false,
            compresses: false,
            use_rounded_corners: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSeparator {
    pub edge_insets: EdgeInsets,
    pub height: SeparatorHeight,
    pub color: Color,
}

impl Default for ResolvedSeparator {
    fn default() -> Self {
        Self {
            edge_insets: EdgeInsets::ZERO,
            height: SeparatorHeight::Default,
            color: Color::TRANSPARENT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedInteraction {
    pub is_scroll_enabled: bool,
}

impl Default for ResolvedInteraction {
    fn default() -> Self {
        Self {
            is_scroll_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLayout {
    pub inter_item_spacing: f32,
    pub edge_inset: f32,
    pub height: BarHeight,
    pub item_vertical_padding: f32,
    pub item_distribution: ItemDistribution,
    pub minimum_item_width: f32,
    pub extend_background_edge_insets: bool,
}

impl Default for ResolvedLayout {
    fn default() -> Self {
        Self {
            inter_item_spacing: 20.0,
            edge_inset: 16.0,
            height: BarHeight::Auto,
            item_vertical_padding: 12.0,
            item_distribution: ItemDistribution::LeftAligned,
            minimum_item_width: 44.0,
            extend_background_edge_insets: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedState {
    pub selected_color: Color,
    pub color: Color,
}

impl Default for ResolvedState {
    fn default() -> Self {
        Self {
            selected_color: Color::BLACK,
            color: Color::BLACK.with_alpha(0.5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub background: Background,
    pub show_edge_fade: bool,
    pub image_rendering_mode: ImageRenderingMode,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            background: Background::Blur(BlurStyle::ExtraLight),
            show_edge_fade: false,
            image_rendering_mode: ImageRenderingMode::AlwaysTemplate,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedText {
    pub font: Font,
    pub selected_font: Font,
}

impl Default for ResolvedText {
    fn default() -> Self {
        Self {
            font: Font::system(16.0),
            selected_font: Font::system(16.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBadge {
    pub font: Font,
    pub text_color: Color,
    pub badge_color: Color,
    pub position: BadgePosition,
    pub spacing: f32,
    pub insets: Size,
    pub border_width: f32,
    pub border_color: Color,
    pub corner_radius: CornerRadius,
}

impl Default for ResolvedBadge {
    fn default() -> Self {
        Self {
            font: Font::system(10.0),
            text_color: Color::WHITE,
            badge_color: Color::RED,
            position: BadgePosition::Trailing,
            spacing: 5.0,
            insets: Size::new(5.0, 2.0),
            border_width: 0.0,
            border_color: Color::WHITE,
            corner_radius: CornerRadius::FullyRounded,
        }
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

impl Appearance {
    /// Merge this (possibly partial) appearance over a fully-populated base:
    /// fields set here win, unset fields take the base value.
    pub fn resolve(&self, defaults: &ResolvedAppearance) -> ResolvedAppearance {
        ResolvedAppearance {
            indicator: self.indicator.resolve(&defaults.indicator),
            separator: self.separator.resolve(&defaults.separator),
            state: self.state.resolve(&defaults.state),
            text: self.text.resolve(&defaults.text),
            layout: self.layout.resolve(&defaults.layout),
            style: self.style.resolve(&defaults.style),
            interaction: self.interaction.resolve(&defaults.interaction),
            badge: self.badge.resolve(&defaults.badge),
        }
    }
}

impl Indicator {
    pub fn resolve(&self, defaults: &ResolvedIndicator) -> ResolvedIndicator {
        ResolvedIndicator {
            preferred_style: self.preferred_style.unwrap_or(defaults.preferred_style),
            color: self.color.unwrap_or(defaults.color),
            line_weight: self.line_weight.unwrap_or(defaults.line_weight),
            is_progressive: self.is_progressive.unwrap_or(defaults.is_progressive),
            bounces: self.bounces.unwrap_or(defaults.bounces),
            compresses: self.compresses.unwrap_or(defaults.compresses),
            use_rounded_corners: self
                .use_rounded_corners
                .unwrap_or(defaults.use_rounded_corners),
        }
    }
}

impl Separator {
    pub fn resolve(&self, defaults: &ResolvedSeparator) -> ResolvedSeparator {
        ResolvedSeparator {
            edge_insets: self.edge_insets.unwrap_or(defaults.edge_insets),
            height: self.height.unwrap_or(defaults.height),
            color: self.color.unwrap_or(defaults.color),
        }
    }
}

impl Interaction {
    pub fn resolve(&self, defaults: &ResolvedInteraction) -> ResolvedInteraction {
        ResolvedInteraction {
            is_scroll_enabled: self.is_scroll_enabled.unwrap_or(defaults.is_scroll_enabled),
        }
    }
}

impl Layout {
    pub fn resolve(&self, defaults: &ResolvedLayout) -> ResolvedLayout {
        ResolvedLayout {
            inter_item_spacing: self.inter_item_spacing.unwrap_or(defaults.inter_item_spacing),
            edge_inset: self.edge_inset.unwrap_or(defaults.edge_inset),
            height: self.height.unwrap_or(defaults.height),
            item_vertical_padding: self
                .item_vertical_padding
                .unwrap_or(defaults.item_vertical_padding),
            item_distribution: self.item_distribution.unwrap_or(defaults.item_distribution),
            minimum_item_width: self.minimum_item_width.unwrap_or(defaults.minimum_item_width),
            extend_background_edge_insets: self
                .extend_background_edge_insets
                .unwrap_or(defaults.extend_background_edge_insets),
        }
    }
}

impl State {
    pub fn resolve(&self, defaults: &ResolvedState) -> ResolvedState {
        ResolvedState {
            selected_color: self.selected_color.unwrap_or(defaults.selected_color),
            color: self.color.unwrap_or(defaults.color),
        }
    }
}

impl Style {
    pub fn resolve(&self, defaults: &ResolvedStyle) -> ResolvedStyle {
        ResolvedStyle {
            background: self.background.unwrap_or(defaults.background),
            show_edge_fade: self.show_edge_fade.unwrap_or(defaults.show_edge_fade),
            image_rendering_mode: self
                .image_rendering_mode
                .unwrap_or(defaults.image_rendering_mode),
        }
    }
}

impl Text {
    pub fn resolve(&self, defaults: &ResolvedText) -> ResolvedText {
        ResolvedText {
            font: self.font.clone().unwrap_or_else(|| defaults.font.clone()),
            selected_font: self
                .selected_font
                .clone()
                .unwrap_or_else(|| defaults.selected_font.clone()),
        }
    }
}

impl Badge {
    pub fn resolve(&self, defaults: &ResolvedBadge) -> ResolvedBadge {
        ResolvedBadge {
            font: self.font.clone().unwrap_or_else(|| defaults.font.clone()),
            text_color: self.text_color.unwrap_or(defaults.text_color),
            badge_color: self.badge_color.unwrap_or(defaults.badge_color),
            position: self.position.unwrap_or(defaults.position),
            spacing: self.spacing.unwrap_or(defaults.spacing),
            insets: self.insets.unwrap_or(defaults.insets),
            border_width: self.border_width.unwrap_or(defaults.border_width),
            border_color: self.border_color.unwrap_or(defaults.border_color),
            corner_radius: self.corner_radius.unwrap_or(defaults.corner_radius),
        }
    }
}

impl ResolvedAppearance {
    /// Re-wrap every field in `Some`, producing the partial form with no
    /// holes.  [`Appearance::default_appearance`] is built this way so the
    /// default table is never duplicated by hand.
    pub fn into_partial(self) -> Appearance {
        Appearance {
            indicator: Indicator {
                preferred_style: Some(self.indicator.preferred_style),
                color: Some(self.indicator.color),
                line_weight: Some(self.indicator.line_weight),
                is_progressive: Some(self.indicator.is_progressive),
                bounces: Some(self.indicator.bounces),
                compresses: Some(self.indicator.compresses),
                use_rounded_corners: Some(self.indicator.use_rounded_corners),
            },
            separator: Separator {
                edge_insets: Some(self.separator.edge_insets),
                height: Some(self.separator.height),
                color: Some(self.separator.color),
            },
            state: State {
                selected_color: Some(self.state.selected_color),
                color: Some(self.state.color),
            },
            text: Text {
                font: Some(self.text.font),
                selected_font: Some(self.text.selected_font),
            },
            layout: Layout {
                inter_item_spacing: Some(self.layout.inter_item_spacing),
                edge_inset: Some(self.layout.edge_inset),
                height: Some(self.layout.height),
                item_vertical_padding: Some(self.layout.item_vertical_padding),
                item_distribution: Some(self.layout.item_distribution),
                minimum_item_width: Some(self.layout.minimum_item_width),
                extend_background_edge_insets: Some(self.layout.extend_background_edge_insets),
            },
            style: Style {
                background: Some(self.style.background),
                show_edge_fade: Some(self.style.show_edge_fade),
                image_rendering_mode: Some(self.style.image_rendering_mode),
            },
            interaction: Interaction {
                is_scroll_enabled: Some(self.interaction.is_scroll_enabled),
            },
            badge: Badge {
                font: Some(self.badge.font),
                text_color: Some(self.badge.text_color),
                badge_color: Some(self.badge.badge_color),
                position: Some(self.badge.position),
                spacing: Some(self.badge.spacing),
                insets: Some(self.badge.insets),
                border_width: Some(self.badge.border_width),
                border_color: Some(self.badge.border_color),
                corner_radius: Some(self.badge.corner_radius),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_table() {
        let d = ResolvedAppearance::default();

        assert_eq!(d.indicator.line_weight, LineWeight::Normal);
        assert_eq!(d.indicator.color, Color::TINT);
        assert!(!d.indicator.bounces);
        assert!(!d.indicator.compresses);
        assert!(!d.indicator.is_progressive);
        assert!(!d.indicator.use_rounded_corners);

        assert_eq!(d.separator.edge_insets, EdgeInsets::ZERO);
        assert_eq!(d.separator.height, SeparatorHeight::Default);
        assert_eq!(d.separator.color, Color::TRANSPARENT);

        assert_eq!(d.state.selected_color, Color::BLACK);
        assert_eq!(d.state.color, Color::BLACK.with_alpha(0.5));

        assert_eq!(d.text.font, Font::system(16.0));

        assert_eq!(d.layout.height, BarHeight::Auto);
        assert_eq!(d.layout.inter_item_spacing, 20.0);
        assert_eq!(d.layout.edge_inset, 16.0);
        assert_eq!(d.layout.item_vertical_padding, 12.0);
        assert_eq!(d.layout.item_distribution, ItemDistribution::LeftAligned);
        assert_eq!(d.layout.minimum_item_width, 44.0);
        assert!(d.layout.extend_background_edge_insets);

        assert_eq!(d.style.background, Background::Blur(BlurStyle::ExtraLight));
        assert_eq!(
            d.style.image_rendering_mode,
            ImageRenderingMode::AlwaysTemplate
        );

        assert!(d.interaction.is_scroll_enabled);

        assert_eq!(d.badge.font, Font::system(10.0));
        assert_eq!(d.badge.text_color, Color::WHITE);
        assert_eq!(d.badge.badge_color, Color::RED);
        assert_eq!(d.badge.position, BadgePosition::Trailing);
        assert_eq!(d.badge.spacing, 5.0);
        assert_eq!(d.badge.insets, Size::new(5.0, 2.0));
        assert_eq!(d.badge.border_width, 0.0);
        assert_eq!(d.badge.border_color, Color::WHITE);
        assert_eq!(d.badge.corner_radius, CornerRadius::FullyRounded);
    }

    #[test]
    fn empty_partial_resolves_to_defaults() {
        let resolved = Appearance::default().resolve(&ResolvedAppearance::default());
        assert_eq!(resolved, ResolvedAppearance::default());
    }

    #[test]
    fn set_fields_win_unset_fall_back() {
        let mut partial = Appearance::default();
        partial.layout.inter_item_spacing = Some(30.0);
        partial.state.selected_color = Some(Color::RED);

        let resolved = partial.resolve(&ResolvedAppearance::default());

        assert_eq!(resolved.layout.inter_item_spacing, 30.0);
        assert_eq!(resolved.state.selected_color, Color::RED);
        // Untouched fields come from the base.
        assert_eq!(resolved.layout.edge_inset, 16.0);
        assert_eq!(resolved.badge.spacing, 5.0);
    }

    #[test]
    fn into_partial_round_trips_through_resolve() {
        let partial = ResolvedAppearance::default().into_partial();
        let resolved = partial.resolve(&ResolvedAppearance::default());
        assert_eq!(resolved, ResolvedAppearance::default());
    }
}
