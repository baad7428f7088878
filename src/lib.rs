//! tabstrip — the configuration and item-model layer for a tab bar control.
//!
//! Two data structures compose into the bar's configuration surface:
//! [`BarItem`], the display content for one tab, and [`Appearance`], a
//! partially-specified styling overlay merged against library defaults.
//! View components receive both the overlay and the fully-populated
//! [`ResolvedAppearance`] defaults through [`AppearanceUpdateable`].
//!
//! ```
//! use tabstrip::{Appearance, BarItem, ResolvedAppearance};
//!
//! let items = vec![BarItem::from_title("Home"), BarItem::from_title("Files")];
//!
//! let appearance = Appearance::new(|a| {
//!     a.layout.inter_item_spacing = Some(30.0);
//! });
//! let resolved = appearance.resolve(&ResolvedAppearance::default());
//!
//! assert_eq!(items[0].title(), Some("Home"));
//! assert_eq!(resolved.layout.inter_item_spacing, 30.0);
//! assert_eq!(resolved.layout.edge_inset, 16.0);
//! ```

pub use tabstrip_appearance::{
    default_path, load, Appearance, AppearanceUpdateable, AppearanceWatcher, Background, Badge,
    BadgePosition, BarHeight, BlurStyle, CornerRadius, ImageRenderingMode, Indicator,
    IndicatorStyle, Interaction, ItemDistribution, Layout, LineWeight, ResolvedAppearance,
    ResolvedBadge, ResolvedIndicator, ResolvedInteraction, ResolvedLayout, ResolvedSeparator,
    ResolvedState, ResolvedStyle, ResolvedText, Separator, SeparatorHeight, State, Style, Text,
};
pub use tabstrip_core::{
    AccessibilityTraits, BarItem, Color, EdgeInsets, Error, Font, ImageSource, Result, Size,
};
