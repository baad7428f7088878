pub mod resolved;
pub mod schema;
pub mod update;
pub mod watcher;

pub use resolved::{
    ResolvedAppearance, ResolvedBadge, ResolvedIndicator, ResolvedInteraction, ResolvedLayout,
    ResolvedSeparator, ResolvedState, ResolvedStyle, ResolvedText,
};
pub use schema::{
    Appearance, Background, Badge, BadgePosition, BarHeight, BlurStyle, CornerRadius,
    ImageRenderingMode, Indicator, IndicatorStyle, Interaction, ItemDistribution, Layout,
    LineWeight, Separator, SeparatorHeight, State, Style, Text,
};
pub use update::AppearanceUpdateable;
pub use watcher::AppearanceWatcher;

use std::path::{Path, PathBuf};
use tabstrip_core::{Error, Result};

/// Load an appearance overlay from a TOML file.  Returns
/// [`Appearance::default_appearance`] if the file doesn't exist so callers
/// always end up with a usable configuration.
///
/// Keys left out of the file deserialize to `None` and defer to the default
/// at resolution time — a file on disk is a partial override, exactly like a
/// builder closure.
pub fn load(path: impl AsRef<Path>) -> Result<Appearance> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Appearance file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(Appearance::default_appearance());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| Error::Config(format!("TOML parse error: {e}")))
}

/// Return the default appearance file path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("tabstrip").join("appearance.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_default_appearance() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load(dir.path().join("no-such-file.toml")).unwrap();
        assert_eq!(loaded, Appearance::default_appearance());
    }

    #[test]
    fn partial_file_sets_only_present_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[state]\nselected_color = \"#ff0000\"\n\n[indicator]\nbounces = true"
        )
        .unwrap();

        let loaded = load(file.path()).unwrap();

        assert_eq!(
            loaded.state.selected_color,
            Some(tabstrip_core::Color::RED)
        );
        assert_eq!(loaded.indicator.bounces, Some(true));
        assert_eq!(loaded.layout.inter_item_spacing, None);
        assert_eq!(loaded.text.font, None);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[state\nselected_color = ").unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn default_path_ends_with_appearance_file() {
        // Only inspect the suffix so the test is independent of the
        // environment it runs in.
        let path = default_path();
        assert!(path.ends_with("tabstrip/appearance.toml"));
    }
}
