//! Minimal demo — builds a bar configuration and pushes it to a consumer.
//!
//! ```
//! cargo run --example minimal
//! ```

use tabstrip::{
    Appearance, AppearanceUpdateable, BarItem, Color, ImageSource, ResolvedAppearance,
};

/// Stand-in for a view component: resolves the properties it owns and logs
/// them instead of rendering.
#[derive(Debug, Default)]
struct TabButtonStub {
    selected_color: Option<Color>,
    spacing: Option<f32>,
}

impl AppearanceUpdateable for TabButtonStub {
    fn update_appearance(&mut self, appearance: &Appearance, defaults: &ResolvedAppearance) {
        let resolved = appearance.resolve(defaults);
        self.selected_color = Some(resolved.state.selected_color);
        self.spacing = Some(resolved.layout.inter_item_spacing);
        tracing::info!(
            selected_color = %resolved.state.selected_color.to_hex(),
            spacing = resolved.layout.inter_item_spacing,
            "appearance applied"
        );
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let items = vec![
        BarItem::from_title("Home"),
        BarItem::new("Files", ImageSource::Named("folder".into())),
    ];
    for item in &items {
        tracing::info!(title = ?item.title(), image = ?item.image(), "bar item");
    }

    // Items can carry opaque caller context; the library never reads it.
    let settings = BarItem::from_image(ImageSource::Named("gear".into())).with_context("settings");
    tracing::info!(context = ?settings.context(), "context item");

    let appearance = Appearance::new(|a| {
        a.state.selected_color = Some(Color::RED);
        a.layout.inter_item_spacing = Some(30.0);
    });

    let mut button = TabButtonStub::default();
    button.update_appearance(&appearance, &ResolvedAppearance::default());
    tracing::info!(
        color = ?button.selected_color,
        spacing = ?button.spacing,
        "consumer state after update"
    );

    Ok(())
}
