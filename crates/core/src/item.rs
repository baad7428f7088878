use bitflags::bitflags;
use std::path::PathBuf;

/// Where a consumer should find the image for an item.
///
/// The library never opens or validates the source — it is display data
/// handed through to whichever toolkit renders the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// An image file on disk.
    Path(PathBuf),
    /// A named icon resolved by the consumer (e.g. an icon-theme lookup).
    Named(String),
}

bitflags! {
    /// Accessibility trait set reported to assistive technology.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AccessibilityTraits: u32 {
        const BUTTON      = 1 << 0;
        const HEADER      = 1 << 1;
        const SELECTED    = 1 << 2;
        const STATIC_TEXT = 1 << 3;
        const IMAGE       = 1 << 4;
    }
}

/// An item to display in a bar.
///
/// A pure value: constructed once by the caller, copied by value thereafter.
/// Every constructor sets at least one of title/image — a bare item with
/// neither is not constructible through the public surface.  "Updating" an
/// item means building a new one.
///
/// `C` is an opaque caller context attached to the item for external
/// reference; the library never inspects it.
#[derive(Debug, Clone, PartialEq)]
pub struct BarItem<C = ()> {
    title: Option<String>,
    image: Option<ImageSource>,
    context: Option<C>,

    /// Label read to assistive technology in place of the title.
    pub accessibility_label: Option<String>,
    /// Longer hint describing the result of activating the item.
    pub accessibility_hint: Option<String>,
    pub accessibility_traits: Option<AccessibilityTraits>,
}

impl BarItem<()> {
    /// Create an item with a title.
    pub fn from_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            image: None,
            context: None,
            accessibility_label: None,
            accessibility_hint: None,
            accessibility_traits: None,
        }
    }

    /// Create an item with an image.
    pub fn from_image(image: ImageSource) -> Self {
        Self {
            title: None,
            image: Some(image),
            context: None,
            accessibility_label: None,
            accessibility_hint: None,
            accessibility_traits: None,
        }
    }

    /// Create an item with a title and an image.
    pub fn new(title: impl Into<String>, image: ImageSource) -> Self {
        Self {
            image: Some(image),
            ..Self::from_title(title)
        }
    }
}

impl<C> BarItem<C> {
    /// Attach caller-defined context to the item.
    ///
    /// Consumes the item so the context type can change; display content
    /// and accessibility metadata carry over unchanged.
    pub fn with_context<D>(self, context: D) -> BarItem<D> {
        BarItem {
            title: self.title,
            image: self.image,
            context: Some(context),
            accessibility_label: self.accessibility_label,
            accessibility_hint: self.accessibility_hint,
            accessibility_traits: self.accessibility_traits,
        }
    }

    /// The title to display for the item.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The image to display for the item.
    pub fn image(&self) -> Option<&ImageSource> {
        self.image.as_ref()
    }

    /// Context of the item for external reference.
    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_only() {
        let item = BarItem::from_title("Home");
        assert_eq!(item.title(), Some("Home"));
        assert_eq!(item.image(), None);
        assert_eq!(item.context(), None);
    }

    #[test]
    fn image_with_context() {
        let img = ImageSource::Named("home".into());
        let item = BarItem::from_image(img.clone()).with_context(42);
        assert_eq!(item.title(), None);
        assert_eq!(item.image(), Some(&img));
        assert_eq!(item.context(), Some(&42));
    }

    #[test]
    fn title_and_image() {
        let item = BarItem::new("Files", ImageSource::Path("icons/files.png".into()));
        assert!(item.title().is_some());
        assert!(item.image().is_some());
    }

    #[test]
    fn accessibility_fields_start_unset() {
        let item = BarItem::from_title("Home");
        assert_eq!(item.accessibility_label, None);
        assert_eq!(item.accessibility_hint, None);
        assert_eq!(item.accessibility_traits, None);
    }

    #[test]
    fn traits_compose() {
        let traits = AccessibilityTraits::BUTTON | AccessibilityTraits::SELECTED;
        assert!(traits.contains(AccessibilityTraits::BUTTON));
        assert!(!traits.contains(AccessibilityTraits::HEADER));
    }
}
