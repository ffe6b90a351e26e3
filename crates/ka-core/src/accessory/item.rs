use std::fmt;

use super::{IconCallback, IconFetcher, SelectCallback};

/// One renderable row of the accessory sheet.
/// 附件面板中的一行。
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Divider rendered above the sheet title.
    TopDivider,
    /// Divider separating suggestions from footer options.
    Divider,
    Label {
        caption: String,
        content_description: String,
    },
    Suggestion(SuggestionItem),
    Option(OptionItem),
}

impl Item {
    pub fn label(caption: impl Into<String>, content_description: impl Into<String>) -> Self {
        Item::Label {
            caption: caption.into(),
            content_description: content_description.into(),
        }
    }

    /// Visible text of the row, if it has any.
    pub fn caption(&self) -> Option<&str> {
        match self {
            Item::TopDivider | Item::Divider => None,
            Item::Label { caption, .. } => Some(caption),
            Item::Suggestion(suggestion) => Some(suggestion.caption()),
            Item::Option(option) => Some(option.caption()),
        }
    }
}

/// A fillable suggestion such as a username or a masked password.
#[derive(Clone)]
pub struct SuggestionItem {
    caption: String,
    content_description: String,
    is_obfuscated: bool,
    on_select: Option<SelectCallback>,
    icon_fetcher: IconFetcher,
}

impl SuggestionItem {
    pub fn new(
        caption: impl Into<String>,
        content_description: impl Into<String>,
        is_obfuscated: bool,
        on_select: Option<SelectCallback>,
        icon_fetcher: IconFetcher,
    ) -> Self {
        Self {
            caption: caption.into(),
            content_description: content_description.into(),
            is_obfuscated,
            on_select,
            icon_fetcher,
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn content_description(&self) -> &str {
        &self.content_description
    }

    pub fn is_obfuscated(&self) -> bool {
        self.is_obfuscated
    }

    pub fn is_selectable(&self) -> bool {
        self.on_select.is_some()
    }

    /// Run the selection callback. Returns `false` for non-selectable items.
    pub fn select(&self) -> bool {
        match &self.on_select {
            Some(on_select) => {
                on_select();
                true
            }
            None => false,
        }
    }

    /// Ask for the icon shown next to this suggestion. The callback may run
    /// later, or never if the request is dropped.
    pub fn fetch_icon(&self, desired_size_px: u32, callback: IconCallback) {
        (self.icon_fetcher)(desired_size_px, callback);
    }
}

impl fmt::Debug for SuggestionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionItem")
            .field("caption", &self.caption)
            .field("content_description", &self.content_description)
            .field("is_obfuscated", &self.is_obfuscated)
            .field("selectable", &self.is_selectable())
            .finish_non_exhaustive()
    }
}

impl PartialEq for SuggestionItem {
    fn eq(&self, other: &Self) -> bool {
        self.caption == other.caption
            && self.content_description == other.content_description
            && self.is_obfuscated == other.is_obfuscated
            && self.is_selectable() == other.is_selectable()
    }
}

/// A footer command such as "Manage passwords".
#[derive(Clone)]
pub struct OptionItem {
    caption: String,
    content_description: String,
    on_select: SelectCallback,
}

impl OptionItem {
    pub fn new(
        caption: impl Into<String>,
        content_description: impl Into<String>,
        on_select: SelectCallback,
    ) -> Self {
        Self {
            caption: caption.into(),
            content_description: content_description.into(),
            on_select,
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn content_description(&self) -> &str {
        &self.content_description
    }

    pub fn select(&self) {
        (self.on_select)();
    }
}

impl fmt::Debug for OptionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionItem")
            .field("caption", &self.caption)
            .field("content_description", &self.content_description)
            .finish_non_exhaustive()
    }
}

impl PartialEq for OptionItem {
    fn eq(&self, other: &Self) -> bool {
        self.caption == other.caption && self.content_description == other.content_description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessory::Icon;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    fn no_icon() -> IconFetcher {
        Arc::new(|_: u32, callback: IconCallback| callback(None))
    }

    #[test]
    fn non_selectable_suggestion_ignores_select() {
        let item = SuggestionItem::new("alice", "alice", false, None, no_icon());

        assert!(!item.is_selectable());
        assert!(!item.select());
    }

    #[test]
    fn selectable_suggestion_runs_callback() {
        let selected = Arc::new(AtomicBool::new(false));
        let flag = selected.clone();
        let item = SuggestionItem::new(
            "alice",
            "alice",
            false,
            Some(Arc::new(move || flag.store(true, Ordering::SeqCst))),
            no_icon(),
        );

        assert!(item.select());
        assert!(selected.load(Ordering::SeqCst));
    }

    #[test]
    fn fetch_icon_passes_size_and_callback() {
        let requested = Arc::new(AtomicU32::new(0));
        let seen = requested.clone();
        let fetcher: IconFetcher = Arc::new(move |size: u32, callback: IconCallback| {
            seen.store(size, Ordering::SeqCst);
            callback(Some(Icon::from_png_bytes(vec![0x89, 0x50])));
        });
        let item = SuggestionItem::new("alice", "alice", false, None, fetcher);
        let received = Arc::new(Mutex::new(None));
        let slot = received.clone();

        item.fetch_icon(48, Box::new(move |icon: Option<Icon>| *slot.lock().unwrap() = icon));

        assert_eq!(requested.load(Ordering::SeqCst), 48);
        assert_eq!(
            received.lock().unwrap().as_ref().map(|icon| icon.bytes().len()),
            Some(2)
        );
    }

    #[test]
    fn equality_compares_structure_only() {
        let a = Item::Suggestion(SuggestionItem::new(
            "alice",
            "alice",
            false,
            Some(Arc::new(|| {})),
            no_icon(),
        ));
        let b = Item::Suggestion(SuggestionItem::new(
            "alice",
            "alice",
            false,
            Some(Arc::new(|| {})),
            no_icon(),
        ));
        let not_selectable =
            Item::Suggestion(SuggestionItem::new("alice", "alice", false, None, no_icon()));

        assert_eq!(a, b);
        assert_ne!(a, not_selectable);
        assert_eq!(Item::label("t", "t").caption(), Some("t"));
        assert_eq!(Item::Divider.caption(), None);
    }
}
