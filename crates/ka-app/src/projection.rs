//! Item projection
//! 条目投影
//!
//! Turns an [`AccessorySheetData`] into the flat, ordered item list the
//! presentation layer renders:
//!
//! 1. `TopDivider`
//! 2. `Label` with the sheet title
//! 3. one `Suggestion` per field, entries and fields in source order
//! 4. if there are footer commands: a `Divider`, then one `Option` each
//!
//! The projection has no side effects. Callbacks attached to the items only
//! capture the [`SheetActionSink`] and act when the user triggers them.

use std::sync::Arc;

use ka_core::accessory::{
    IconCallback, IconFetcher, Item, OptionItem, SelectCallback, SuggestionItem,
};
use ka_core::sheet::AccessorySheetData;

/// Where item callbacks send user actions.
pub trait SheetActionSink: Send + Sync {
    fn on_suggestion_selected(&self, is_obfuscated: bool, text_to_fill: &str);

    fn on_option_selected(&self, selected_option: &str);

    fn on_icon_requested(&self, desired_size_px: u32, callback: IconCallback);
}

/// Project `sheet` into display items.
pub fn convert_to_items(
    sheet: &AccessorySheetData,
    sink: &Arc<dyn SheetActionSink>,
) -> Vec<Item> {
    let footer_len = match sheet.footer_commands().len() {
        0 => 0,
        n => n + 1,
    };
    let mut items = Vec::with_capacity(2 + sheet.field_count() + footer_len);

    items.push(Item::TopDivider);
    items.push(Item::label(sheet.title(), sheet.title()));

    let icon_fetcher: IconFetcher = {
        let sink = sink.clone();
        Arc::new(move |desired_size_px: u32, callback: IconCallback| {
            sink.on_icon_requested(desired_size_px, callback)
        })
    };

    for user_info in sheet.user_info_list() {
        for field in user_info.fields() {
            let on_select = field.is_selectable().then(|| {
                let sink = sink.clone();
                let is_obfuscated = field.is_obfuscated();
                let text = field.display_text().to_string();
                Arc::new(move || sink.on_suggestion_selected(is_obfuscated, &text))
                    as SelectCallback
            });
            items.push(Item::Suggestion(SuggestionItem::new(
                field.display_text(),
                field.a11y_description(),
                field.is_obfuscated(),
                on_select,
                icon_fetcher.clone(),
            )));
        }
    }

    if !sheet.footer_commands().is_empty() {
        items.push(Item::Divider);
        for command in sheet.footer_commands() {
            let sink = sink.clone();
            let text = command.display_text().to_string();
            items.push(Item::Option(OptionItem::new(
                command.display_text(),
                command.display_text(),
                Arc::new(move || sink.on_option_selected(&text)),
            )));
        }
    }

    items
}
