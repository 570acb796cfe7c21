//! Snippet serializer for linksnip.
//!
//! Turns an [`Entry`] and its folder items into the object-literal style
//! snippet users paste into their link configuration.
//!
//! Layout is fixed: top-level fields at 4 spaces, sub-item braces at 8 and
//! sub-item fields at 12. Every string field is always present, even when
//! empty, and `isVisible` is always last.

use crate::types::entry::{Entry, EntryType, SubItem};
use crate::types::settings::{EmptyFolderPolicy, OutputSettings, QuotePolicy};

const FIELD_INDENT: &str = "    ";
const ITEM_INDENT: &str = "        ";
const ITEM_FIELD_INDENT: &str = "            ";

/// Produces snippets according to a set of [`OutputSettings`].
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    settings: OutputSettings,
}

impl Serializer {
    pub fn new(settings: OutputSettings) -> Self {
        Self { settings }
    }

    /// Serializes `entry`. `items` are only read for folder entries.
    ///
    /// Never fails and performs no validation: an empty title simply yields
    /// `title: ""`.
    pub fn serialize(&self, entry: &Entry, items: &[SubItem]) -> String {
        let mut out = String::from("{\n");

        self.string_field(&mut out, FIELD_INDENT, "title", &entry.title, true);
        self.string_field(&mut out, FIELD_INDENT, "type", entry.entry_type.as_literal(), true);

        match entry.entry_type {
            EntryType::LinkDirect => {
                self.string_field(&mut out, FIELD_INDENT, "target", &entry.target, true);
                self.string_field(&mut out, FIELD_INDENT, "description", &entry.description, true);
                self.string_field(&mut out, FIELD_INDENT, "thumbnail", &entry.thumbnail, true);
            }
            EntryType::Folder => {
                out.push_str(FIELD_INDENT);
                out.push_str("isExpanded: false,\n");
                self.items_block(&mut out, items);
            }
        }

        out.push_str(FIELD_INDENT);
        out.push_str(&format!("isVisible: {}\n", entry.is_visible));
        out.push('}');
        out
    }

    fn items_block(&self, out: &mut String, items: &[SubItem]) {
        out.push_str(FIELD_INDENT);
        out.push_str("items: [\n");

        if items.is_empty() {
            if self.settings.empty_folder == EmptyFolderPolicy::Placeholder {
                self.item(out, &placeholder_item(), true);
            }
        } else {
            let last = items.len() - 1;
            for (index, item) in items.iter().enumerate() {
                self.item(out, item, index == last);
            }
        }

        out.push_str(FIELD_INDENT);
        out.push_str("],\n");
    }

    fn item(&self, out: &mut String, item: &SubItem, is_last: bool) {
        out.push_str(ITEM_INDENT);
        out.push_str("{\n");
        self.string_field(out, ITEM_FIELD_INDENT, "title", &item.title, true);
        self.string_field(out, ITEM_FIELD_INDENT, "target", &item.target, true);
        self.string_field(out, ITEM_FIELD_INDENT, "description", &item.description, true);
        self.string_field(out, ITEM_FIELD_INDENT, "thumbnail", &item.thumbnail, false);
        out.push_str(ITEM_INDENT);
        out.push_str(if is_last { "}\n" } else { "},\n" });
    }

    fn string_field(&self, out: &mut String, indent: &str, name: &str, value: &str, comma: bool) {
        out.push_str(indent);
        out.push_str(name);
        out.push_str(": \"");
        match self.settings.quoting {
            QuotePolicy::Raw => out.push_str(value),
            QuotePolicy::Escape => out.push_str(&escape(value)),
        }
        out.push('"');
        if comma {
            out.push(',');
        }
        out.push('\n');
    }
}

/// Serializes with default output settings.
pub fn serialize(entry: &Entry, items: &[SubItem]) -> String {
    Serializer::default().serialize(entry, items)
}

fn placeholder_item() -> SubItem {
    SubItem {
        title: String::new(),
        target: String::new(),
        description: String::new(),
        thumbnail: String::new(),
    }
}

/// Escapes a value for use inside a double-quoted literal.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
