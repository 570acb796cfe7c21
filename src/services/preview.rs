//! Preview projection for linksnip.
//!
//! Pure functions that decide what the live preview and the sub-item
//! management list should show. The view layer renders these models; nothing
//! here touches a UI toolkit.

use serde::Serialize;

use crate::types::entry::{Entry, EntryType, SubItem};
use crate::types::settings::PreviewSettings;

/// One rendered link card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewCard {
    pub href: String,
    pub image: String,
    pub alt: String,
    pub title: String,
    /// `None` when the description is empty; the card omits the paragraph.
    pub description: Option<String>,
}

/// Body of a folder preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FolderContent {
    Items { cards: Vec<PreviewCard> },
    Empty { message: String },
}

/// What the preview pane should display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderModel {
    Hidden { message: String },
    Single { card: PreviewCard },
    Folder { title: String, content: FolderContent },
}

impl RenderModel {
    /// The hide/show decision for the preview pane.
    pub fn is_hidden(&self) -> bool {
        matches!(self, RenderModel::Hidden { .. })
    }
}

/// A row in the sub-item management list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    /// Index to pass back to `remove_at`. Only valid until the next mutation.
    pub index: usize,
    pub title: String,
}

/// The sub-item management list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListView {
    Empty { message: String },
    Rows { rows: Vec<ListRow> },
}

/// Projects the current entry and items onto a render model.
pub fn project(entry: &Entry, items: &[SubItem], settings: &PreviewSettings) -> RenderModel {
    if !entry.is_visible {
        return RenderModel::Hidden {
            message: settings.hidden_message.clone(),
        };
    }

    match entry.entry_type {
        EntryType::LinkDirect => RenderModel::Single {
            card: card(
                &entry.title,
                &entry.target,
                &entry.description,
                &entry.thumbnail,
                settings,
            ),
        },
        EntryType::Folder => {
            let content = if items.is_empty() {
                FolderContent::Empty {
                    message: settings.empty_folder_message.clone(),
                }
            } else {
                FolderContent::Items {
                    cards: items
                        .iter()
                        .map(|i| card(&i.title, &i.target, &i.description, &i.thumbnail, settings))
                        .collect(),
                }
            };
            RenderModel::Folder {
                title: entry.title.clone(),
                content,
            }
        }
    }
}

/// Builds the management list for the current items.
pub fn list_view(items: &[SubItem], settings: &PreviewSettings) -> ListView {
    if items.is_empty() {
        return ListView::Empty {
            message: settings.empty_list_message.clone(),
        };
    }
    ListView::Rows {
        rows: items
            .iter()
            .enumerate()
            .map(|(index, item)| ListRow {
                index,
                title: item.title.clone(),
            })
            .collect(),
    }
}

fn card(
    title: &str,
    target: &str,
    description: &str,
    thumbnail: &str,
    settings: &PreviewSettings,
) -> PreviewCard {
    PreviewCard {
        href: if target.is_empty() { "#" } else { target }.to_string(),
        image: if thumbnail.is_empty() {
            settings.placeholder_thumbnail.clone()
        } else {
            thumbnail.to_string()
        },
        alt: title.to_string(),
        title: title.to_string(),
        description: if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        },
    }
}
