//! App Core for linksnip.
//!
//! Owns the folder item store and the session's generator settings, and
//! exposes the user commands a front end triggers. Each mutating command
//! returns the [`ViewUpdate`]s the caller must apply once it succeeds; the
//! core itself never touches the view.

use log::debug;
use serde::Serialize;

use crate::managers::item_store::{ItemStore, ItemStoreTrait};
use crate::services::preview::{self, ListView, RenderModel};
use crate::services::serializer::Serializer;
use crate::types::entry::{EntryFields, EntryType, ItemCandidate, SubItem};
use crate::types::errors::CommandError;
use crate::types::settings::GeneratorSettings;

/// View callbacks to run after a command succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "update", content = "value", rename_all = "snake_case")]
pub enum ViewUpdate {
    /// Empty the four sub-item input fields.
    ClearItemInputs,
    /// Re-render the sub-item management list from [`App::item_list`].
    RenderItemList,
    /// Re-render the preview pane from [`App::preview`].
    RefreshPreview,
    /// Show or hide the sub-item management section.
    ShowFolderManagement(bool),
}

/// Central application struct composing the store and settings.
pub struct App {
    store: ItemStore,
    settings: GeneratorSettings,
    entry_type: EntryType,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a session with default settings.
    pub fn new() -> Self {
        Self::with_settings(GeneratorSettings::default())
    }

    /// Creates a session with the given settings. The entry starts as a
    /// direct link with no sub-items.
    pub fn with_settings(settings: GeneratorSettings) -> Self {
        Self {
            store: ItemStore::with_policy(settings.store.out_of_range_remove),
            settings,
            entry_type: EntryType::default(),
        }
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn items(&self) -> &[SubItem] {
        self.store.items()
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Adds a sub-item to the folder. Fails without touching the store
    /// unless the entry is a folder.
    pub fn submit_add(&mut self, candidate: ItemCandidate) -> Result<Vec<ViewUpdate>, CommandError> {
        if !self.entry_type.is_folder() {
            return Err(CommandError::NotAFolder(self.entry_type));
        }
        self.store.add(candidate)?;
        Ok(vec![
            ViewUpdate::ClearItemInputs,
            ViewUpdate::RenderItemList,
            ViewUpdate::RefreshPreview,
        ])
    }

    /// Removes the sub-item at `index` as shown by the last rendered list.
    pub fn submit_remove(&mut self, index: usize) -> Result<Vec<ViewUpdate>, CommandError> {
        self.store.remove_at(index)?;
        Ok(vec![ViewUpdate::RenderItemList, ViewUpdate::RefreshPreview])
    }

    /// Switches the entry type. Always discards every sub-item.
    pub fn change_type(&mut self, entry_type: EntryType) -> Vec<ViewUpdate> {
        debug!("entry type {} -> {}", self.entry_type, entry_type);
        self.entry_type = entry_type;
        self.store.clear();
        vec![
            ViewUpdate::ShowFolderManagement(entry_type.is_folder()),
            ViewUpdate::RenderItemList,
            ViewUpdate::RefreshPreview,
        ]
    }

    /// Generates the snippet for the submitted form values.
    pub fn submit_generate(&mut self, fields: &EntryFields) -> Result<String, CommandError> {
        let entry = fields.to_entry()?;
        self.sync_type(entry.entry_type);
        let serializer = Serializer::new(self.settings.output.clone());
        Ok(serializer.serialize(&entry, self.store.items()))
    }

    /// Projects the current form values onto the preview model.
    pub fn preview(&mut self, fields: &EntryFields) -> Result<RenderModel, CommandError> {
        let entry = fields.to_preview_entry(&self.settings.preview.placeholder_title)?;
        self.sync_type(entry.entry_type);
        Ok(preview::project(
            &entry,
            self.store.items(),
            &self.settings.preview,
        ))
    }

    /// The sub-item management list.
    pub fn item_list(&self) -> ListView {
        preview::list_view(self.store.items(), &self.settings.preview)
    }

    /// Updates one setting by `section.field` key for this session.
    pub fn set_setting(
        &mut self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<Vec<ViewUpdate>, CommandError> {
        self.settings.set(key, value)?;
        debug!("setting {} updated", key);
        Ok(self.apply_settings())
    }

    /// Restores the default settings.
    pub fn reset_settings(&mut self) -> Vec<ViewUpdate> {
        self.settings = GeneratorSettings::default();
        self.apply_settings()
    }

    /// Applies the store policy and returns the redraws a settings change needs.
    fn apply_settings(&mut self) -> Vec<ViewUpdate> {
        self.store.set_remove_policy(self.settings.store.out_of_range_remove);
        vec![ViewUpdate::RenderItemList, ViewUpdate::RefreshPreview]
    }

    /// Form values carry their own type; a differing one counts as a type
    /// change so sub-items never outlive their folder.
    fn sync_type(&mut self, entry_type: EntryType) {
        if entry_type != self.entry_type {
            self.change_type(entry_type);
        }
    }
}
