use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::SettingsError;

/// Thumbnail shown in the preview when an item has none.
pub const DEFAULT_PLACEHOLDER_THUMBNAIL: &str =
    "https://i.pinimg.com/originals/67/54/55/675455f961bfb9346daa8a2b7e41306f.jpg";

/// Top-level generator settings for one session.
///
/// Held in memory only. Every section defaults independently, so a client
/// sending a partial object only needs the keys it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorSettings {
    pub output: OutputSettings,
    pub preview: PreviewSettings,
    pub store: StoreSettings,
}

impl GeneratorSettings {
    /// Every key accepted by [`GeneratorSettings::set`].
    pub const KEYS: &'static [&'static str] = &[
        "output.empty_folder",
        "output.quoting",
        "preview.placeholder_title",
        "preview.placeholder_thumbnail",
        "preview.hidden_message",
        "preview.empty_folder_message",
        "preview.empty_list_message",
        "store.out_of_range_remove",
    ];

    /// Updates one setting addressed as `section.field`, e.g.
    /// `output.quoting`. On error nothing changes.
    pub fn set(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        match key {
            "output.empty_folder" => self.output.empty_folder = value_for(key, value)?,
            "output.quoting" => self.output.quoting = value_for(key, value)?,
            "preview.placeholder_title" => self.preview.placeholder_title = value_for(key, value)?,
            "preview.placeholder_thumbnail" => {
                self.preview.placeholder_thumbnail = value_for(key, value)?
            }
            "preview.hidden_message" => self.preview.hidden_message = value_for(key, value)?,
            "preview.empty_folder_message" => {
                self.preview.empty_folder_message = value_for(key, value)?
            }
            "preview.empty_list_message" => {
                self.preview.empty_list_message = value_for(key, value)?
            }
            "store.out_of_range_remove" => {
                self.store.out_of_range_remove = value_for(key, value)?
            }
            _ => return Err(SettingsError::InvalidKey(key.to_string())),
        }
        Ok(())
    }
}

fn value_for<T: DeserializeOwned>(key: &str, value: Value) -> Result<T, SettingsError> {
    serde_json::from_value(value).map_err(|e| SettingsError::InvalidValue(format!("{}: {}", key, e)))
}

/// Controls the textual snippet produced by the serializer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    pub empty_folder: EmptyFolderPolicy,
    pub quoting: QuotePolicy,
}

/// What an empty folder's `items` list contains.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum EmptyFolderPolicy {
    /// One item with all four fields set to `""`.
    #[default]
    Placeholder,
    /// No items at all.
    EmptyList,
}

/// How string values are written between the quotes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum QuotePolicy {
    /// Interpolated verbatim. Embedded quotes break the snippet.
    #[default]
    Raw,
    /// Backslash-escaped so the snippet stays a valid object literal.
    Escape,
}

/// Texts and fallbacks used by the live preview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PreviewSettings {
    pub placeholder_title: String,
    pub placeholder_thumbnail: String,
    pub hidden_message: String,
    pub empty_folder_message: String,
    pub empty_list_message: String,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            placeholder_title: "Título de Exemplo".to_string(),
            placeholder_thumbnail: DEFAULT_PLACEHOLDER_THUMBNAIL.to_string(),
            hidden_message: "[Link Oculto] Não será exibido.".to_string(),
            empty_folder_message: "Pasta Vazia. Adicione itens abaixo.".to_string(),
            empty_list_message: "Nenhum item adicionado.".to_string(),
        }
    }
}

/// Behavior of the folder item store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreSettings {
    pub out_of_range_remove: RemovePolicy,
}

/// What `remove_at` does with an index past the end of the list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RemovePolicy {
    #[default]
    Error,
    Ignore,
}
