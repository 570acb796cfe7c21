use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ParseError;

/// Kind of link an entry describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    #[default]
    #[serde(rename = "LINK_DIRECT")]
    LinkDirect,
    #[serde(rename = "FOLDER")]
    Folder,
}

impl EntryType {
    /// The literal name emitted in generated snippets.
    pub fn as_literal(&self) -> &'static str {
        match self {
            EntryType::LinkDirect => "LINK_DIRECT",
            EntryType::Folder => "FOLDER",
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, EntryType::Folder)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_literal())
    }
}

impl FromStr for EntryType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "LINK_DIRECT" => Ok(EntryType::LinkDirect),
            "FOLDER" => Ok(EntryType::Folder),
            other => Err(ParseError::UnknownEntryType(other.to_string())),
        }
    }
}

/// The top-level object described by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub target: String,
    pub description: String,
    pub thumbnail: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(rename = "isVisible")]
    pub is_visible: bool,
}

impl Entry {
    /// A visible direct link with empty description and thumbnail.
    pub fn link(title: &str, target: &str) -> Self {
        Self {
            title: title.to_string(),
            target: target.to_string(),
            description: String::new(),
            thumbnail: String::new(),
            entry_type: EntryType::LinkDirect,
            is_visible: true,
        }
    }

    /// A visible folder. Folders carry no target of their own.
    pub fn folder(title: &str) -> Self {
        Self {
            title: title.to_string(),
            target: String::new(),
            description: String::new(),
            thumbnail: String::new(),
            entry_type: EntryType::Folder,
            is_visible: true,
        }
    }
}

/// A child link attached to a folder entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItem {
    pub title: String,
    pub target: String,
    pub description: String,
    pub thumbnail: String,
}

/// Raw sub-item values as typed into the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCandidate {
    pub title: String,
    pub target: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
}

impl ItemCandidate {
    pub fn new(title: &str, target: &str, description: &str, thumbnail: &str) -> Self {
        Self {
            title: title.to_string(),
            target: target.to_string(),
            description: description.to_string(),
            thumbnail: thumbnail.to_string(),
        }
    }

    /// Returns a copy with every field whitespace-trimmed.
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.title.trim(),
            self.target.trim(),
            self.description.trim(),
            self.thumbnail.trim(),
        )
    }
}

/// Raw main-entry form values, before trimming and parsing.
///
/// `entry_type` and `is_visible` hold the literal option values of the
/// form's select boxes (`"LINK_DIRECT"`/`"FOLDER"` and `"true"`/`"false"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFields {
    pub title: String,
    pub target: String,
    pub description: String,
    pub thumbnail: String,
    pub entry_type: String,
    pub is_visible: String,
}

impl Default for EntryFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            target: String::new(),
            description: String::new(),
            thumbnail: String::new(),
            entry_type: EntryType::LinkDirect.as_literal().to_string(),
            is_visible: "true".to_string(),
        }
    }
}

impl EntryFields {
    /// Builds the entry used for code generation.
    pub fn to_entry(&self) -> Result<Entry, ParseError> {
        Ok(Entry {
            title: self.title.trim().to_string(),
            target: self.target.trim().to_string(),
            description: self.description.trim().to_string(),
            thumbnail: self.thumbnail.trim().to_string(),
            entry_type: self.entry_type.parse()?,
            is_visible: parse_visibility(&self.is_visible)?,
        })
    }

    /// Builds the entry used for the live preview, substituting
    /// `placeholder_title` when the title is blank.
    pub fn to_preview_entry(&self, placeholder_title: &str) -> Result<Entry, ParseError> {
        let mut entry = self.to_entry()?;
        if entry.title.is_empty() {
            entry.title = placeholder_title.to_string();
        }
        Ok(entry)
    }
}

/// Parses the visibility select value.
pub fn parse_visibility(value: &str) -> Result<bool, ParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidVisibility(value.to_string())),
    }
}
