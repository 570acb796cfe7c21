use thiserror::Error;

use super::entry::EntryType;

// === ValidationError ===

/// Reasons a sub-item candidate is rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The trimmed title is empty.
    #[error("Sub-item title is required")]
    MissingTitle,
    /// The trimmed target URL is empty.
    #[error("Sub-item target URL is required")]
    MissingTarget,
}

// === StoreError ===

/// Errors related to folder item store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The candidate failed validation; the store is unchanged.
    #[error("Invalid sub-item: {0}")]
    Validation(#[from] ValidationError),
    /// The index does not address an item in the current sequence.
    #[error("Item index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

// === ParseError ===

/// Errors raised while reading raw form values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The entry type literal is neither `LINK_DIRECT` nor `FOLDER`.
    #[error("Unknown entry type: {0}")]
    UnknownEntryType(String),
    /// The visibility value is neither `true` nor `false`.
    #[error("Invalid visibility value: {0}")]
    InvalidVisibility(String),
}

// === SettingsError ===

/// Errors raised while updating the session's generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The key does not name a setting.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The value has the wrong type for the key.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === CommandError ===

/// Errors returned by the user-facing commands on [`crate::app::App`].
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// Sub-items were submitted while the entry is not a folder.
    #[error("Sub-items can only be added to a FOLDER entry (current type: {0})")]
    NotAFolder(EntryType),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Store(StoreError::Validation(err))
    }
}
