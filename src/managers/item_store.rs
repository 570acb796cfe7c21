//! Item Store for linksnip.
//!
//! Holds the ordered sub-items of a folder entry. Mutated only by validated
//! append, remove-by-index, and wholesale clear.

use log::{debug, warn};

use crate::types::entry::{ItemCandidate, SubItem};
use crate::types::errors::{StoreError, ValidationError};
use crate::types::settings::RemovePolicy;

/// Trait defining the folder item store interface.
pub trait ItemStoreTrait {
    fn add(&mut self, candidate: ItemCandidate) -> Result<&[SubItem], StoreError>;
    fn remove_at(&mut self, index: usize) -> Result<Option<SubItem>, StoreError>;
    fn clear(&mut self);
    fn snapshot(&self) -> Vec<SubItem>;
    fn items(&self) -> &[SubItem];
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// In-memory, insertion-ordered store of folder sub-items.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<SubItem>,
    remove_policy: RemovePolicy,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::with_policy(RemovePolicy::default())
    }

    /// Creates an empty store with the given out-of-range removal behavior.
    pub fn with_policy(remove_policy: RemovePolicy) -> Self {
        Self {
            items: Vec::new(),
            remove_policy,
        }
    }

    pub fn set_remove_policy(&mut self, remove_policy: RemovePolicy) {
        self.remove_policy = remove_policy;
    }

    /// Checks a trimmed candidate and turns it into a sub-item.
    fn validate(candidate: ItemCandidate) -> Result<SubItem, ValidationError> {
        if candidate.title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if candidate.target.is_empty() {
            return Err(ValidationError::MissingTarget);
        }
        Ok(SubItem {
            title: candidate.title,
            target: candidate.target,
            description: candidate.description,
            thumbnail: candidate.thumbnail,
        })
    }
}

impl ItemStoreTrait for ItemStore {
    /// Validates and appends a sub-item. On failure the store is unchanged.
    fn add(&mut self, candidate: ItemCandidate) -> Result<&[SubItem], StoreError> {
        let item = match Self::validate(candidate.trimmed()) {
            Ok(item) => item,
            Err(e) => {
                warn!("rejected sub-item: {}", e);
                return Err(e.into());
            }
        };
        debug!("adding sub-item {:?} at index {}", item.title, self.items.len());
        self.items.push(item);
        Ok(&self.items)
    }

    /// Removes the item at `index`, shifting later items down by one.
    ///
    /// Returns `Ok(None)` only when the index is out of range and the store
    /// is configured with [`RemovePolicy::Ignore`].
    fn remove_at(&mut self, index: usize) -> Result<Option<SubItem>, StoreError> {
        if index >= self.items.len() {
            return match self.remove_policy {
                RemovePolicy::Error => Err(StoreError::IndexOutOfRange {
                    index,
                    len: self.items.len(),
                }),
                RemovePolicy::Ignore => {
                    debug!("ignoring removal of out-of-range index {}", index);
                    Ok(None)
                }
            };
        }
        let removed = self.items.remove(index);
        debug!("removed sub-item {:?} from index {}", removed.title, index);
        Ok(Some(removed))
    }

    fn clear(&mut self) {
        if !self.items.is_empty() {
            debug!("clearing {} sub-items", self.items.len());
        }
        self.items.clear();
    }

    fn snapshot(&self) -> Vec<SubItem> {
        self.items.clone()
    }

    fn items(&self) -> &[SubItem] {
        &self.items
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
