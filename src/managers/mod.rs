// linksnip state managers
// Managers handle stateful operations: the folder's sub-item list.

pub mod item_store;
