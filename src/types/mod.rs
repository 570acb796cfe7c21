// linksnip shared type definitions
// Each submodule defines types used across the crate.

pub mod entry;
pub mod errors;
pub mod settings;
