// Tabspace shared type definitions
// Each submodule defines types used across the workspace core.

pub mod backend;
pub mod category;
pub mod errors;
pub mod settings;
pub mod shortcut;
pub mod tab;
pub mod view;
pub mod workspace;
