// Tabspace state managers
// Managers handle stateful operations: the tab store and keyboard shortcuts.

pub mod shortcut_manager;
pub mod tab_store;
