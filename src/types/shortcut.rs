use serde::{Deserialize, Serialize};

use super::view::LayoutStrategy;

/// Something a keyboard shortcut asks the workspace to do.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "command", content = "arg", rename_all = "snake_case")]
pub enum WorkspaceCommand {
    NewTab,
    CloseTab,
    NextTab,
    PreviousTab,
    /// Zero-based position in the tab list.
    SwitchToIndex(usize),
    FocusAddressBar,
    FocusTabSearch,
    ToggleVoiceCommand,
    ToggleAssistant,
    TogglePerformanceMonitor,
    CycleViewMode,
    ApplyLayout(LayoutStrategy),
}
