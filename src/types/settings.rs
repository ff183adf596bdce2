use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::view::{FilterBy, ViewMode};
use super::workspace::{Margins, Size, WorkspaceBounds};

/// Top-level shell settings container, persisted as `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShellSettings {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub workspace: WorkspaceSettings,
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
    #[serde(default)]
    pub assistant: AssistantSettings,
    /// User overrides on top of the built-in shortcut table (action -> chord).
    #[serde(default)]
    pub shortcuts: HashMap<String, String>,
}

/// General shell settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    pub homepage: String,
    /// Search endpoint; the query is appended URL-encoded.
    pub search_url: String,
    pub show_welcome: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            homepage: "about:blank".to_string(),
            search_url: "https://www.google.com/search?q=".to_string(),
            show_welcome: true,
        }
    }
}

/// Geometry of the bubble workspace and its initial view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkspaceSettings {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub tab_width: f64,
    pub tab_height: f64,
    pub default_view_mode: ViewMode,
    pub default_filter: FilterBy,
    /// Scatter new tabs around their preset slot.
    pub placement_jitter: bool,
}

impl WorkspaceSettings {
    pub fn bounds(&self) -> WorkspaceBounds {
        WorkspaceBounds {
            size: Size::new(self.width, self.height),
            margins: Margins::uniform(self.margin),
            tab_size: Size::new(self.tab_width, self.tab_height),
        }
    }
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        let bounds = WorkspaceBounds::default();
        Self {
            width: bounds.size.width,
            height: bounds.size.height,
            margin: bounds.margins.left,
            tab_width: bounds.tab_size.width,
            tab_height: bounds.tab_size.height,
            default_view_mode: ViewMode::Bubbles,
            default_filter: FilterBy::All,
            placement_jitter: true,
        }
    }
}

/// Where the AI backend lives and how to authenticate against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendSettings {
    pub base_url: String,
    pub auth_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            auth_token: None,
            timeout_secs: 15,
        }
    }
}

/// Accessibility preferences handed down to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessibilitySettings {
    pub reduced_motion: bool,
    pub high_contrast: bool,
    pub screen_reader_announcements: bool,
    pub font_scale: f64,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            high_contrast: false,
            screen_reader_announcements: true,
            font_scale: 1.0,
        }
    }
}

/// AI assistant, voice command and diagnostics panel toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantSettings {
    pub visible: bool,
    pub voice_commands_enabled: bool,
    pub show_performance_monitor: bool,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            visible: false,
            voice_commands_enabled: true,
            show_performance_monitor: false,
        }
    }
}

/// Ambient UI state passed explicitly to whoever renders the workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShellContext {
    pub accessibility: AccessibilitySettings,
    pub assistant_visible: bool,
    pub voice_listening: bool,
    pub voice_commands_enabled: bool,
    pub performance_monitor_visible: bool,
    pub address_bar_focused: bool,
    pub tab_search_focused: bool,
}

impl ShellContext {
    pub fn from_settings(settings: &ShellSettings) -> Self {
        Self {
            accessibility: settings.accessibility.clone(),
            assistant_visible: settings.assistant.visible,
            voice_listening: false,
            voice_commands_enabled: settings.assistant.voice_commands_enabled,
            performance_monitor_visible: settings.assistant.show_performance_monitor,
            address_bar_focused: false,
            tab_search_focused: false,
        }
    }
}
