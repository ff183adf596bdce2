//! Shortcut Manager for the tab workspace.
//!
//! Maps key chords to workspace actions with conflict detection,
//! chord normalization and platform-specific modifier adaptation.

use std::collections::HashMap;

use tracing::warn;

use crate::types::errors::ShortcutError;
use crate::types::shortcut::WorkspaceCommand;
use crate::types::view::LayoutStrategy;

/// Trait defining shortcut management operations.
pub trait ShortcutManagerTrait {
    fn register_shortcut(&mut self, action: &str, keys: &str) -> Result<(), ShortcutError>;
    fn unregister_shortcut(&mut self, action: &str) -> Result<(), ShortcutError>;
    fn get_shortcut(&self, action: &str) -> Option<&str>;
    fn list_shortcuts(&self) -> &HashMap<String, String>;
    fn reset_to_defaults(&mut self);
    fn has_conflict(&self, keys: &str, exclude_action: Option<&str>) -> Option<String>;
    fn dispatch(&self, keys: &str) -> Option<WorkspaceCommand>;
}

/// Shortcut manager with in-memory bindings (action -> chord).
pub struct ShortcutManager {
    shortcuts: HashMap<String, String>,
}

impl ShortcutManager {
    pub fn new() -> Self {
        Self {
            shortcuts: Self::default_shortcuts(),
        }
    }

    /// Builds the default table, then applies user overrides from settings.
    ///
    /// Every overridden action loses its default chord first, so an override
    /// may take a chord another override freed. Overrides naming unknown
    /// actions or conflicting chords are skipped; a skipped action gets its
    /// default back if that chord is still free.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let defaults = Self::default_shortcuts();
        let mut mgr = Self::new();
        let mut actions: Vec<&String> = overrides.keys().collect();
        actions.sort();
        for action in &actions {
            mgr.shortcuts.remove(action.as_str());
        }

        let mut skipped = Vec::new();
        for action in actions {
            if let Err(e) = mgr.register_shortcut(action, &overrides[action]) {
                warn!(action = %action, error = %e, "ignoring shortcut override");
                skipped.push(action);
            }
        }
        for action in skipped {
            if let Some(chord) = defaults.get(action.as_str()) {
                if mgr.has_conflict(chord, Some(action.as_str())).is_none() {
                    mgr.shortcuts.insert(action.clone(), chord.clone());
                }
            }
        }
        mgr
    }

    /// The built-in bindings, already adapted for the current platform.
    pub fn default_shortcuts() -> HashMap<String, String> {
        let mut defaults = vec![
            ("new_tab", "Ctrl+T".to_string()),
            ("close_tab", "Ctrl+W".to_string()),
            ("next_tab", "Ctrl+Tab".to_string()),
            ("prev_tab", "Ctrl+Shift+Tab".to_string()),
            ("address_bar", "Ctrl+L".to_string()),
            ("tab_search", "Ctrl+F".to_string()),
            ("voice_command", "Ctrl+Shift+V".to_string()),
            ("ai_assistant", "Ctrl+Shift+A".to_string()),
            ("performance_monitor", "Ctrl+Shift+P".to_string()),
            ("cycle_view", "Ctrl+Shift+M".to_string()),
            ("layout_grid", "Ctrl+Shift+G".to_string()),
            ("layout_circle", "Ctrl+Shift+C".to_string()),
            ("layout_spiral", "Ctrl+Shift+S".to_string()),
            ("layout_clusters", "Ctrl+Shift+K".to_string()),
        ];
        for n in 1..=9 {
            defaults.push((SWITCH_ACTIONS[n - 1], format!("Ctrl+{}", n)));
        }

        defaults
            .into_iter()
            .map(|(a, k)| (a.to_string(), Self::adapt_for_platform(&normalize_chord(&k))))
            .collect()
    }

    /// Maps an action name to the command it runs.
    pub fn action_command(action: &str) -> Option<WorkspaceCommand> {
        let command = match action {
            "new_tab" => WorkspaceCommand::NewTab,
            "close_tab" => WorkspaceCommand::CloseTab,
            "next_tab" => WorkspaceCommand::NextTab,
            "prev_tab" => WorkspaceCommand::PreviousTab,
            "address_bar" => WorkspaceCommand::FocusAddressBar,
            "tab_search" => WorkspaceCommand::FocusTabSearch,
            "voice_command" => WorkspaceCommand::ToggleVoiceCommand,
            "ai_assistant" => WorkspaceCommand::ToggleAssistant,
            "performance_monitor" => WorkspaceCommand::TogglePerformanceMonitor,
            "cycle_view" => WorkspaceCommand::CycleViewMode,
            "layout_grid" => WorkspaceCommand::ApplyLayout(LayoutStrategy::Grid),
            "layout_circle" => WorkspaceCommand::ApplyLayout(LayoutStrategy::Circle),
            "layout_spiral" => WorkspaceCommand::ApplyLayout(LayoutStrategy::Spiral),
            "layout_clusters" => WorkspaceCommand::ApplyLayout(LayoutStrategy::CategoryClusters),
            other => {
                let index = SWITCH_ACTIONS.iter().position(|a| *a == other)?;
                WorkspaceCommand::SwitchToIndex(index)
            }
        };
        Some(command)
    }

    /// Adapts modifier keys for the current platform.
    fn adapt_for_platform(keys: &str) -> String {
        if cfg!(target_os = "macos") {
            keys.replace("Ctrl+", "Cmd+")
        } else {
            keys.to_string()
        }
    }
}

const SWITCH_ACTIONS: [&str; 9] = [
    "switch_tab_1",
    "switch_tab_2",
    "switch_tab_3",
    "switch_tab_4",
    "switch_tab_5",
    "switch_tab_6",
    "switch_tab_7",
    "switch_tab_8",
    "switch_tab_9",
];

const MODIFIER_ORDER: [&str; 4] = ["Ctrl", "Cmd", "Alt", "Shift"];

/// Puts a chord in canonical form: known modifiers in a fixed order with
/// canonical names, then the key. `"shift+ctrl+t"` becomes `"Ctrl+Shift+T"`.
///
/// Returns an empty string if the chord has no non-modifier key.
pub fn normalize_chord(keys: &str) -> String {
    let mut modifiers: Vec<&'static str> = Vec::new();
    let mut key: Option<String> = None;

    for part in keys.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        let modifier = match part.to_lowercase().as_str() {
            "ctrl" | "control" => Some("Ctrl"),
            "cmd" | "command" | "meta" | "super" => Some("Cmd"),
            "alt" | "option" | "opt" => Some("Alt"),
            "shift" => Some("Shift"),
            _ => None,
        };
        match modifier {
            Some(m) if !modifiers.contains(&m) => modifiers.push(m),
            Some(_) => {}
            None => key = Some(canonical_key(part)),
        }
    }

    let Some(key) = key else {
        return String::new();
    };
    modifiers.sort_by_key(|m| MODIFIER_ORDER.iter().position(|o| o == m));

    let mut parts: Vec<String> = modifiers.into_iter().map(str::to_string).collect();
    parts.push(key);
    parts.join("+")
}

fn canonical_key(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if key.chars().count() == 1 => first.to_uppercase().collect(),
        Some(first) => {
            let rest: String = chars.as_str().to_lowercase();
            format!("{}{}", first.to_uppercase(), rest)
        }
        None => String::new(),
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutManagerTrait for ShortcutManager {
    fn register_shortcut(&mut self, action: &str, keys: &str) -> Result<(), ShortcutError> {
        if Self::action_command(action).is_none() {
            return Err(ShortcutError::UnknownAction(action.to_string()));
        }

        let normalized = normalize_chord(keys);
        if normalized.is_empty() {
            return Err(ShortcutError::InvalidKeys(format!(
                "'{}' has no key besides modifiers",
                keys
            )));
        }

        if let Some(conflicting_action) = self.has_conflict(&normalized, Some(action)) {
            return Err(ShortcutError::Conflict(format!(
                "'{}' is already bound to '{}'",
                normalized, conflicting_action
            )));
        }

        let adapted = Self::adapt_for_platform(&normalized);
        self.shortcuts.insert(action.to_string(), adapted);
        Ok(())
    }

    fn unregister_shortcut(&mut self, action: &str) -> Result<(), ShortcutError> {
        self.shortcuts
            .remove(action)
            .map(|_| ())
            .ok_or_else(|| ShortcutError::NotFound(action.to_string()))
    }

    fn get_shortcut(&self, action: &str) -> Option<&str> {
        self.shortcuts.get(action).map(|s| s.as_str())
    }

    fn list_shortcuts(&self) -> &HashMap<String, String> {
        &self.shortcuts
    }

    fn reset_to_defaults(&mut self) {
        self.shortcuts = Self::default_shortcuts();
    }

    fn has_conflict(&self, keys: &str, exclude_action: Option<&str>) -> Option<String> {
        let adapted = Self::adapt_for_platform(&normalize_chord(keys));
        self.shortcuts
            .iter()
            .filter(|(action, _)| Some(action.as_str()) != exclude_action)
            .find(|(_, bound)| **bound == adapted)
            .map(|(action, _)| action.clone())
    }

    /// Resolves a pressed chord to the command bound to it.
    fn dispatch(&self, keys: &str) -> Option<WorkspaceCommand> {
        let adapted = Self::adapt_for_platform(&normalize_chord(keys));
        if adapted.is_empty() {
            return None;
        }
        self.shortcuts
            .iter()
            .find(|(_, bound)| **bound == adapted)
            .and_then(|(action, _)| Self::action_command(action))
    }
}
