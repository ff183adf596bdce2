// Tabspace Settings Engine
// Manages shell settings: loading, saving, updating individual values, and resetting to defaults.
// Settings are stored as a JSON file at the platform-specific config path.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::ShellSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<ShellSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &ShellSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: ShellSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: ShellSettings::default(),
        }
    }

    /// Loads settings, keeping defaults if the file is unreadable.
    pub fn load_or_default(&mut self) -> &ShellSettings {
        if let Err(e) = self.load() {
            warn!(path = %self.config_path, error = %e, "falling back to default settings");
            self.settings = ShellSettings::default();
        }
        &self.settings
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// If the file does not exist, returns default settings.
    /// If the file exists but is malformed, returns a serialization error.
    fn load(&mut self) -> Result<ShellSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            debug!(path = %self.config_path, "no settings file, using defaults");
            self.settings = ShellSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: ShellSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings to the JSON config file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    fn get_settings(&self) -> &ShellSettings {
        &self.settings
    }

    /// Updates an individual setting by dot-notation key path and saves.
    ///
    /// The settings are round-tripped through `serde_json::Value`, so the new
    /// value is type-checked by deserializing back into `ShellSettings`.
    ///
    /// # Examples
    /// - `"workspace.width"` → updates `settings.workspace.width`
    /// - `"backend.auth_token"` → updates `settings.backend.auth_token`
    /// - `"shortcuts.new_tab"` → adds or replaces a shortcut override
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let parts: Vec<&str> = key.split('.').collect();

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        {
            let mut current = &mut json_value;
            for (i, part) in parts.iter().enumerate() {
                let is_last = i == parts.len() - 1;
                // The shortcut table is open-ended: new actions are allowed.
                let open_map = i > 0 && parts[0] == "shortcuts";
                if is_last {
                    match current {
                        serde_json::Value::Object(map) => {
                            if !open_map && !map.contains_key(*part) {
                                return Err(SettingsError::InvalidKey(format!(
                                    "Key '{}' not found in settings",
                                    key
                                )));
                            }
                            map.insert(part.to_string(), value.clone());
                        }
                        _ => {
                            return Err(SettingsError::InvalidKey(format!(
                                "Cannot navigate to key '{}': intermediate value is not an object",
                                key
                            )));
                        }
                    }
                } else {
                    current = match current.get_mut(*part) {
                        Some(v) => v,
                        None => {
                            return Err(SettingsError::InvalidKey(format!(
                                "Key '{}' not found in settings",
                                key
                            )));
                        }
                    };
                }
            }
        }

        let new_settings: ShellSettings = serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;

        self.settings = new_settings;
        self.save()?;
        debug!(key, "updated setting");

        Ok(())
    }

    /// Resets all settings to factory defaults and saves to disk.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = ShellSettings::default();
        self.save()?;
        Ok(())
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
