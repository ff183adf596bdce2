// Tabspace platform paths
// Linux:   $XDG_CONFIG_HOME/tabspace or ~/.config/tabspace
// macOS:   ~/Library/Application Support/Tabspace
// Windows: %APPDATA%/Tabspace

use std::env;
use std::path::PathBuf;

/// Overrides the config directory on every platform.
pub const CONFIG_DIR_ENV: &str = "TABSPACE_CONFIG_DIR";

/// Returns the directory `settings.json` lives in.
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    default_config_dir()
}

#[cfg(target_os = "macos")]
fn default_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Tabspace")
}

#[cfg(target_os = "windows")]
fn default_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Tabspace")
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn default_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("tabspace"),
        _ => home_dir().join(".config").join("tabspace"),
    }
}

#[cfg(not(target_os = "windows"))]
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}
