// Testmode - platform/config.rs
//
// Platform-specific configuration directory resolution and settings file
// reading. Parsing and validation of the content happens in
// core::settings; this layer only locates and reads the file.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.
//
// Functions here run before the logging subsystem is initialised (the
// settings file carries the log level), so problems are returned as
// warning strings for the caller to log afterwards instead of being
// traced directly.

use crate::util::constants;
use crate::util::error::SettingsError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Testmode configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/testmode/ or %APPDATA%\Testmode\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory, with a warning, if platform
    /// dirs cannot be determined.
    pub fn resolve() -> (Self, Vec<String>) {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let paths = Self {
                config_dir: proj_dirs.config_dir().to_path_buf(),
            };
            (paths, Vec::new())
        } else {
            let warning =
                "Could not determine platform directories, using current directory".to_string();
            let paths = Self {
                config_dir: PathBuf::from("."),
            };
            (paths, vec![warning])
        }
    }

    /// Default location of the settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

/// Read the settings file at `path`, if it exists.
///
/// Returns `Ok(None)` when the file does not exist (a normal first-run
/// state; whether that deserves a warning is the caller's call, since an
/// explicitly requested path and the default location differ there).
/// Files larger than `MAX_SETTINGS_FILE_SIZE` are refused before reading.
pub fn read_settings_file(path: &Path) -> Result<Option<String>, SettingsError> {
    if !path.exists() {
        return Ok(None);
    }

    let metadata = std::fs::metadata(path).map_err(|e| SettingsError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    if metadata.len() > constants::MAX_SETTINGS_FILE_SIZE {
        return Err(SettingsError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_SETTINGS_FILE_SIZE,
        });
    }

    std::fs::read_to_string(path)
        .map(Some)
        .map_err(|e| SettingsError::Io {
            path: path.to_path_buf(),
            source: e,
        })
}
