//! Development environment loaded from `.env` files.
//!
//! Files are read from the project directory for a given mode, later files
//! overriding earlier ones:
//!
//! 1. `.env`
//! 2. `.env.local`
//! 3. `.env.<mode>`
//! 4. `.env.<mode>.local`
//!
//! Variables already present in the process environment win over every file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use kisan_core::credential::CredentialSource;
use kisan_types::error::ConfigError;

/// Credential source for the development shim.
pub struct DevEnvironment {
    mode: String,
    file_values: HashMap<String, String>,
    loaded_files: Vec<PathBuf>,
}

impl DevEnvironment {
    /// File names consulted for `mode`, lowest precedence first.
    pub fn file_names(mode: &str) -> [String; 4] {
        [
            ".env".to_string(),
            ".env.local".to_string(),
            format!(".env.{mode}"),
            format!(".env.{mode}.local"),
        ]
    }

    /// Load every existing env file for `mode` from `dir`.
    ///
    /// Missing files are skipped. A file that exists but cannot be parsed is
    /// an error.
    pub fn load(dir: &Path, mode: &str) -> Result<Self, ConfigError> {
        let mut file_values = HashMap::new();
        let mut loaded_files = Vec::new();

        for name in Self::file_names(mode) {
            let path = dir.join(&name);
            if !path.is_file() {
                continue;
            }

            let iter = dotenvy::from_path_iter(&path).map_err(|e| ConfigError::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            for item in iter {
                let (key, value) = item.map_err(|e| ConfigError::Parse {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
                file_values.insert(key, value);
            }

            tracing::debug!(path = %path.display(), "loaded env file");
            loaded_files.push(path);
        }

        Ok(Self {
            mode: mode.to_string(),
            file_values,
            loaded_files,
        })
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.loaded_files
    }
}

impl CredentialSource for DevEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .or_else(|| self.file_values.get(key).cloned())
    }
}
