//! JSON configuration describing which strategies to assemble.
//!
//! ```json
//! {
//!   "extension": "php",
//!   "delimiter": "\\",
//!   "fixed": { "Dummy\\Foo": "/srv/app/Foo.php" },
//!   "namespaces": { "App": ["/srv/app/src"] },
//!   "roots": ["/srv/app/lib"]
//! }
//! ```

use crate::error::{AutoloaderError, Result};
use autoloader_api::NamingScheme;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_ENV_VAR: &str = "AUTOLOADER_CONFIG";
const DEFAULT_CONFIG_FILE: &str = ".autoloader/config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutoloaderConfig {
    /// File extension appended to strict names
    pub extension: String,
    /// Namespace delimiter
    pub delimiter: char,
    /// Explicit name -> file registrations
    pub fixed: BTreeMap<String, PathBuf>,
    /// Namespace prefix -> base directories
    pub namespaces: BTreeMap<String, Vec<PathBuf>>,
    /// Roots for recursive search, in search order
    pub roots: Vec<PathBuf>,
}

impl Default for AutoloaderConfig {
    fn default() -> Self {
        Self {
            extension: NamingScheme::DEFAULT_EXTENSION.to_string(),
            delimiter: NamingScheme::DEFAULT_DELIMITER,
            fixed: BTreeMap::new(),
            namespaces: BTreeMap::new(),
            roots: Vec::new(),
        }
    }
}

impl AutoloaderConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        info!("Loaded autoloader config from {}", path.display());
        Ok(config)
    }

    /// `$AUTOLOADER_CONFIG` when set (the file must exist), otherwise
    /// `~/.autoloader/config.json` when present, otherwise defaults.
    pub fn load_default() -> Result<Self> {
        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_file(Path::new(&env_path));
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE))
    }

    pub fn naming(&self) -> Result<NamingScheme> {
        Ok(NamingScheme::new(self.delimiter, self.extension.as_str())?)
    }

    pub fn validate(&self) -> Result<()> {
        let naming = self.naming()?;

        for name in self.fixed.keys() {
            if naming.trim_leading(name).is_empty() {
                return Err(AutoloaderError::Config(format!(
                    "fixed entry '{}' has no class name",
                    name
                )));
            }
        }

        for (namespace, dirs) in &self.namespaces {
            if dirs.is_empty() {
                return Err(AutoloaderError::Config(format!(
                    "namespace '{}' has no directories",
                    namespace
                )));
            }
        }

        Ok(())
    }

    /// True when no strategy would have anything to search
    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty() && self.namespaces.is_empty() && self.roots.is_empty()
    }
}
