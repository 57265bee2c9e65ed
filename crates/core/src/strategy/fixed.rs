use autoloader_api::{LoadingStrategy, NamingScheme};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Explicit symbolic name -> file registrations.
#[derive(Debug, Clone, Default)]
pub struct FixedStrategy {
    classes: HashMap<String, PathBuf>,
    naming: NamingScheme,
}

impl FixedStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_naming(naming: NamingScheme) -> Self {
        Self {
            classes: HashMap::new(),
            naming,
        }
    }

    /// Register the file declaring `name`. `\Foo\Bar` and `Foo\Bar` are the
    /// same key; a later registration replaces an earlier one.
    pub fn register_class_path(&mut self, name: &str, path: impl Into<PathBuf>) {
        let key = self.naming.trim_leading(name).to_string();
        if let Some(previous) = self.classes.insert(key, path.into()) {
            debug!("Replacing fixed path {} for {}", previous.display(), name);
        }
    }

    pub fn with_class_path(mut self, name: &str, path: impl Into<PathBuf>) -> Self {
        self.register_class_path(name, path);
        self
    }

    pub fn classes(&self) -> &HashMap<String, PathBuf> {
        &self.classes
    }
}

impl LoadingStrategy for FixedStrategy {
    fn name(&self) -> &str {
        "fixed"
    }

    fn resolve(&self, symbolic_name: &str) -> Option<PathBuf> {
        let path = self.classes.get(self.naming.trim_leading(symbolic_name))?;
        if path.is_file() {
            Some(path.clone())
        } else {
            debug!(
                "Fixed path {} for {} is not a file",
                path.display(),
                symbolic_name
            );
            None
        }
    }
}
