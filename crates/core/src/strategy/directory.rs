//! Namespace-to-directory search (non-recursive).
//!
//! A namespace prefix is mapped to one or more base directories. The segments
//! of a name that follow the prefix become the relative path of the file, e.g.
//! with `App` -> `/srv/src`, `App\Http\Kernel` resolves to
//! `/srv/src/Http/Kernel.php`.

use autoloader_api::{LoadingStrategy, NamingScheme};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};

#[derive(Debug, Clone, Default)]
pub struct DirectoryStrategy {
    /// Namespace prefix (no leading or trailing delimiter) -> base directories
    namespaces: HashMap<String, Vec<PathBuf>>,
    naming: NamingScheme,
}

impl DirectoryStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_naming(naming: NamingScheme) -> Self {
        Self {
            namespaces: HashMap::new(),
            naming,
        }
    }

    /// Map `namespace` to `path`. An empty namespace is the global namespace.
    /// Registering a namespace again adds another candidate directory.
    pub fn register_namespace_path(&mut self, namespace: &str, path: impl Into<PathBuf>) {
        let key = self
            .naming
            .trim_leading(namespace)
            .trim_end_matches(self.naming.delimiter());
        self.namespaces
            .entry(key.to_string())
            .or_default()
            .push(path.into());
    }

    pub fn with_namespace_path(mut self, namespace: &str, path: impl Into<PathBuf>) -> Self {
        self.register_namespace_path(namespace, path);
        self
    }

    pub fn namespaces(&self) -> &HashMap<String, Vec<PathBuf>> {
        &self.namespaces
    }

    /// Longest registered namespace that prefixes `name` on a segment boundary.
    /// Returns the namespace directories and the remainder of the name.
    fn longest_match<'a>(&self, name: &'a str) -> Option<(&[PathBuf], &'a str)> {
        let delimiter = self.naming.delimiter();
        let mut best_match: Option<(usize, &[PathBuf], &'a str)> = None;

        for (namespace, dirs) in &self.namespaces {
            let remainder = if namespace.is_empty() {
                name
            } else {
                match name
                    .strip_prefix(namespace.as_str())
                    .and_then(|rest| rest.strip_prefix(delimiter))
                {
                    Some(rest) => rest,
                    None => continue,
                }
            };

            match &best_match {
                Some((len, _, _)) if *len >= namespace.len() => {}
                _ => best_match = Some((namespace.len(), dirs.as_slice(), remainder)),
            }
        }

        best_match.map(|(_, dirs, remainder)| (dirs, remainder))
    }
}

/// A segment must map to exactly one normal path component, so a name can
/// never climb out of, or replace, the namespace directory.
fn is_plain_segment(segment: &str) -> bool {
    let mut components = Path::new(segment).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) => part == segment,
        _ => false,
    }
}

impl LoadingStrategy for DirectoryStrategy {
    fn name(&self) -> &str {
        "directory"
    }

    fn resolve(&self, symbolic_name: &str) -> Option<PathBuf> {
        let name = self.naming.trim_leading(symbolic_name);
        let (dirs, remainder) = self.longest_match(name)?;

        let mut segments: Vec<&str> = remainder.split(self.naming.delimiter()).collect();
        if !segments.iter().all(|s| is_plain_segment(s)) {
            debug!("Malformed name {:?} for directory search", symbolic_name);
            return None;
        }

        let class_name = segments.pop()?;
        let mut relative: PathBuf = segments.iter().collect();
        relative.push(self.naming.file_name(class_name));

        dirs.iter().map(|dir| dir.join(&relative)).find(|candidate| {
            let found = candidate.is_file();
            trace!("Probing {} -> {}", candidate.display(), found);
            found
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::File::create(path).unwrap();
    }

    #[test]
    fn test_namespace_mapped_to_directory() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("src");
        touch(&src.join("Http/Kernel.php"));

        let strategy = DirectoryStrategy::new().with_namespace_path("App", &src);

        assert_eq!(
            strategy.resolve("App\\Http\\Kernel"),
            Some(src.join("Http/Kernel.php"))
        );
        assert_eq!(
            strategy.resolve("\\App\\Http\\Kernel"),
            Some(src.join("Http/Kernel.php"))
        );
        assert_eq!(strategy.resolve("App\\Kernel"), None);
        assert_eq!(strategy.resolve("App"), None);
    }

    #[test]
    fn test_longest_prefix_match() {
        let temp = tempfile::tempdir().unwrap();
        let general = temp.path().join("general");
        let specific = temp.path().join("specific");
        touch(&general.join("Http/Kernel.php"));
        touch(&specific.join("Kernel.php"));

        let strategy = DirectoryStrategy::new()
            .with_namespace_path("App", &general)
            .with_namespace_path("App\\Http\\", &specific);

        assert_eq!(
            strategy.resolve("App\\Http\\Kernel"),
            Some(specific.join("Kernel.php"))
        );
    }

    #[test]
    fn test_prefix_must_end_on_segment_boundary() {
        let temp = tempfile::tempdir().unwrap();
        touch(&temp.path().join("Kernel.php"));

        let strategy = DirectoryStrategy::new().with_namespace_path("App", temp.path());

        assert_eq!(strategy.resolve("Application\\Kernel"), None);
    }

    #[test]
    fn test_global_namespace_and_candidate_order() {
        let temp = tempfile::tempdir().unwrap();
        let first = temp.path().join("first");
        let second = temp.path().join("second");
        touch(&second.join("Vendor/Thing.php"));

        let strategy = DirectoryStrategy::new()
            .with_namespace_path("", &first)
            .with_namespace_path("\\", &second);

        assert_eq!(
            strategy.resolve("Vendor\\Thing"),
            Some(second.join("Vendor/Thing.php"))
        );

        touch(&first.join("Vendor/Thing.php"));
        assert_eq!(
            strategy.resolve("Vendor\\Thing"),
            Some(first.join("Vendor/Thing.php"))
        );
    }

    #[test]
    fn test_no_recursive_fallback() {
        let temp = tempfile::tempdir().unwrap();
        touch(&temp.path().join("nested/Widget.php"));

        let strategy = DirectoryStrategy::new().with_namespace_path("App", temp.path());

        assert_eq!(strategy.resolve("App\\Widget"), None);
    }

    #[test]
    fn test_rejects_path_traversal_segments() {
        let temp = tempfile::tempdir().unwrap();
        touch(&temp.path().join("Secret.php"));
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();

        let strategy = DirectoryStrategy::new().with_namespace_path("App", &src);

        assert_eq!(strategy.resolve("App\\..\\Secret"), None);
        assert_eq!(strategy.resolve("App\\\\Secret"), None);
        assert_eq!(strategy.resolve("App\\../Secret"), None);
        assert_eq!(strategy.resolve("App\\sub/../../Secret"), None);

        let absolute = temp.path().join("Secret");
        assert_eq!(
            strategy.resolve(&format!("App\\{}", absolute.display())),
            None
        );
    }

    #[test]
    fn test_plain_segment_check() {
        assert!(is_plain_segment("Http"));
        assert!(is_plain_segment("Kernel"));
        assert!(!is_plain_segment(""));
        assert!(!is_plain_segment("."));
        assert!(!is_plain_segment(".."));
        assert!(!is_plain_segment("../Secret"));
        assert!(!is_plain_segment("a/b"));
        assert!(!is_plain_segment("Http/"));
        assert!(!is_plain_segment("/etc"));
    }
}
