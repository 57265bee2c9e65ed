use autoloader_core::{
    Autoloader, AutoloaderConfig, DirectoryStrategy, FixedStrategy, RecursiveStrategy, Result,
};

/// Assembles an autoloader from a configuration.
///
/// Strategies run from most to least specific: fixed registrations, then
/// namespace directories, then recursive search. A strategy with nothing
/// registered is left out of the chain.
pub fn build_autoloader(config: &AutoloaderConfig) -> Result<Autoloader> {
    config.validate()?;
    let naming = config.naming()?;
    let mut autoloader = Autoloader::new();

    if !config.fixed.is_empty() {
        let mut fixed = FixedStrategy::with_naming(naming.clone());
        for (name, path) in &config.fixed {
            fixed.register_class_path(name, path);
        }
        autoloader.register_strategy(Box::new(fixed));
    }

    if !config.namespaces.is_empty() {
        let mut directory = DirectoryStrategy::with_naming(naming.clone());
        for (namespace, dirs) in &config.namespaces {
            for dir in dirs {
                directory.register_namespace_path(namespace, dir);
            }
        }
        autoloader.register_strategy(Box::new(directory));
    }

    if !config.roots.is_empty() {
        let mut recursive = RecursiveStrategy::with_naming(naming);
        for root in &config.roots {
            recursive.register_root(root);
        }
        autoloader.register_strategy(Box::new(recursive));
    }

    tracing::info!(
        "Autoloader ready with strategies: {:?}",
        autoloader.strategy_names()
    );
    Ok(autoloader)
}

/// Bootstraps an autoloader from the default configuration location.
pub fn build_default_autoloader() -> Result<Autoloader> {
    build_autoloader(&AutoloaderConfig::load_default()?)
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module; `to_stderr` mirrors events to the terminal.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    autoloader_core::logging::init_logging(component, to_stderr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_empty_config_builds_empty_chain() {
        let autoloader = build_autoloader(&AutoloaderConfig::default()).unwrap();
        assert!(autoloader.is_empty());
        assert!(autoloader.resolve("Anything").is_none());
    }

    #[test]
    fn test_strategies_follow_specificity_order() {
        let mut config = AutoloaderConfig::default();
        config.roots.push(PathBuf::from("/lib"));
        config
            .fixed
            .insert("App\\Kernel".to_string(), PathBuf::from("/k.php"));
        config
            .namespaces
            .insert("App".to_string(), vec![PathBuf::from("/src")]);

        let autoloader = build_autoloader(&config).unwrap();
        assert_eq!(
            autoloader.strategy_names(),
            vec!["fixed", "directory", "recursive"]
        );
    }

    #[test]
    fn test_config_naming_reaches_strategies() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("com/example/Widget.java");
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::File::create(&file).unwrap();

        let config = AutoloaderConfig {
            extension: "java".to_string(),
            delimiter: '.',
            roots: vec![temp.path().to_path_buf()],
            ..Default::default()
        };

        let resolution = build_autoloader(&config)
            .unwrap()
            .resolve("com.example.Widget")
            .unwrap();
        assert_eq!(resolution.path, file);
        assert_eq!(resolution.strategy, "recursive");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AutoloaderConfig {
            extension: "a/b".to_string(),
            ..Default::default()
        };
        assert!(build_autoloader(&config).is_err());
    }
}
