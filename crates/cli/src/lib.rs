mod config;
mod resolve;
mod roots;

use autoloader_core::AutoloaderConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "autoloader",
    version,
    about = "Locate the file declaring a namespaced class",
    long_about = "Maps a fully qualified class name such as App\\Core\\Util\\Helper to the file that \
                  declares it, using explicit registrations, namespace directories and recursive \
                  search of registered roots."
)]
pub struct Cli {
    /// Mirror log output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a class name to a file path
    #[command(
        long_about = "Runs the name through the fixed, directory and recursive strategies in that \
                            order and prints the first match. Exits with status 1 when nothing matches."
    )]
    Resolve {
        /// Fully qualified class name, e.g. App\Core\Util\Helper
        #[arg(value_name = "NAME")]
        name: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        sources: SourceArgs,
    },
    /// List the configured search locations
    Roots {
        #[command(flatten)]
        sources: SourceArgs,
    },
    /// Print the effective configuration as JSON
    Config {
        #[command(flatten)]
        sources: SourceArgs,
    },
}

/// Where to look, layered over the configuration file.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Configuration file (defaults to $AUTOLOADER_CONFIG or ~/.autoloader/config.json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Root directory for recursive search (repeatable, searched in order)
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Namespace directory mapping (repeatable)
    #[arg(long = "namespace", value_name = "NS=DIR", value_parser = parse_key_val)]
    pub namespaces: Vec<(String, PathBuf)>,

    /// Explicit class file mapping (repeatable)
    #[arg(long = "class", value_name = "NAME=FILE", value_parser = parse_key_val)]
    pub classes: Vec<(String, PathBuf)>,

    /// File extension appended to class names
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Namespace delimiter
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,
}

impl SourceArgs {
    /// Load the configuration file and apply command-line additions on top.
    pub fn into_config(self) -> autoloader_core::Result<AutoloaderConfig> {
        let mut config = match &self.config {
            Some(path) => AutoloaderConfig::from_file(path)?,
            None => AutoloaderConfig::load_default()?,
        };

        if let Some(extension) = self.extension {
            config.extension = extension;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        config.roots.extend(self.roots);
        for (namespace, dir) in self.namespaces {
            config.namespaces.entry(namespace).or_default().push(dir);
        }
        config.fixed.extend(self.classes);

        config.validate()?;
        Ok(config)
    }
}

fn parse_key_val(s: &str) -> Result<(String, PathBuf), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=PATH, got '{}'", s))?;
    if value.is_empty() {
        return Err(format!("missing path in '{}'", s));
    }
    Ok((key.to_string(), PathBuf::from(value)))
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = autoloader_runtime::init_logging("cli", cli.verbose);

    match cli.command {
        Commands::Resolve {
            name,
            json,
            sources,
        } => resolve::run(&name, json, sources.into_config()?),
        Commands::Roots { sources } => roots::run(sources.into_config()?),
        Commands::Config { sources } => config::run(sources.into_config()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("App=/srv/src").unwrap(),
            ("App".to_string(), PathBuf::from("/srv/src"))
        );
        assert_eq!(
            parse_key_val("=/global").unwrap(),
            (String::new(), PathBuf::from("/global"))
        );
        assert!(parse_key_val("App").is_err());
        assert!(parse_key_val("App=").is_err());
    }

    #[test]
    fn test_cli_parses_resolve() {
        let cli = Cli::try_parse_from([
            "autoloader",
            "resolve",
            "App\\Core\\Helper",
            "--root",
            "/a",
            "--root",
            "/b",
            "--namespace",
            "App=/srv/src",
            "--delimiter",
            ".",
        ])
        .unwrap();

        match cli.command {
            Commands::Resolve { name, json, sources } => {
                assert_eq!(name, "App\\Core\\Helper");
                assert!(!json);
                assert_eq!(sources.roots, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
                assert_eq!(sources.namespaces.len(), 1);
                assert_eq!(sources.delimiter, Some('.'));
            }
            _ => panic!("Expected resolve command"),
        }
    }

    #[test]
    fn test_source_args_layer_over_config_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "roots": ["/from-file"], "namespaces": { "App": ["/src"] } }"#,
        )
        .unwrap();

        let args = SourceArgs {
            config: Some(path),
            roots: vec![PathBuf::from("/from-cli")],
            namespaces: vec![("App".to_string(), PathBuf::from("/more"))],
            classes: vec![("App\\Kernel".to_string(), PathBuf::from("/k.php"))],
            extension: Some("inc".to_string()),
            delimiter: None,
        };

        let config = args.into_config().unwrap();
        assert_eq!(
            config.roots,
            vec![PathBuf::from("/from-file"), PathBuf::from("/from-cli")]
        );
        assert_eq!(
            config.namespaces["App"],
            vec![PathBuf::from("/src"), PathBuf::from("/more")]
        );
        assert_eq!(config.extension, "inc");
        assert_eq!(config.fixed.len(), 1);
    }
}
