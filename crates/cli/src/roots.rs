use autoloader_core::AutoloaderConfig;
use std::path::Path;
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
struct LocationRow {
    #[tabled(rename = "Strategy")]
    strategy: &'static str,
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Exists")]
    exists: &'static str,
}

impl LocationRow {
    fn new(strategy: &'static str, key: String, path: &Path) -> Self {
        Self {
            strategy,
            key,
            path: path.display().to_string(),
            exists: if path.exists() { "yes" } else { "no" },
        }
    }
}

fn rows(config: &AutoloaderConfig) -> Vec<LocationRow> {
    let fixed = config
        .fixed
        .iter()
        .map(|(name, path)| LocationRow::new("fixed", name.clone(), path));

    let directory = config.namespaces.iter().flat_map(|(namespace, dirs)| {
        dirs.iter().map(move |dir| {
            let key = if namespace.is_empty() {
                "(global)".to_string()
            } else {
                namespace.clone()
            };
            LocationRow::new("directory", key, dir)
        })
    });

    let recursive = config
        .roots
        .iter()
        .enumerate()
        .map(|(i, root)| LocationRow::new("recursive", format!("#{}", i + 1), root));

    fixed.chain(directory).chain(recursive).collect()
}

pub fn run(config: AutoloaderConfig) -> Result<(), Box<dyn std::error::Error>> {
    let rows = rows(&config);

    if rows.is_empty() {
        println!("No search locations configured.");
    } else {
        println!("{}", Table::new(rows).with(Style::psql()).to_string());
    }
    Ok(())
}
