use autoloader_core::{AutoloaderConfig, Resolution};
use tracing::info;

pub fn run(
    name: &str,
    json: bool,
    config: AutoloaderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let autoloader = autoloader_runtime::build_autoloader(&config)?;
    if autoloader.is_empty() {
        info!("No search locations configured; nothing can be resolved");
    }

    let Some(resolution) = autoloader.resolve(name) else {
        return Err(format!("{} not found", name).into());
    };

    println!("{}", render(&resolution, json)?);
    info!("Resolved {} via {} strategy", name, resolution.strategy);
    Ok(())
}

/// Plain output is the bare path so it can be used in scripts.
fn render(resolution: &Resolution, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string_pretty(resolution)
    } else {
        Ok(resolution.path.display().to_string())
    }
}
