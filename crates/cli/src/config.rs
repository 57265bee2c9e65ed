use autoloader_core::AutoloaderConfig;

pub fn run(config: AutoloaderConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
