fn main() {
    if let Err(e) = autoloader_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
