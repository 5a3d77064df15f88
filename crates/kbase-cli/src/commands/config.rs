use anyhow::{Context, Result};
use kbase_infrastructure::ConfigService;

/// Prints the config file path followed by the effective settings.
///
/// Creates the file with defaults on first use.
pub fn show() -> Result<()> {
    let service = ConfigService::new().context("Failed to resolve config directory")?;
    let config = service
        .get_config()
        .with_context(|| format!("Failed to load {}", service.path().display()))?;

    println!("# {}", service.path().display());
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
