use std::path::Path;

use anyhow::Result;

use vitrine_core::AppConfig;

/// Print the effective configuration, or write the defaults with `init`
pub fn run(config: &AppConfig, path: &Path, init: bool) -> Result<()> {
    if !init {
        println!("# {}", path.display());
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    AppConfig::default().save_to(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
