use anyhow::Result;

use folio_core::AppConfig;

pub fn run(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if !init {
        let state = if path.exists() { "" } else { " (not created, using defaults)" };
        println!("Config file: {}{}", path.display(), state);
        println!("Converter: {}", config.feed.converter_url);
        println!("Cache TTL: {}s", config.feed.cache_ttl_secs);
        if let Some(handle) = &config.general.default_handle {
            println!("Default handle: {}", handle);
        }
        return Ok(());
    }

    if path.exists() {
        println!("Config file already exists: {}", path.display());
        return Ok(());
    }

    AppConfig::default().save()?;
    println!("Wrote default configuration to {}", path.display());

    Ok(())
}
