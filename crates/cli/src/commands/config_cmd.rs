//! `promptwright config` — Configuration management commands.

use std::path::Path;

use promptwright_config::AppConfig;
use promptwright_core::Error;

pub async fn init(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::config_dir().join("config.toml");
    write_starter(&config_path, force).await?;
    println!("✅ Wrote starter config to {}", config_path.display());
    Ok(())
}

/// Write the default config to `path`, creating parent directories.
/// Refuses to replace an existing file unless `force` is set.
async fn write_starter(path: &Path, force: bool) -> promptwright_core::Result<()> {
    if !force && tokio::fs::try_exists(path).await? {
        return Err(Error::Config {
            message: format!("{} already exists (use --force to overwrite)", path.display()),
        });
    }
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir).await?;
    }
    tokio::fs::write(path, AppConfig::default_toml()).await?;
    tracing::info!(path = %path.display(), "Starter config written");
    Ok(())
}

pub async fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let table = super::profile_table(&config);
            if table.get(&config.default_target).is_none() {
                println!(
                    "   ⚠️  Default target '{}' is unknown; requests will use {}",
                    config.default_target,
                    table.default_profile().id
                );
            } else {
                println!("   ✅ All checks passed");
            }

            println!();
            println!("   Target:    {}", config.default_target);
            println!("   Format:    {}", config.output.format);
            println!("   Profiles:  {} ({} from config)", table.len(), config.profiles.len());
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::config_dir().join("config.toml");
    println!("{}", config_path.display());
    Ok(())
}
