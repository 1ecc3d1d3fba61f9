//! `promptwright targets` — List supported target models.

use promptwright_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let table = super::profile_table(&config);

    println!("🎯 Target Models");
    println!("================");
    for profile in table.iter() {
        let marker = if profile.id == config.default_target { " (default)" } else { "" };
        println!("  {}{marker}", profile.id);
        for constraint in &profile.extra_constraints {
            println!("      • {constraint}");
        }
    }
    Ok(())
}
