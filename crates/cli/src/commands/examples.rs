//! `promptwright examples` — List or run quick example requests.

use promptwright_architect::{QUICK_EXAMPLES, quick_example};
use promptwright_config::AppConfig;

pub async fn run(
    label: Option<String>,
    target: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(label) = label else {
        println!("💡 Quick Examples");
        println!("=================");
        for (label, request) in QUICK_EXAMPLES {
            println!("  {label:<18} {request}");
        }
        println!();
        println!("  Try: promptwright examples \"{}\"", QUICK_EXAMPLES[0].0);
        return Ok(());
    };

    let request = quick_example(&label).ok_or_else(|| {
        let labels: Vec<&str> = QUICK_EXAMPLES.iter().map(|(name, _)| *name).collect();
        format!("Unknown example '{label}', expected one of: {}", labels.join(", "))
    })?;

    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let pipeline = super::pipeline_for(&config, target.as_deref());
    println!("💬 {request}\n");
    println!("{}", pipeline.transform(request).full_prompt);
    Ok(())
}
