//! `promptwright extract` — Print the context extracted from a request.

use promptwright_config::AppConfig;

pub async fn run(
    text: Option<String>,
    target: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let request = super::read_request(text).await?;

    let pipeline = super::pipeline_for(&config, target.as_deref());
    let context = pipeline.extract_context(&request);
    println!("{}", serde_json::to_string_pretty(&context)?);
    Ok(())
}
