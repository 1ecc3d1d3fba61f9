//! `promptwright transform` — Turn a request into a structured prompt.

use std::path::PathBuf;

use clap::ValueEnum;
use promptwright_config::AppConfig;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The composed prompt document
    Markdown,
    /// The JSON export with target tag
    Json,
}

impl Format {
    fn from_config(value: &str) -> Self {
        if value == "json" { Format::Json } else { Format::Markdown }
    }
}

pub async fn run(
    text: Option<String>,
    target: Option<String>,
    format: Option<Format>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let request = super::read_request(text).await?;
    let format = format.unwrap_or_else(|| Format::from_config(&config.output.format));

    let pipeline = super::pipeline_for(&config, target.as_deref());
    let rendered = render(&pipeline, &request, format)?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, &rendered).await?;
            info!(path = %path.display(), target = pipeline.target(), "Prompt written");
            println!("✅ Prompt saved to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn render(
    pipeline: &promptwright_architect::Pipeline,
    request: &str,
    format: Format,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        Format::Markdown => pipeline.transform(request).full_prompt,
        Format::Json => pipeline.export(request).to_json_pretty()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptwright_architect::create_pipeline;

    #[test]
    fn config_format_mapping() {
        assert_eq!(Format::from_config("json"), Format::Json);
        assert_eq!(Format::from_config("markdown"), Format::Markdown);
    }

    #[test]
    fn json_render_is_tagged_with_target() {
        let pipeline = create_pipeline("gemini-pro");
        let json = render(&pipeline, "analyze the code for bugs", Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["target_llm"], "gemini-pro");
    }

    #[test]
    fn markdown_render_is_full_prompt() {
        let pipeline = create_pipeline("gemini-pro");
        let text = render(&pipeline, "analyze the code for bugs", Format::Markdown).unwrap();
        assert!(text.starts_with("# Role Definition\n"));
    }
}
