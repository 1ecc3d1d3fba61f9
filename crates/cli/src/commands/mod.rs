//! Subcommand implementations.

pub mod config_cmd;
pub mod examples;
pub mod extract;
pub mod targets;
pub mod templates;
pub mod transform;

use promptwright_architect::{Pipeline, ProfileTable};
use promptwright_config::AppConfig;
use tokio::io::AsyncReadExt;

/// Profile table with config-declared profiles applied over the built-ins.
pub fn profile_table(config: &AppConfig) -> ProfileTable {
    ProfileTable::with_overrides(config.model_profiles())
}

/// Pipeline for `target`, or the configured default target when omitted.
pub fn pipeline_for(config: &AppConfig, target: Option<&str>) -> Pipeline {
    let target = target.unwrap_or(config.default_target.as_str());
    Pipeline::new(&profile_table(config), target)
}

/// Use `text` when given, otherwise read the whole of stdin.
pub async fn read_request(text: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            Ok(buf.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptwright_config::ProfileConfig;

    #[test]
    fn config_profiles_reach_pipeline() {
        let config = AppConfig {
            default_target: "local-llama".into(),
            profiles: vec![ProfileConfig {
                id: "local-llama".into(),
                extra_constraints: vec!["Answer in plain text only".into()],
            }],
            ..AppConfig::default()
        };

        let pipeline = pipeline_for(&config, None);
        assert_eq!(pipeline.target(), "local-llama");
        assert_eq!(pipeline.profile().extra_constraints.len(), 1);
    }

    #[test]
    fn explicit_target_wins_over_config() {
        let config = AppConfig::default();
        let pipeline = pipeline_for(&config, Some("gpt-4o"));
        assert_eq!(pipeline.target(), "gpt-4o");
    }

    #[tokio::test]
    async fn given_text_is_used_verbatim() {
        let text = read_request(Some("summarize this".into())).await.unwrap();
        assert_eq!(text, "summarize this");
    }
}
