//! End-to-end tests for the promptwright pipeline.
//!
//! These exercise extraction, assembly, profile resolution, and the template
//! catalog together, the way the CLI drives them.

use std::collections::BTreeMap;

use promptwright_architect::{
    DEFAULT_TARGET, MAX_KEYWORDS, Pipeline, ProfileTable, QUICK_EXAMPLES, create_pipeline,
};
use promptwright_config::AppConfig;
use promptwright_core::{
    Audience, Category, Complexity, Intent, OutputFormat, TemplateError, Tone,
};
use promptwright_templates::{TemplateLibrary, placeholders};

const TARGETS: [&str; 5] = [
    "claude-3.5-sonnet",
    "claude-3.5-haiku",
    "gpt-4-turbo",
    "gpt-4o",
    "gemini-pro",
];

const SAMPLE_INPUTS: [&str; 8] = [
    "",
    "analyze the code for bugs",
    "Summarize this in 200 words",
    "Write a short, detailed blog post about AI ethics for beginners",
    "Create a chatbot that helps students learn math step by step",
    "Développer une stratégie — résumé rapide, s'il vous plaît",
    "   \n\t  ",
    "Explain Explain EXPLAIN quantum quantum computing computing computing",
];

// ── Determinism ──────────────────────────────────────────────────────────

#[test]
fn transform_is_deterministic_for_every_target() {
    for target in TARGETS {
        let pipeline = create_pipeline(target);
        for input in SAMPLE_INPUTS {
            let first = pipeline.transform(input);
            let second = create_pipeline(target).transform(input);
            assert_eq!(first, second, "target {target}, input {input:?}");
        }
    }
}

// ── Totality ─────────────────────────────────────────────────────────────

#[test]
fn empty_input_yields_all_defaults() {
    let context = create_pipeline(DEFAULT_TARGET).extract_context("");

    assert_eq!(context.intent, Intent::GeneralAssistance);
    assert_eq!(context.category, Category::ContentCreation);
    assert_eq!(context.audience, Audience::GeneralPublic);
    assert_eq!(context.tone, Tone::Professional);
    assert_eq!(context.output_format, OutputFormat::Paragraph);
    assert_eq!(context.complexity, Complexity::Intermediate);
    assert!(context.constraints.is_empty());
    assert!(context.keywords.is_empty());
}

#[test]
fn every_input_produces_a_prompt() {
    let pipeline = create_pipeline(DEFAULT_TARGET);
    for input in SAMPLE_INPUTS {
        let prompt = pipeline.transform(input);
        assert!(!prompt.role_definition.is_empty());
        assert!(!prompt.full_prompt.is_empty());
        assert!(prompt.examples.is_none());
    }
}

// ── Classification ───────────────────────────────────────────────────────

#[test]
fn analysis_outranks_technical() {
    let context = create_pipeline(DEFAULT_TARGET).extract_context("analyze the code for bugs");
    assert_eq!(context.category, Category::Analysis);
}

#[test]
fn word_count_becomes_constraint() {
    let context = create_pipeline(DEFAULT_TARGET).extract_context("Summarize this in 200 words");
    assert!(
        context.constraints.iter().any(|c| c.contains("200 words")),
        "constraints: {:?}",
        context.constraints
    );
}

#[test]
fn keywords_are_bounded_unique_and_lowercase() {
    let pipeline = create_pipeline(DEFAULT_TARGET);
    let long_input = "Design Scalable Distributed Systems Using Modern Cloud Native \
                      Patterns Including Service Meshes Observability Tracing Logging \
                      Metrics Alerting Deployment Pipelines Rollbacks Canaries";

    for input in SAMPLE_INPUTS.iter().copied().chain([long_input]) {
        let keywords = pipeline.extract_context(input).keywords;
        assert!(keywords.len() <= MAX_KEYWORDS, "{input:?} gave {keywords:?}");

        for (i, keyword) in keywords.iter().enumerate() {
            assert_eq!(keyword, &keyword.to_lowercase());
            assert!(!keywords[..i].contains(keyword), "duplicate {keyword}");
        }
    }

    assert_eq!(pipeline.extract_context(long_input).keywords.len(), MAX_KEYWORDS);
}

// ── Assembly ─────────────────────────────────────────────────────────────

#[test]
fn instruction_count_tracks_keywords() {
    for target in TARGETS {
        let pipeline = create_pipeline(target);
        for input in SAMPLE_INPUTS {
            let context = pipeline.extract_context(input);
            let prompt = pipeline.assemble(&context);
            let expected = if context.keywords.is_empty() { 4 } else { 5 };
            assert_eq!(prompt.instructions.len(), expected, "input {input:?}");
        }
    }
}

#[test]
fn section_headers_appear_once_in_order() {
    const HEADERS: [&str; 4] = [
        "# Role Definition",
        "# Instructions",
        "# Constraints",
        "# Quality Criteria",
    ];

    for (_, request) in QUICK_EXAMPLES {
        let prompt = create_pipeline("gpt-4o").transform(request);
        let text = &prompt.full_prompt;

        let mut last = 0;
        for header in HEADERS {
            assert_eq!(text.matches(header).count(), 1, "{header} in {request:?}");
            let at = text.find(header).unwrap();
            assert!(at >= last, "{header} out of order");
            last = at;
        }
    }
}

// ── Profiles ─────────────────────────────────────────────────────────────

#[test]
fn unknown_target_falls_back_to_default_profile() {
    let fallback = create_pipeline("unknown-model-xyz");
    let default = create_pipeline(DEFAULT_TARGET);

    assert_eq!(fallback.target(), DEFAULT_TARGET);
    assert_eq!(fallback.profile(), default.profile());

    let input = "Write a technical article about neural networks";
    assert_eq!(fallback.transform(input), default.transform(input));
    assert_eq!(fallback.export(input).target_llm, DEFAULT_TARGET);
}

#[test]
fn config_default_matches_profile_fallback() {
    let config = AppConfig::default();
    let table = ProfileTable::builtin();
    assert_eq!(config.default_target, table.default_profile().id);
    assert_eq!(table.resolve("unknown-model-xyz").id, config.default_target);
}

#[test]
fn config_profile_extends_builtin_table() {
    let config: AppConfig = toml::from_str(
        r#"
default_target = "local-llama"

[[profiles]]
id = "local-llama"
extra_constraints = ["Answer in plain text only"]
"#,
    )
    .unwrap();
    config.validate().unwrap();

    let table = ProfileTable::with_overrides(config.model_profiles());
    assert_eq!(table.len(), TARGETS.len() + 1);

    let pipeline = Pipeline::new(&table, &config.default_target);
    let prompt = pipeline.transform("summarize the quarterly report");
    assert!(prompt.constraints.iter().any(|c| c == "Answer in plain text only"));
}

// ── Templates ────────────────────────────────────────────────────────────

#[test]
fn blog_post_round_trip_leaves_no_placeholders() {
    let library = TemplateLibrary::builtin().unwrap();
    let blog = library.get("blog_post").unwrap();

    let filled = library.fill("blog_post", &blog.example_values).unwrap();
    let remaining = placeholders(&filled);
    for variable in &blog.variables {
        assert!(!remaining.contains(variable), "{{{variable}}} left in output");
    }
}

#[test]
fn every_template_fills_from_its_examples() {
    let library = TemplateLibrary::builtin().unwrap();
    for template in library.iter() {
        let filled = template.example();
        assert!(
            template.missing_variables(&template.example_values).is_empty(),
            "{}",
            template.id
        );
        for variable in &template.variables {
            assert!(!filled.contains(&format!("{{{variable}}}")), "{}", template.id);
        }
    }
}

#[test]
fn unknown_template_is_an_error() {
    let library = TemplateLibrary::builtin().unwrap();
    let err = library.fill("no_such_template", &BTreeMap::new()).unwrap_err();
    assert!(matches!(err, TemplateError::NotFound(ref id) if id == "no_such_template"));
}

// ── Config files ─────────────────────────────────────────────────────────

#[test]
fn config_file_drives_default_target() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_target = \"gemini-pro\"\n").unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    let table = ProfileTable::with_overrides(config.model_profiles());
    let pipeline = Pipeline::new(&table, &config.default_target);
    assert_eq!(pipeline.target(), "gemini-pro");
}

#[tokio::test]
async fn exported_json_can_be_written_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prompt.json");

    let export = create_pipeline("claude-3.5-haiku").export("Explain recursion to beginners");
    tokio::fs::write(&path, export.to_json_pretty().unwrap()).await.unwrap();

    let text = tokio::fs::read_to_string(&path).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["target_llm"], "claude-3.5-haiku");
    assert_eq!(value["context"], "Explain recursion to beginners");
}
