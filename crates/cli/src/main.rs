//! promptwright CLI — the main entry point.
//!
//! Commands:
//! - `transform` — Turn a request into a structured prompt
//! - `extract`   — Show the context extracted from a request
//! - `targets`   — List supported target models
//! - `templates` — Browse and fill the prompt template catalog
//! - `examples`  — List or run quick example requests
//! - `config`    — Create, show, locate, or validate configuration

use clap::{Parser, Subcommand};

mod commands;

use commands::transform::Format;

#[derive(Parser)]
#[command(
    name = "promptwright",
    about = "promptwright — structured prompts from plain requests",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a request into a structured prompt
    Transform {
        /// Request text (read from stdin when omitted)
        text: Option<String>,

        /// Target model identifier
        #[arg(short, long)]
        target: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Print the context extracted from a request as JSON
    Extract {
        /// Request text (read from stdin when omitted)
        text: Option<String>,

        /// Target model identifier
        #[arg(short, long)]
        target: Option<String>,
    },

    /// List supported target models
    Targets,

    /// Browse and fill prompt templates
    Templates {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// List quick example requests, or transform one by label
    Examples {
        /// Example label, e.g. "business"
        label: Option<String>,

        /// Target model identifier
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum TemplateAction {
    /// List all templates
    List,

    /// Show one template and its variables
    Show { id: String },

    /// Fill a template with values
    Fill {
        id: String,

        /// Placeholder value as KEY=VALUE (repeatable)
        #[arg(long = "var", value_name = "KEY=VALUE")]
        vars: Vec<String>,

        /// Start from the template's example values
        #[arg(long)]
        example: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Validate the config file
    Validate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so prompts on stdout stay pipeable
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Transform {
            text,
            target,
            format,
            output,
        } => commands::transform::run(text, target, format, output).await?,
        Commands::Extract { text, target } => commands::extract::run(text, target).await?,
        Commands::Targets => commands::targets::run().await?,
        Commands::Templates { action } => match action {
            TemplateAction::List => commands::templates::list().await?,
            TemplateAction::Show { id } => commands::templates::show(&id).await?,
            TemplateAction::Fill { id, vars, example } => {
                commands::templates::fill(&id, &vars, example).await?
            }
        },
        Commands::Examples { label, target } => commands::examples::run(label, target).await?,
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => commands::config_cmd::init(force).await?,
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
            ConfigAction::Validate => commands::config_cmd::validate().await?,
        },
    }

    Ok(())
}
