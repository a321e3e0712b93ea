//! CLI command definitions for the `kisan` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod predict;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use kisan_infra::config::DEFAULT_CONFIG_FILE;
use kisan_types::advisory::Provider;

/// Agricultural advisory proxy for OpenAI-compatible LLM providers.
#[derive(Parser)]
#[command(name = "kisan", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the configuration file.
    #[arg(long, global = true, env = "KISAN_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the production advisory server.
    Serve {
        /// Port to listen on [default: 3000].
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to [default: 127.0.0.1].
        #[arg(long)]
        host: Option<String>,

        /// Directory of the built SPA to serve as the fallback.
        #[arg(long, env = "KISAN_WEB_DIR")]
        web_dir: Option<PathBuf>,
    },

    /// Start the development server with the /api/llm shim.
    Dev {
        /// Port to listen on [default: 8080].
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to [default: 0.0.0.0].
        #[arg(long)]
        host: Option<String>,

        /// Mode selecting which `.env.<mode>` files load.
        #[arg(long, default_value = "development")]
        mode: String,

        /// Directory containing the `.env` files.
        #[arg(long, default_value = ".")]
        env_dir: PathBuf,

        /// Directory of the built SPA to serve as the fallback.
        #[arg(long, env = "KISAN_WEB_DIR")]
        web_dir: Option<PathBuf>,
    },

    /// Send one advisory prompt and print the reply.
    Ask {
        /// The farming question.
        prompt: String,

        /// Upstream provider.
        #[arg(long, value_enum, default_value_t = ProviderArg::Openai)]
        provider: ProviderArg,

        /// Model override (provider default otherwise).
        #[arg(long)]
        model: Option<String>,
    },

    /// Predict crop yield from soil nutrients, location, and rainfall.
    Predict {
        /// Nitrogen (N).
        #[arg(long)]
        nitrogen: f64,

        /// Phosphorus (P).
        #[arg(long)]
        phosphorus: f64,

        /// Potassium (K).
        #[arg(long)]
        potassium: f64,

        /// Indian state or union territory.
        #[arg(long)]
        state: String,

        /// Rainfall in millimetres.
        #[arg(long)]
        rainfall: f64,

        /// Field area in hectares.
        #[arg(long)]
        area: f64,

        /// Upstream provider.
        #[arg(long, value_enum, default_value_t = ProviderArg::Openai)]
        provider: ProviderArg,

        /// Model override (provider default otherwise).
        #[arg(long)]
        model: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Provider choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    Openai,
    Openrouter,
}

impl From<ProviderArg> for Provider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Openai => Provider::OpenAi,
            ProviderArg::Openrouter => Provider::OpenRouter,
        }
    }
}
