use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::config::ResolveOptions;
use crate::generation::Language;

#[derive(Parser, Debug)]
#[command(name = "assist")]
#[command(about = "Multilingual AI chat assistant")]
#[command(version)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub generation: GenerationArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every command that talks to the model.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GenerationArgs {
    /// Response language (name or ISO 639-1 code, e.g. French or fr)
    #[arg(short = 'l', long)]
    pub language: Option<Language>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// API endpoint URL (OpenAI-compatible)
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Sampling temperature (0.0 to 1.0)
    #[arg(short = 't', long)]
    pub temperature: Option<f32>,

    /// Maximum response length in tokens (50 to 500)
    #[arg(long)]
    pub max_tokens: Option<u32>,
}

impl From<GenerationArgs> for ResolveOptions {
    fn from(args: GenerationArgs) -> Self {
        Self {
            endpoint: args.endpoint,
            model: args.model,
            language: args.language,
            temperature: args.temperature,
            max_tokens: args.max_tokens,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive chat session (default)
    Chat {
        #[command(flatten)]
        generation: GenerationArgs,
    },
    /// Ask a single question (reads from FILE or stdin)
    Ask {
        /// File containing the question (reads from stdin if not provided)
        file: Option<String>,

        #[command(flatten)]
        generation: GenerationArgs,
    },
    /// List supported response languages
    Languages,
    /// Configure default settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
