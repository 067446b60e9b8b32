//! TenseFlow CLI - practice English tenses from the terminal.
//!
//! Generates tagged example sentences, sends learner sentences to a remote
//! analyzer, and explains POS tags and tense formulas.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tenseflow_core::ProfilePreset;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod config;
mod render;

use commands::config as config_cmd;
use config::Config;

/// TenseFlow CLI - tagged example sentences for English tense practice.
///
/// Run `tf generate` for a random example or `tf analyze "<sentence>"` to
/// have a sentence analyzed.
#[derive(Parser, Debug)]
#[command(
    name = "tf",
    author,
    version,
    about = "TenseFlow: English tense examples with POS tags and transcriptions",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Built-in grammar profile: full, classic or minimal.
    #[arg(long, global = true)]
    profile: Option<ProfilePreset>,

    /// Grammar profile TOML file (overrides --profile).
    #[arg(long, global = true)]
    profile_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate random example sentences (default command).
    Generate {
        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,

        /// Number of examples to generate.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Print examples as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Normalize a saved analyzer response.
    Normalize {
        /// JSON file to read (defaults to stdin).
        file: Option<PathBuf>,

        /// Print examples as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Send a sentence to the analyzer.
    Analyze {
        /// Sentence to analyze.
        sentence: String,

        /// Print examples as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Browse the tag and tense reference tables.
    #[command(subcommand)]
    Reference(ReferenceCommands),

    /// Print the JSON Schema of analyzer responses.
    Schema {
        /// Print the request schema instead.
        #[arg(long)]
        request: bool,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Reference table commands.
#[derive(Subcommand, Debug)]
enum ReferenceCommands {
    /// List POS tags, or explain one.
    Tags {
        /// Tag code, e.g. VBZ.
        code: Option<String>,
    },

    /// List tenses, or explain one.
    Tenses {
        /// Tense name, e.g. "Past Simple".
        name: Option<String>,
    },
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let command = cli.command.unwrap_or(Commands::Generate {
        seed: None,
        count: 1,
        json: false,
    });

    let (profile, profile_file) = (cli.profile, cli.profile_file);
    let load_config = || -> Result<Config> {
        let config = Config::load()?;
        Ok(config.with_overrides(profile, profile_file.clone()))
    };

    match command {
        Commands::Generate { seed, count, json } => {
            let profile = load_config()?.grammar_profile()?;
            commands::generate::execute(profile, seed, count, json)?;
        }

        Commands::Normalize { file, json } => {
            let profile = load_config()?.grammar_profile()?;
            commands::normalize::execute(profile, file.as_deref(), json)?;
        }

        Commands::Analyze { sentence, json } => {
            let config = load_config()?;
            let profile = config.grammar_profile()?;
            commands::analyze::execute(&config, profile, &sentence, json)
                .await?;
        }

        Commands::Reference(reference_cmd) => {
            let tables = load_config()?.grammar_profile()?.tables();
            match reference_cmd {
                ReferenceCommands::Tags { code } => {
                    commands::reference::tags(tables, code.as_deref())?;
                }
                ReferenceCommands::Tenses { name } => {
                    commands::reference::tenses(tables, name.as_deref())?;
                }
            }
        }

        Commands::Schema { request } => {
            commands::schema::execute(request)?;
        }

        // Config commands write the persisted file only, never env overrides.
        Commands::Config(config_cmd_inner) => match config_cmd_inner {
            ConfigCommands::Show => {
                config_cmd::show(&load_config()?)?;
            }
            ConfigCommands::Set { key, value } => {
                let mut config = Config::load_file()?;
                config_cmd::set(&mut config, &key, &value)?;
            }
            ConfigCommands::Get { key } => {
                config_cmd::get(&load_config()?, &key)?;
            }
            ConfigCommands::Reset => {
                config_cmd::reset()?;
            }
            ConfigCommands::Path => {
                if let Some(path) = Config::config_file_path() {
                    println!("{}", path.display());
                } else {
                    println!("(no config file path available)");
                }
            }
        },
    }

    Ok(())
}
