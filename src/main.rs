//! Polyinclude CLI - resolve component include statements from the command line

mod commands;

use clap::{Parser, Subcommand};
use commands::{Context, ResolveArgs};
use polyinclude::output::{emit_error, is_quiet, OutputMode};
use polyinclude::Language;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "polyinclude")]
#[command(version)]
#[command(about = "Resolve UI component include statements for React, vanilla JS, ExtJS and TypeScript")]
#[command(long_about = r#"
Polyinclude keeps one registry of documented components and renders the
import line and usage snippet for each target framework.

Example usage:
  polyinclude resolve -l react -c Button -V primary --code
  polyinclude variations -l extjs -c DataGrid
  polyinclude check
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as a JSON envelope
    #[arg(long, global = true)]
    json: bool,

    /// Path to polyinclude.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a component variation to its import line
    Resolve {
        /// Target language (react, vanilla, extjs, typescript)
        #[arg(short, long)]
        language: Language,

        /// Component name or slug
        #[arg(short, long)]
        component: String,

        /// Variation name (defaults to the component's default variation)
        #[arg(short = 'V', long)]
        variation: Option<String>,

        /// Local name to import the component as
        #[arg(long)]
        alias: Option<String>,

        /// Also print the usage snippet
        #[arg(long)]
        code: bool,
    },

    /// Resolve an alias declared in the config
    Alias {
        name: String,

        /// Also print the usage snippet
        #[arg(long)]
        code: bool,
    },

    /// List registered languages
    Languages,

    /// List the components of a language
    Components {
        #[arg(short, long)]
        language: Language,
    },

    /// List the variations of a component
    Variations {
        #[arg(short, long)]
        language: Language,

        #[arg(short, long)]
        component: String,
    },

    /// Check that every dataset variation resolves in every language
    Check,

    /// Write a starter polyinclude.toml
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Show version information
    Version,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Resolve { .. } => "resolve",
            Commands::Alias { .. } => "alias",
            Commands::Languages => "languages",
            Commands::Components { .. } => "components",
            Commands::Variations { .. } => "variations",
            Commands::Check => "check",
            Commands::Init { .. } => "init",
            Commands::Version => "version",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if is_quiet() {
        EnvFilter::new("warn")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mode = OutputMode::from_flag(cli.json);
    let command = cli.command.name();

    if let Err(err) = run(cli.command, mode, cli.config) {
        let code = err
            .downcast_ref::<polyinclude::Error>()
            .map(|e| e.code().as_str())
            .unwrap_or("CLI_ERROR");
        emit_error(mode, command, code, &err.to_string())?;
        std::process::exit(1);
    }
    Ok(())
}

fn run(command: Commands, mode: OutputMode, config: Option<PathBuf>) -> anyhow::Result<()> {
    let context = || Context::load(mode, config.clone());

    match command {
        Commands::Resolve { language, component, variation, alias, code } => commands::run_resolve(
            &context()?,
            ResolveArgs {
                language,
                component,
                variation,
                alias,
                code,
            },
        ),
        Commands::Alias { name, code } => commands::run_alias(&context()?, &name, code),
        Commands::Languages => commands::run_languages(&context()?),
        Commands::Components { language } => commands::run_components(&context()?, language),
        Commands::Variations { language, component } => {
            commands::run_variations(&context()?, language, &component)
        }
        Commands::Check => commands::run_check(&context()?),
        Commands::Init { force } => {
            let path = config.clone().unwrap_or_else(polyinclude::config::default_config_path);
            commands::run_init(mode, &path, force)
        }
        Commands::Version => commands::run_version(mode),
    }
}
