#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Command-line interface for typegen.
//!
//! Settings are resolved in this order, later sources winning: built-in
//! defaults, the configuration file, then command-line flags.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use config::Config;
use pipeline::{generate_from_file, GenerationContext};
use thiserror::Error;

/// Errors that can occur while running a typegen command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generation failed.
    #[error(transparent)]
    Pipeline(#[from] pipeline::PipelineError),
    /// The configuration could not be loaded or saved.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    /// Logging could not be initialized.
    #[error(transparent)]
    Logging(#[from] logging::LoggingError),
    /// Refused to replace an existing file.
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
    /// I/O error while preparing files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Command-line interface configuration for typegen.
#[derive(Parser, Debug)]
#[command(
    name = "typegen",
    about = "Generate TypeScript declarations from a data model description",
    version
)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Available typegen commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate `index.ts` from a data model JSON document
    Generate(GenerateArgs),
    /// Write a configuration file populated with defaults
    InitConfig {
        /// Where to write the file (defaults to the user config directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Arguments of the `generate` command.
#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Data model document (DMMF JSON)
    #[arg(long, short)]
    pub input: PathBuf,
    /// Output directory, overriding `[generator] output_directory`
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Configuration file (defaults to the user config directory when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Write the generated source without running the formatter
    #[arg(long)]
    pub no_format: bool,
    /// Formatter command, overriding `[formatter] command`
    #[arg(long, value_name = "CMD")]
    pub prettier: Option<String>,
    /// Log level, overriding `[logging] level`
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Run the command described by `cli`.
pub fn run(cli: Cli) -> Result<()> {
    match cli.cmd {
        Commands::Generate(args) => run_generate(args),
        Commands::InitConfig { path, force } => run_init_config(path, force),
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args);

    logging::init(&config.logging.level, config.logging.file.as_deref())?;
    tracing::debug!(?config, "resolved configuration");

    let ctx = GenerationContext::from_config(&config)?;
    let report = generate_from_file(&args.input, &ctx)?;

    println!(
        "Wrote {} ({} models, {} enums, {} fields)",
        report.output_path.display(),
        report.models,
        report.enums,
        report.fields
    );
    Ok(())
}

fn run_init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::default_path()?,
    };
    if path.exists() && !force {
        return Err(CliError::AlreadyExists(path));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    Config::default().save(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

/// Load the explicit config file, else the default one if it exists, else defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Ok(Config::from_file(path)?);
    }
    match Config::default_path() {
        Ok(path) if path.is_file() => Ok(Config::from_file(path)?),
        _ => Ok(Config::default()),
    }
}

fn apply_overrides(config: &mut Config, args: &GenerateArgs) {
    if let Some(output) = &args.output {
        config.generator.output_directory = output.clone();
    }
    if args.no_format {
        config.formatter.enabled = false;
    }
    if let Some(command) = &args.prettier {
        config.formatter.command = command.clone();
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("typegen").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&[
            "generate",
            "--input",
            "dmmf.json",
            "--output",
            "gen",
            "--no-format",
            "--prettier",
            "npx prettier",
            "--log-level",
            "debug",
        ]);
        let Commands::Generate(args) = cli.cmd else { panic!("Expected generate command") };

        let mut config = Config::default();
        apply_overrides(&mut config, &args);
        assert_eq!(config.generator.output_directory, PathBuf::from("gen"));
        assert!(!config.formatter.enabled);
        assert_eq!(config.formatter.command, "npx prettier");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_kept_without_flags() {
        let cli = parse(&["generate", "--input", "dmmf.json"]);
        let Commands::Generate(args) = cli.cmd else { panic!("Expected generate command") };

        let mut config = Config::default();
        apply_overrides(&mut config, &args);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["typegen", "generate"]).is_err());
    }

    #[test]
    fn test_load_explicit_missing_config() {
        let err = load_config(Some(Path::new("does-not-exist.toml")))
            .expect_err("Missing explicit config must fail");
        assert!(matches!(err, CliError::Config(config::ConfigError::FileRead(_))));
    }
}
