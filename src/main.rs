use anyhow::Result;
use clap::{Parser, Subcommand};
use loopsight::cli_output::OutputWriter;
use loopsight::clipboard::CopyOutcome;
use loopsight::config::{InspectorConfig, OutputFormat};
use loopsight::error::InspectError;
use loopsight::language::Dialect;
use loopsight::session::Session;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "loopsight")]
#[command(about = "Estimate loops, nesting, recursion and Big-O of C-like snippets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: <config dir>/loopsight/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a snippet from a file or stdin
    Analyze {
        /// Source file ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        /// Output format (human, plain, json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Initial dialect selection
        #[arg(short, long, value_enum)]
        dialect: Option<Dialect>,

        /// Copy the explanation to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Load the example snippet for a dialect and analyze it
    Sample {
        /// Dialect of the example (default: from config)
        #[arg(short, long, value_enum)]
        dialect: Option<Dialect>,

        /// Output format (human, plain, json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn read_source(input: Option<&Path>) -> Result<String, InspectError> {
    match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| InspectError::ReadSource {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(InspectError::ReadStdin)?;
            Ok(buffer)
        }
    }
}

fn writer_for(format: Option<OutputFormat>, config: &InspectorConfig, no_color: bool) -> OutputWriter {
    let format = format.or(config.format).unwrap_or_else(OutputFormat::auto);
    if no_color || !config.color || format != OutputFormat::Human {
        colored::control::set_override(false);
    }
    OutputWriter::new(format, config.indicator_width)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = InspectorConfig::load(cli.config.as_deref())?;
    debug!("Effective config: {:?}", config);

    match cli.command {
        Commands::Analyze {
            input,
            format,
            dialect,
            copy,
        } => {
            let writer = writer_for(format, &config, cli.no_color);
            let code = read_source(input.as_deref())?;
            info!("🔍 Analyzing {} bytes of source...", code.len());

            let mut session = Session::new(dialect.unwrap_or(config.dialect));
            let outcome = session.run(&code);
            writer.report(&outcome, session.dialect().name())?;

            if copy {
                let result = session.copy_explanation();
                match &result {
                    CopyOutcome::Copied => writer.success(&result.notice()),
                    CopyOutcome::Skipped => writer.info(&result.notice()),
                    CopyOutcome::Failed(_) => writer.warning(&result.notice()),
                }
            }

            Ok(())
        }

        Commands::Sample { dialect, format } => {
            let writer = writer_for(format, &config, cli.no_color);
            let mut session = Session::new(dialect.unwrap_or(config.dialect));
            info!("📄 Loading {} sample...", session.dialect());

            let (sample, outcome) = session.run_sample();
            writer.source(sample);
            writer.report(&outcome, session.dialect().name())?;

            Ok(())
        }

        Commands::Config { init } => {
            let path = cli
                .config
                .clone()
                .unwrap_or_else(InspectorConfig::config_file_path);

            if init {
                if path.exists() {
                    warn!("Config already exists at {}, leaving it unchanged", path.display());
                } else {
                    InspectorConfig::default().save(&path)?;
                    println!("✅ Config written to: {}", path.display());
                }
            }

            println!("📁 Config path: {}", path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);

            Ok(())
        }
    }
}
