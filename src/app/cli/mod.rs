//! CLI Adapter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::adapters::ConsoleProgress;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "slngen")]
#[command(version)]
#[command(
    about = "Generate Visual Studio solutions and build artifacts from a component tree",
    long_about = None
)]
struct Cli {
    /// Log discovery details and skipped outputs
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configure.yml
    #[clap(visible_alias = "i")]
    Init {
        /// Project root (defaults to current directory)
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Generate the solution, project files and build artifacts
    #[clap(visible_alias = "g")]
    Generate {
        /// Project root (defaults to current directory)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Build configuration (defaults to <root>/configure.yml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List discovered components
    #[clap(visible_alias = "ls")]
    List {
        /// Project root (defaults to current directory)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Build configuration (defaults to <root>/configure.yml)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init { root } => run_init(root),
        Commands::Generate { root, config } => run_generate(root, config),
        Commands::List { root, config, json } => run_list(root, config, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "slngen=debug" } else { "slngen=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf, AppError> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    if !root.is_dir() {
        return Err(AppError::RootNotFound(root));
    }
    Ok(root)
}

fn run_init(root: Option<PathBuf>) -> Result<(), AppError> {
    let root = resolve_root(root)?;
    let path = crate::init(&root)?;
    println!("✅ Created {}", path.display());
    Ok(())
}

fn run_generate(root: Option<PathBuf>, config: Option<PathBuf>) -> Result<(), AppError> {
    let root = resolve_root(root)?;
    let mut progress = ConsoleProgress::new();
    let report = crate::generate(&root, config.as_deref(), &mut progress)?;

    if report.completed {
        println!(
            "✅ Generated {} with {} project(s)",
            display_relative(&root, &report.solution_file),
            report.projects_written
        );
    } else {
        println!(
            "⚠️  Generation stopped early after {} project(s); see warnings above",
            report.projects_written
        );
    }
    Ok(())
}

fn run_list(root: Option<PathBuf>, config: Option<PathBuf>, json: bool) -> Result<(), AppError> {
    let root = resolve_root(root)?;
    let components = crate::list(&root, config.as_deref())?;

    if json {
        let output = serde_json::to_string_pretty(&components).map_err(|e| {
            AppError::ParseError { what: "component list".into(), details: e.to_string() }
        })?;
        println!("{}", output);
        return Ok(());
    }

    println!("Components:");
    for component in components {
        let status = if !component.supported {
            "unsupported"
        } else if component.skipped {
            "skipped"
        } else {
            "ok"
        };
        println!(
            "  {} ({}) - {}, {} project(s)",
            component.name,
            component.kind,
            status,
            component.files.len()
        );
    }
    Ok(())
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
