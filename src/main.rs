//! CLI entry point for eextract.
//!
//! Reads a protoc-generated messages file and its gRPC companion, then prints
//! the extracted entities and services as framed sections on stdout.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use eextract::display::{SectionWriter, THEME};
use eextract::{
    Entity, ExtractError, Service, Settings, find_entities, find_services, render_entity,
    render_service,
};

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

#[derive(Parser)]
#[command(
    name = "eextract",
    version,
    about = "Extract entities and services from protoc-generated Go files",
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Initialize project
    #[command(about = "Write default configuration to .eextract/settings.toml")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration
    #[command(about = "Print the effective configuration as TOML")]
    Config,

    /// Extract entities and services
    #[command(about = "Print the structs and server interfaces of a generated service")]
    Extract {
        /// Messages file, usually `*.pb.go`
        entities: PathBuf,

        /// Services file, usually `*_grpc.pb.go`
        services: PathBuf,

        /// Render `json:"..."` tags on entity fields (overrides config)
        #[arg(long)]
        json_tags: bool,

        /// Print the other section when one file fails
        #[arg(long)]
        keep_going: bool,
    },
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_env("EEXTRACT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn load_settings(config: Option<&Path>) -> anyhow::Result<Settings> {
    match config {
        Some(path) => Settings::load_from(path).map_err(|e| {
            anyhow::anyhow!("Configuration error loading from {}: {e}", path.display())
        }),
        None => Settings::load().map_err(|e| anyhow::anyhow!("Configuration error: {e}")),
    }
}

fn report(error: &ExtractError) {
    eprintln!("{}", THEME.error_with_icon(&error.to_string()));

    let suggestions = error.recovery_suggestions();
    if !suggestions.is_empty() {
        eprintln!("{}", THEME.apply(&THEME.header, "Suggestions:"));
    }
    for suggestion in suggestions {
        eprintln!("  {}", THEME.apply(&THEME.dim, suggestion));
    }
}

fn warn_empty_section(label: &str, path: &Path) {
    eprintln!(
        "{} {}",
        THEME.warning_with_icon(&format!("{label} section left empty, failed to extract")),
        THEME.path(path)
    );
}

/// Exit status of an extraction run
enum Outcome {
    Clean,
    Failed,
}

fn run_extract(
    settings: &Settings,
    entities_path: &Path,
    services_path: &Path,
    keep_going: bool,
) -> anyhow::Result<Outcome> {
    let entities = find_entities(entities_path);
    let services = find_services(services_path, &settings.filter);

    let (entities, services, outcome): (Vec<Entity>, Vec<Service>, Outcome) =
        match (entities, services) {
            (Ok(entities), Ok(services)) => (entities, services, Outcome::Clean),
            (entities, services) => {
                for error in [entities.as_ref().err(), services.as_ref().err()]
                    .into_iter()
                    .flatten()
                {
                    report(error);
                }
                if !keep_going {
                    return Ok(Outcome::Failed);
                }
                if entities.is_err() {
                    warn_empty_section(&settings.output.entities_label, entities_path);
                }
                if services.is_err() {
                    warn_empty_section(&settings.output.services_label, services_path);
                }
                (
                    entities.unwrap_or_default(),
                    services.unwrap_or_default(),
                    Outcome::Failed,
                )
            }
        };

    let render = &settings.render;
    let mut writer = SectionWriter::new(io::stdout().lock());
    writer
        .section(
            &settings.output.entities_label,
            entities.iter().map(|entity| render_entity(entity, render)),
        )
        .context("Failed to write entities")?;
    writer
        .section(
            &settings.output.services_label,
            services.iter().map(|service| render_service(service, render)),
        )
        .context("Failed to write services")?;
    writer.finish().context("Failed to flush output")?;

    Ok(outcome)
}

fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let mut settings = load_settings(cli.config.as_deref())?;
    init_logging(cli.verbose || settings.debug)?;

    match cli.command {
        Commands::Init { force } => match Settings::init_config_file(force) {
            Ok(path) => {
                eprintln!(
                    "{} {}",
                    THEME.success_with_icon("Created configuration file at:"),
                    THEME.path(&path)
                );
                Ok(Outcome::Clean)
            }
            Err(e) => {
                report(&e);
                Ok(Outcome::Failed)
            }
        },

        Commands::Config => {
            print!("{}", settings.to_toml()?);
            Ok(Outcome::Clean)
        }

        Commands::Extract {
            entities,
            services,
            json_tags,
            keep_going,
        } => {
            // Override config with CLI args
            if json_tags {
                settings.render.json_tags = true;
            }
            run_extract(&settings, &entities, &services, keep_going)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(Outcome::Clean) => ExitCode::SUCCESS,
        Ok(Outcome::Failed) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", THEME.error_with_icon(&format!("{e:#}")));
            ExitCode::FAILURE
        }
    }
}
