//! Command-line front end.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use keypadkit_core::MeasurementSystem;
use keypadkit_designer::svg_renderer::render_document;
use keypadkit_designer::{
    config_file_name, overlay_file_name, render_keypad, DesignSummary, KeypadDesign,
};
use keypadkit_settings::{codec, persistence, Config};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "keypadkit", version, about = "Printable overlays for membrane keypads")]
pub struct Cli {
    /// Application config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "KEYPADKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a configuration document with default settings
    New {
        #[arg(long, default_value_t = 4)]
        rows: usize,
        #[arg(long, default_value_t = 4)]
        cols: usize,
        /// Output path (defaults to keypad-config-RxC.json in the output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
    /// Render a configuration document to SVG
    Render {
        input: PathBuf,
        /// Output path (defaults to keypad-overlay-RxC.svg in the output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write the SVG to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
    /// Rewrite a configuration document in the current schema
    Migrate {
        input: PathBuf,
        /// Output path (defaults to rewriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the physical dimensions of a design
    Info {
        input: PathBuf,
        /// Units for the summary (mm or in)
        #[arg(long)]
        units: Option<MeasurementSystem>,
    },
}

/// Run a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::New {
            rows,
            cols,
            output,
            force,
        } => {
            let mut design = KeypadDesign::new();
            design.set_dimensions(rows, cols);
            design.validate().context("Invalid grid dimensions")?;

            let path = output.unwrap_or_else(|| config.output_path(&config_file_name(&design)));
            ensure_writable(&path, force || config.export.overwrite_existing)?;
            persistence::save_document(&path, &design, config.export.pretty_json)?;
            println!("{}", path.display());
        }
        Commands::Render {
            input,
            output,
            stdout,
            force,
        } => {
            let design = persistence::load_design(&input)?;
            design
                .validate()
                .with_context(|| format!("Design in {} is out of range", input.display()))?;
            let options = config.render_options();

            if stdout {
                let svg = render_document(&render_keypad(&design, &options));
                std::io::stdout()
                    .write_all(svg.as_bytes())
                    .context("Failed to write SVG to stdout")?;
            } else {
                let path =
                    output.unwrap_or_else(|| config.output_path(&overlay_file_name(&design)));
                ensure_writable(&path, force || config.export.overwrite_existing)?;
                persistence::export_svg(&path, &design, &options)?;
                println!("{}", path.display());
            }
        }
        Commands::Migrate { input, output } => {
            let target = output.unwrap_or_else(|| input.clone());
            let report = persistence::migrate_file(&input, &target, config.export.pretty_json)?;
            if report.is_noop() {
                println!(
                    "{}: already current, rewritten as version {}",
                    target.display(),
                    codec::CURRENT_VERSION
                );
            } else {
                println!(
                    "{}: migrated from {} ({})",
                    target.display(),
                    report.source_version.as_deref().unwrap_or("unversioned"),
                    report.applied.join(", ")
                );
            }
        }
        Commands::Info { input, units } => {
            let design = persistence::load_design(&input)?;
            let system = units.unwrap_or(config.display.measurement_system);
            println!("{}", DesignSummary::new(&design, system));
        }
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => match Config::default_path() {
            Ok(path) => Config::load_or_default(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            Err(e) => {
                tracing::warn!("{}; using default settings", e);
                Config::default()
            }
        },
    };
    Ok(config)
}

fn ensure_writable(path: &Path, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        bail!("{} already exists (use --force to replace it)", path.display());
    }
    Ok(())
}
