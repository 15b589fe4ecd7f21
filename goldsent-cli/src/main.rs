//! Gold Sentiment CLI — analyze, export, and config commands.
//!
//! Commands:
//! - `analyze` — compute signals, sentiment and commentary and print them
//! - `export` — write the derived rows to CSV or JSON
//! - `config init` — write a default configuration file

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};

use goldsent_core::data::{DataProvider, FeedProvider, SampleProvider, SpreadsheetProvider};
use goldsent_core::report::{
    render_commentary, render_table, write_csv, write_csv_file, write_json, write_json_file,
};
use goldsent_core::{analyze, Analysis, DashboardConfig, DashboardError};

#[derive(Parser)]
#[command(
    name = "goldsent",
    about = "Gold futures sentiment — open interest signals and commentary"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute derived metrics and print them.
    Analyze {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Write derived metrics to a file (.json → JSON, anything else → CSV).
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Destination file.
        #[arg(long)]
        output: PathBuf,
    },
    /// Configuration file commands.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default configuration file.
    Init {
        /// Destination. Defaults to ./goldsent.toml.
        #[arg(long, default_value = "goldsent.toml")]
        path: PathBuf,

        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Use the built-in sample (default when no source is given).
    #[arg(long, conflicts_with_all = ["file", "feed"])]
    sample: bool,

    /// Spreadsheet export (CSV) to analyze.
    #[arg(long, conflicts_with = "feed")]
    file: Option<PathBuf>,

    /// Fetch the live feed.
    #[arg(long)]
    feed: bool,

    /// Feed URL (overrides config).
    #[arg(long, requires = "feed")]
    url: Option<String>,

    /// Product code to keep from the feed (overrides config).
    #[arg(long, requires = "feed")]
    product: Option<String>,

    /// Sort records by their date label before computing.
    #[arg(long, default_value_t = false)]
    sort_by_date: bool,

    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { source, format } => run_analyze(&source, format),
        Commands::Export { source, output } => run_export(&source, &output),
        Commands::Config { action } => match action {
            ConfigAction::Init { path, force } => run_config_init(&path, force),
        },
    };

    if let Err(err) = result {
        match err.downcast_ref::<DashboardError>() {
            Some(dash) => eprintln!("error: {}", dash.user_message()),
            None => eprintln!("error: {err:#}"),
        }
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    match path {
        Some(path) => DashboardConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(DashboardConfig::default()),
    }
}

fn build_provider(args: &SourceArgs, config: &DashboardConfig) -> Result<Box<dyn DataProvider>> {
    if let Some(path) = &args.file {
        return Ok(Box::new(SpreadsheetProvider::new(path)));
    }
    if args.feed {
        let mut settings = config.feed_settings();
        if let Some(url) = &args.url {
            settings.url = url.clone();
        }
        if let Some(product) = &args.product {
            settings.product_code = product.clone();
        }
        let provider = FeedProvider::new(settings).map_err(DashboardError::from)?;
        return Ok(Box::new(provider));
    }
    Ok(Box::new(SampleProvider))
}

fn run_pipeline(args: &SourceArgs) -> Result<Analysis> {
    let config = load_config(args.config.as_deref())?;
    let provider = build_provider(args, &config)?;
    let order = if args.sort_by_date {
        goldsent_core::data::RecordOrder::ByDateLabel
    } else {
        config.record_order()
    };
    log::info!("analyzing {} source", provider.name());
    Ok(analyze(provider.as_ref(), order)?)
}

fn run_analyze(args: &SourceArgs, format: OutputFormat) -> Result<()> {
    let analysis = run_pipeline(args)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(out, "=== Gold Futures Sentiment ({}) ===", analysis.source.label())?;
            writeln!(out)?;
            write!(out, "{}", render_table(&analysis.rows))?;
            writeln!(out)?;
            writeln!(out, "--- Commentary ---")?;
            write!(out, "{}", render_commentary(&analysis.rows))?;
        }
        OutputFormat::Json => {
            write_json(&mut out, &analysis).map_err(DashboardError::from)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(&mut out, &analysis.rows).map_err(DashboardError::from)?,
    }
    Ok(())
}

fn run_export(args: &SourceArgs, output: &Path) -> Result<()> {
    let analysis = run_pipeline(args)?;
    let is_json = output
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        write_json_file(output, &analysis).map_err(DashboardError::from)?;
    } else {
        write_csv_file(output, &analysis.rows).map_err(DashboardError::from)?;
    }
    println!("Wrote {} rows to {}", analysis.rows.len(), output.display());
    Ok(())
}

fn run_config_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (pass --force to overwrite)", path.display());
    }
    let text = DashboardConfig::default().to_toml()?;
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    println!("Config written to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_sample_table() {
        let cli = Cli::try_parse_from(["goldsent", "analyze"]).unwrap();
        match cli.command {
            Commands::Analyze { source, format } => {
                assert!(source.file.is_none());
                assert!(!source.feed);
                assert!(format == OutputFormat::Table);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn file_and_feed_conflict() {
        let parsed = Cli::try_parse_from(["goldsent", "analyze", "--file", "a.csv", "--feed"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn url_requires_feed() {
        let parsed = Cli::try_parse_from(["goldsent", "analyze", "--url", "http://x"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn export_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("rows.csv");
        let cli = Cli::try_parse_from([
            "goldsent",
            "export",
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();
        let Commands::Export { source, output } = cli.command else {
            panic!("expected export");
        };
        run_export(&source, &output).unwrap();
        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn config_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("goldsent.toml");
        run_config_init(&path, false).unwrap();
        assert!(run_config_init(&path, false).is_err());
        run_config_init(&path, true).unwrap();
        let cfg = DashboardConfig::from_file(&path).unwrap();
        assert_eq!(cfg, DashboardConfig::default());
    }

    #[test]
    fn missing_spreadsheet_surfaces_dashboard_error() {
        let cli = Cli::try_parse_from(["goldsent", "analyze", "--file", "/nonexistent/r.csv"])
            .unwrap();
        let Commands::Analyze { source, .. } = cli.command else {
            panic!("expected analyze");
        };
        let err = run_pipeline(&source).unwrap_err();
        let dash = err.downcast_ref::<DashboardError>().unwrap();
        assert_eq!(dash.category(), goldsent_core::ErrorCategory::Data);
    }
}
