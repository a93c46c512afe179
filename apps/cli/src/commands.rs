//! CLI definition, tracing setup, and the regenerate command.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};
use katalog_core::{GenerateConfig, GenerateResult, ProgressReporter, write_catalog};
use katalog_shared::{AssetCategory, load_config, load_config_from};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Katalog: regenerate the listing of default catalog assets.
#[derive(Parser)]
#[command(
    name = "katalog",
    version,
    about = "Regenerate the README listing of pipelines, components, models, datasets, and notebooks.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Repository root containing the `<category>-samples/` directories.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Output file (defaults to `output.file` from katalog.toml, i.e. <root>/README.md).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to <root>/katalog.toml when present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "katalog=info",
        1 => "katalog=debug",
        _ => "katalog=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Regenerate the asset listing.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config(&cli.root)?,
    };

    let mut run_config = GenerateConfig::new(cli.root.clone(), &config);
    if let Some(output) = cli.output {
        run_config.output_path = output;
    }

    info!(
        root = %run_config.root.display(),
        output = %run_config.output_path.display(),
        "regenerating asset list"
    );

    println!(
        "Regenerating asset list in {} ...",
        run_config.output_path.display()
    );

    let reporter = CliProgress::new();
    let result = write_catalog(&run_config, &reporter)
        .wrap_err("failed to regenerate the asset list")?;

    print_summary(&result);

    Ok(())
}

fn print_summary(result: &GenerateResult) {
    println!();
    for count in &result.counts {
        println!("  {:<20} {:>4}", count.category.heading(), count.entries);
    }
    println!("  {:<20} {:>4}", "Total", result.total_entries());
    println!("  Time: {:.2}s", result.elapsed.as_secs_f64());
    println!();
    println!("Done");
    println!("Use `git diff` to evaluate which changes are desired!");
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        spinner.set_style(style);
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn category(&self, category: AssetCategory, file_count: usize) {
        self.spinner
            .set_message(format!("Scanning {} ({file_count} files)", category.samples_dir()));
    }

    fn asset_read(&self, path: &str, current: usize, total: usize) {
        self.spinner
            .set_message(format!("Reading [{current}/{total}] {path}"));
    }

    fn done(&self, _result: &GenerateResult) {
        self.spinner.finish_and_clear();
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        // Clear the spinner when a run aborts before `done`.
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}
