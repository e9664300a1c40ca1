use anyhow::Context;
use clap::Parser;
use skyacf::{
    AcfConfig, DEFAULT_MAX_DISTANCE_DEG, DEFAULT_NUM_BINS, SkyPoints, catalog::read_catalog_file,
    compute_histogram, report,
};
use std::{fs::OpenOptions, io::Write, path::PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "acf")]
#[command(about = "Count pairs of catalog points by angular separation")]
struct Cli {
    /// Text file of whitespace-separated `ra dec` pairs (degrees)
    datafile: PathBuf,

    /// Number of linear distance bins
    #[arg(long, default_value_t = DEFAULT_NUM_BINS)]
    bins: usize,

    /// Upper bound (exclusive) on the counted separations, in degrees
    #[arg(long, default_value_t = DEFAULT_MAX_DISTANCE_DEG)]
    max_distance: f64,

    /// File that the results get appended to
    #[arg(long, default_value = "acf_results_cpu.txt")]
    output: PathBuf,

    /// Only print the results to the console
    #[arg(long, conflicts_with = "output")]
    no_output: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli, &mut std::io::stdout().lock())
}

fn run<W: Write>(cli: &Cli, stdout: &mut W) -> anyhow::Result<()> {
    let config = AcfConfig::new(cli.bins, cli.max_distance).context("invalid binning")?;
    let coords = read_catalog_file(&cli.datafile)
        .with_context(|| format!("Error opening file {}", cli.datafile.display()))?;
    let points = SkyPoints::new(coords.view())?;

    writeln!(
        stdout,
        "Calculating angular correlation function for {} points...",
        points.n_points()
    )?;

    let result = compute_histogram(&points, &config);
    tracing::info!(
        counted_pairs = result.counted_pairs(),
        elapsed_secs = result.elapsed().as_secs_f64(),
        "pair counting complete"
    );

    report::write_console_summary(stdout, &result)?;

    if !cli.no_output {
        let mut outfile = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&cli.output)
            .with_context(|| format!("Error opening output file {}", cli.output.display()))?;
        let label = cli.datafile.display().to_string();
        report::write_report(&mut outfile, &label, &result)?;
        tracing::info!(path = %cli.output.display(), "appended results");
    }

    Ok(())
}
