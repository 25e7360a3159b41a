//! Reference answer: tests every pair of triangles.

use std::io;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::{ArgAction, Parser};
use log::info;
use trigeom::broad_phase::brute_force;
use trigeom::Tolerance;
use trigeom_cli::{parse_triangles, read_input, write_indices};

#[derive(Parser)]
#[command(name = "trigeom-brute")]
#[command(about = "Find intersecting triangles by testing every pair", long_about = None)]
struct Cli {
    /// Input file, stdin when omitted
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Comparison threshold, 1e3 * f64::EPSILON when omitted
    #[arg(long)]
    threshold: Option<f64>,

    /// Verbose output, repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    trigeom_cli::init_logger(cli.verbose);

    if let Some(threshold) = cli.threshold {
        ensure!(threshold > 0.0, "threshold must be positive, got {threshold}");
        Tolerance::<f64>::set(threshold);
    }

    let text = read_input(cli.input.as_deref()).context("failed to read input")?;
    let triangles = parse_triangles(&text).context("failed to parse input")?;
    info!("testing {} triangles pairwise", triangles.len());

    let hits = brute_force(&triangles);
    write_indices(&mut io::stdout().lock(), &hits).context("failed to write output")?;
    Ok(())
}
