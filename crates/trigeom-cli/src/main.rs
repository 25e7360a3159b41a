//! Reports every triangle that intersects another one, using the kd-tree
//! broad phase.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::{ArgAction, Parser};
use log::info;
use trigeom::broad_phase::intersecting_indices;
use trigeom::kdtree::MedianSplit;
use trigeom::{KdTree, KdTreeConfig, Tolerance};
use trigeom_cli::{parse_triangles, read_input, write_indices};

#[derive(Parser)]
#[command(name = "trigeom")]
#[command(about = "Find intersecting triangles with a kd-tree broad phase", long_about = None)]
struct Cli {
    /// Input file, stdin when omitted
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Maximum number of triangles in a leaf
    #[arg(long, default_value_t = KdTreeConfig::default().leaf_size)]
    leaf_size: usize,

    /// Maximum depth of the tree
    #[arg(long, default_value_t = KdTreeConfig::default().max_depth)]
    max_depth: usize,

    /// Comparison threshold, 1e3 * f64::EPSILON when omitted
    #[arg(long)]
    threshold: Option<f64>,

    /// Write the tree as a Graphviz digraph
    #[arg(long, value_name = "FILE")]
    dump_dot: Option<PathBuf>,

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
    ensure!(cli.leaf_size > 0, "leaf size must be at least 1");

    let text = read_input(cli.input.as_deref()).context("failed to read input")?;
    let triangles = parse_triangles(&text).context("failed to parse input")?;
    info!("read {} triangles", triangles.len());

    let config = KdTreeConfig {
        leaf_size: cli.leaf_size,
        max_depth: cli.max_depth,
    };
    let tree = KdTree::build_with(triangles, config, &MedianSplit);
    info!(
        "built tree: depth {}, {} nodes, {} leaves",
        tree.depth(),
        tree.node_count(),
        tree.leaf_count()
    );

    if let Some(path) = &cli.dump_dot {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        tree.dump_dot(&mut BufWriter::new(file))
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    let hits = intersecting_indices(&tree);
    info!("{} intersecting triangles", hits.len());
    write_indices(&mut io::stdout().lock(), &hits).context("failed to write output")?;
    Ok(())
}
