use crate::direction::CardinalDirection;
use crate::rules::Rule;
use crate::topology::Topology;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the turmite simulation
#[derive(Parser, Debug)]
#[command(name = "polyant", about = "🐜 Turmites on square, hexagonal and triangular grids")]
pub struct Args {
    /// Grid tessellation: square, hex or triangle
    #[arg(short = 't', long, default_value = "square")]
    pub topology: Topology,

    /// LR string, one turn token per cell colour
    #[arg(short = 'r', long = "rules", default_value = "RL")]
    pub lr: String,

    /// Explicit rule `ant,cell,new_ant,new_cell,turn`; replaces the LR string
    #[arg(long = "rule")]
    pub rule: Vec<Rule>,

    /// File of explicit rules, one per line
    #[arg(long)]
    pub rules_file: Option<PathBuf>,

    /// Treat duplicate rules as an error
    #[arg(long, default_value_t = false)]
    pub strict_rules: bool,

    /// Ticks to run
    #[arg(short = 's', long, default_value_t = 10_000)]
    pub steps: u64,

    /// Number of ants
    #[arg(short = 'n', long = "ants", default_value_t = 1)]
    pub ants: usize,

    /// Extra ants start within this distance of the origin
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(i64).range(0..))]
    pub spread: i64,

    /// Initial heading of the first ant
    #[arg(short = 'd', long)]
    pub direction: Option<CardinalDirection>,

    /// Colour every cell starts with
    #[arg(long, default_value_t = 0)]
    pub default_colour: u32,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log progress every N ticks (0 disables)
    #[arg(long, default_value_t = 0)]
    pub report_every: u64,

    /// Leave the per-ant lines out of the summary
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
