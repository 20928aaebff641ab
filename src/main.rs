use clap::Parser;
use polyant::prelude::*;
use polyant::rules::parse_rules_file;
use tracing::{info, warn};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();
    let mut rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    let table = build_rule_table(&args)?;
    info!(topology = %args.topology, rules = table.len(), "rules loaded");

    // Build the grid and place ants
    let mut grid = Grid::new(args.topology, CellColour(args.default_colour));
    let heading = match args.direction {
        Some(direction) => direction,
        None => args.topology.default_heading(GridCoord::ORIGIN)?,
    };
    for ant in grid.create_ants(args.ants, &table, args.spread, heading, &mut rng)? {
        grid.add_ant(ant);
    }

    // Run simulation
    let mut engine = SimulationEngine::new(&grid, args.report_every)?;
    let simulation_time = engine.run(&mut grid, args.steps)?;

    // Print results
    engine.print_summary(&grid, &args, simulation_time);

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Explicit rules (file first, then `--rule` flags) win over the LR string.
fn build_rule_table(args: &Args) -> Result<RuleTable> {
    let mut rules = Vec::new();
    if let Some(path) = &args.rules_file {
        rules.extend(parse_rules_file(path)?);
    }
    rules.extend(args.rule.iter().copied());
    if rules.is_empty() {
        rules = args.topology.compile_lr_string(&args.lr)?;
    }

    if args.strict_rules {
        return RuleTable::strict(rules);
    }

    let (table, diagnostics) = RuleTable::from_rules(rules);
    for diagnostic in &diagnostics {
        warn!("{diagnostic}");
    }
    Ok(table)
}
