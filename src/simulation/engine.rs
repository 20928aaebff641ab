use crate::cli::Args;
use crate::error::{AntError, Result};
use crate::grid::Grid;
use colored::Colorize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Drives every ant on one grid, one tick at a time
pub struct SimulationEngine {
    ticks: u64,
    report_every: u64,
}

impl SimulationEngine {
    /// Check that every ant registered on `grid` was created for it.
    ///
    /// Done once here so stepping never has to.
    pub fn new(grid: &Grid, report_every: u64) -> Result<Self> {
        if let Some(index) = grid.ants().iter().position(|ant| !ant.lives_on(grid)) {
            return Err(AntError::ForeignAnt { index });
        }

        debug!(
            topology = %grid.topology(),
            ants = grid.ants().len(),
            "simulation ready"
        );
        Ok(Self {
            ticks: 0,
            report_every,
        })
    }

    /// Ticks completed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Step every ant once, in registration order.
    pub fn tick(&mut self, grid: &mut Grid) -> Result<()> {
        grid.step_ants()?;
        self.ticks += 1;

        if self.report_every > 0 && self.ticks % self.report_every == 0 {
            let bbox = grid.fast_bbox();
            info!(
                tick = self.ticks,
                cells = grid.len(),
                bbox = ?bbox.as_tuple(),
                "progress"
            );
        }
        Ok(())
    }

    /// Run `ticks` ticks and return the time spent.
    ///
    /// The first failing step aborts the run; `ticks()` tells how far it got.
    pub fn run(&mut self, grid: &mut Grid, ticks: u64) -> Result<Duration> {
        let start = Instant::now();
        for _ in 0..ticks {
            self.tick(grid)?;
        }
        Ok(start.elapsed())
    }

    /// Print simulation summary
    pub fn print_summary(&self, grid: &Grid, args: &Args, simulation_time: Duration) {
        let fast = grid.fast_bbox();
        let display = grid.display_bbox();

        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            simulation_time.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("topology={}", grid.topology()).cyan(),
            format!("ticks={}", self.ticks).cyan(),
            format!("ants={}", grid.ants().len()).cyan(),
            format!("cells={}", grid.len()).cyan(),
        );

        let colours: Vec<String> = grid
            .colour_counts()
            .iter()
            .map(|(colour, count)| format!("{colour}:{count}"))
            .collect();
        println!("{} {}", "🎨 Colours:".green().bold(), colours.join(" ").yellow());

        println!(
            "{} fast=({}, {}, {}, {}) display=({:.3}, {:.3}, {:.3}, {:.3})",
            "📦 Bounding box:".green().bold(),
            fast.min_x,
            fast.min_y,
            fast.max_x,
            fast.max_y,
            display.min_x,
            display.min_y,
            display.max_x,
            display.max_y,
        );

        if args.quiet {
            return;
        }
        for (i, ant) in grid.ants().iter().enumerate() {
            println!(
                "{} {} {} {} {}",
                "🐜".red(),
                format!("ant {i}").bright_red(),
                format!("at {}", ant.position()).yellow(),
                format!("facing {}", ant.direction()).yellow(),
                format!("colour {}", ant.colour()).yellow(),
            );
        }
    }
}
