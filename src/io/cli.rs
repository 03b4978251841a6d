//! Command-line interface for enumerating pentomino rectangle tilings

use crate::board::grid::Board;
use crate::board::rectangle::RectangleSize;
use crate::board::seeding::seeded_boards;
use crate::io::configuration::DEFAULT_CELL_PIXELS;
use crate::io::error::Result;
use crate::io::format::{format_summary, write_solutions};
use crate::io::image::export_board_as_png;
use crate::io::progress::ProgressManager;
use crate::search::solver::{RectangleReport, SearchMode, Solver};
use crate::shapes::builder::build_tree;
use clap::{ArgAction, Parser};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "pentotile")]
#[command(
    author,
    version,
    about = "Enumerate every tiling of the 60-cell rectangles by the twelve pentominoes"
)]
/// Command-line arguments for the solver
pub struct Cli {
    /// Solve only the rectangle with this many rows (3, 4, 5 or 6)
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Print solution counts per rectangle instead of the boards
    #[arg(short, long)]
    pub count: bool,

    /// Also write every solution as a PNG image into this directory
    #[arg(short, long, value_name = "DIR")]
    pub png: Option<PathBuf>,

    /// Edge length in pixels of one board cell in exported images
    #[arg(long, default_value_t = DEFAULT_CELL_PIXELS)]
    pub cell_pixels: u32,

    /// Search the seeds of each rectangle in parallel
    #[arg(short = 'j', long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seed distribution requested on the command line
    pub const fn search_mode(&self) -> SearchMode {
        if self.parallel {
            SearchMode::Parallel
        } else {
            SearchMode::Sequential
        }
    }

    /// Log filter used when `RUST_LOG` is not set
    pub const fn default_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Rectangles selected by `--rows`, or all of them
    ///
    /// # Errors
    ///
    /// Returns `InvalidRectangle` if the requested row count is not valid
    pub fn rectangle_sizes(&self) -> Result<Vec<RectangleSize>> {
        match self.rows {
            Some(rows) => Ok(vec![RectangleSize::from_rows(rows)?]),
            None => Ok(RectangleSize::all()),
        }
    }
}

/// Orchestrates tree construction, search and output for one invocation
pub struct SolveRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SolveRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Solve the selected rectangles and write the results to standard output
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, the search or output fails
    pub fn process(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Solve the selected rectangles, writing boards or counts to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, the search or output fails
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Vec<RectangleReport>> {
        let sizes = self.cli.rectangle_sizes()?;
        let tree = build_tree()?;

        let mut seeded: Vec<(RectangleSize, Vec<Board>)> = Vec::with_capacity(sizes.len());
        for size in sizes {
            seeded.push((size, seeded_boards(size)?));
        }

        if let Some(ref mut pm) = self.progress_manager {
            for (size, seeds) in &seeded {
                pm.add_rectangle(*size, seeds.len());
            }
        }

        let solver = Solver::new(&tree);
        let mut reports = Vec::with_capacity(seeded.len());

        for (size, seeds) in seeded {
            let start_time = Instant::now();
            let found = AtomicUsize::new(0);
            let progress = self.progress_manager.as_ref();

            let outcome = solver.solve_seeds(&seeds, self.cli.search_mode(), |_, seed_outcome| {
                let seed_solutions = seed_outcome.solutions.len();
                let total = found.fetch_add(seed_solutions, Ordering::Relaxed) + seed_solutions;
                if let Some(pm) = progress {
                    pm.seed_finished(size, total);
                }
            })?;

            if let Some(pm) = progress {
                pm.complete_rectangle(size, outcome.solutions.len(), start_time.elapsed());
            }
            info!(
                %size,
                solutions = outcome.solutions.len(),
                elapsed_ms = start_time.elapsed().as_millis(),
                "rectangle solved"
            );

            let report = RectangleReport {
                size,
                seeds: seeds.len(),
                outcome,
            };
            self.emit(out, &report)?;
            reports.push(report);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn emit<W: Write>(&self, out: &mut W, report: &RectangleReport) -> Result<()> {
        if self.cli.count {
            writeln!(out, "{}", format_summary(report))?;
        } else {
            write_solutions(out, &report.outcome.solutions)?;
        }

        if let Some(ref dir) = self.cli.png {
            for (index, board) in report.outcome.solutions.iter().enumerate() {
                let path = Self::get_image_path(dir, report.size, index);
                export_board_as_png(board, &path, self.cli.cell_pixels)?;
            }
        }

        Ok(())
    }

    fn get_image_path(dir: &Path, size: RectangleSize, index: usize) -> PathBuf {
        dir.join(format!("{size}_{index:04}.png"))
    }
}
