//! Printable text rendering of solved boards

use std::fmt::Write as _;
use std::io::Write;

use crate::board::grid::Board;
use crate::io::error::Result;
use crate::search::solver::RectangleReport;

/// Render a board as its rows, each terminated by a newline
pub fn format_board(board: &Board) -> String {
    board.to_string()
}

/// Render a sequence of boards, each followed by a blank line
pub fn format_solutions(boards: &[Board]) -> String {
    boards.iter().fold(String::new(), |mut text, board| {
        let _ = writeln!(text, "{board}");
        text
    })
}

/// Write a sequence of boards in the [`format_solutions`] layout
///
/// # Errors
///
/// Returns `FileSystem` if the writer fails
pub fn write_solutions<W: Write>(writer: &mut W, boards: &[Board]) -> Result<()> {
    for board in boards {
        writeln!(writer, "{board}")?;
    }
    Ok(())
}

/// One-line count summary of a solved rectangle
pub fn format_summary(report: &RectangleReport) -> String {
    let stats = &report.outcome.stats;
    format!(
        "{}: {} solutions ({} seeds, {} boards visited, {} hole cuts, {} symmetry cuts)",
        report.size,
        report.outcome.solutions.len(),
        report.seeds,
        stats.boards_visited,
        stats.hole_rejections,
        stats.symmetry_rejections
    )
}
