//! PNG export with one colored square per board cell

use image::{ImageBuffer, Rgba};
use std::path::Path;

use crate::board::grid::Board;
use crate::io::configuration::{EMPTY_CELL, SYMBOL_COLORS};
use crate::io::error::{PentominoError, Result, invalid_parameter};
use crate::shapes::alphabet::symbol_index;

// Empty cells stay transparent
fn cell_color(cell: char) -> Rgba<u8> {
    symbol_index(cell)
        .and_then(|index| SYMBOL_COLORS.get(index))
        .map_or(Rgba([0, 0, 0, 0]), |&rgba| Rgba(rgba))
}

/// Render a board as an RGBA image, `cell_pixels` pixels per cell edge
///
/// # Errors
///
/// Returns an error if:
/// - `cell_pixels` is zero
/// - No pentomino has been placed on the board
/// - The image dimensions overflow
pub fn render_board(board: &Board, cell_pixels: u32) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    if cell_pixels == 0 {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &"cells need at least one pixel",
        ));
    }
    if board.cells().iter().all(|&cell| cell == EMPTY_CELL) {
        return Err(PentominoError::InvalidBoard {
            reason: "no pentominoes have been placed on the board".to_string(),
        });
    }

    let dimension = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(cell_pixels))
            .ok_or_else(|| invalid_parameter("cell_pixels", &cell_pixels, &"image too large"))
    };
    let width = dimension(board.cols())?;
    let height = dimension(board.rows())?;

    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        let row = (y / cell_pixels) as usize;
        let col = (x / cell_pixels) as usize;
        board
            .cells()
            .get([row, col])
            .copied()
            .map_or(Rgba([0, 0, 0, 0]), cell_color)
    }))
}

/// Export a board as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The board cannot be rendered (see [`render_board`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(board: &Board, output_path: &Path, cell_pixels: u32) -> Result<()> {
    let img = render_board(board, cell_pixels)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PentominoError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| PentominoError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
