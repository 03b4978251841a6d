//! Solver constants and runtime configuration defaults

/// Number of cells every rectangle covers
pub const BOARD_AREA: usize = 60;

/// Number of cells in one pentomino
pub const PENTOMINO_SIZE: usize = 5;

/// Letters assigned to canonical shapes, in ascending canonical order
pub const PENTOMINO_SYMBOLS: &str = "FPXNVTYWZLUI";

/// Number of free pentominoes
pub const PENTOMINO_COUNT: usize = 12;

/// Marker for an unfilled board cell
pub const EMPTY_CELL: char = '.';

/// Symbol of the plus-shaped pentomino pre-seeded on every board
pub const X_SYMBOL: char = 'X';

/// Symbol used to break mirror symmetry about the middle row
pub const W_SYMBOL: char = 'W';

// The X pentomino spans three rows
/// Smallest row count a seeded rectangle can have
pub const MIN_BOARD_ROWS: usize = 3;

/// Minimum number of W cells above the middle row that marks the mirrored half
pub const W_CELLS_ABOVE_MIDDLE: usize = 2;

/// Number of X cells that lie on the middle row when X is centered on it
pub const X_CELLS_ON_AXIS: usize = 3;

// Pentomino shapes never reach beyond this distance from their anchor
/// Largest Manhattan radius covered by the point code table
pub const MAX_CODE_RADIUS: u32 = 4;

// Image export settings
/// Edge length of one board cell in exported images
pub const DEFAULT_CELL_PIXELS: u32 = 16;

/// Palette indexed like [`PENTOMINO_SYMBOLS`]
pub const SYMBOL_COLORS: [[u8; 4]; PENTOMINO_COUNT] = [
    [230, 25, 75, 255],
    [60, 180, 75, 255],
    [255, 225, 25, 255],
    [0, 130, 200, 255],
    [245, 130, 48, 255],
    [145, 30, 180, 255],
    [70, 240, 240, 255],
    [240, 50, 230, 255],
    [210, 245, 60, 255],
    [250, 190, 212, 255],
    [0, 128, 128, 255],
    [170, 110, 40, 255],
];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
