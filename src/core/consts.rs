pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 5;
pub const DEFAULT_LIT_PROBABILITY: f64 = 0.25;

/// Largest row or column count a board may have; keeps every cell
/// addressable by a `Coordinate` and every board drawable in a terminal
pub const MAX_DIMENSION: usize = 256;

/// How many boards `generate_unsolved` draws before settling for a won one
pub const MAX_GENERATION_ATTEMPTS: usize = 64;
