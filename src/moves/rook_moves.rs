//! Rook ray directions.

/// Orthogonal `(d_row, d_col)` unit steps.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
