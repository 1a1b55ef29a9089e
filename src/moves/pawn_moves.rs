//! Pawn geometry. Light pawns advance toward row 0, dark pawns toward row 7.

use crate::game_state::chess_types::Color;

/// Capture steps sideways, applied together with the forward row step.
pub const PAWN_CAPTURE_COLUMNS: [i8; 2] = [-1, 1];

/// Row delta of a single forward step.
#[inline]
pub const fn pawn_forward(color: Color) -> i8 {
    match color {
        Color::Light => -1,
        Color::Dark => 1,
    }
}

/// Row from which a two-square advance is allowed.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}

/// Far rank where a pawn promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_rows_mirror_each_other() {
        for color in [Color::Light, Color::Dark] {
            assert_eq!(pawn_start_row(color) + pawn_start_row(color.opposite()), 7);
            assert_eq!(promotion_row(color) + promotion_row(color.opposite()), 7);
            assert_eq!(pawn_forward(color), -pawn_forward(color.opposite()));
        }
    }
}
