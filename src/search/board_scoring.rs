//! Static evaluation.
//!
//! Scores are signed positive-for-light. The material scorer deliberately
//! ignores position, mobility and king safety.

use crate::game_state::chess_types::*;

/// Score of a side that has been mated, before signing.
pub const CHECKMATE: i32 = 1000;
pub const STALEMATE: i32 = 0;

pub trait BoardScorer: Send + Sync {
    /// Light-minus-dark evaluation of `board`.
    fn score(&self, board: &Board) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 10,
            PieceKind::King => 0,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .iter()
            .flatten()
            .flatten()
            .map(|piece| piece.color.sign() * Self::piece_value(piece.kind))
            .sum()
    }
}

#[inline]
pub fn score_material(board: &Board) -> i32 {
    MaterialScorer.score(board)
}
