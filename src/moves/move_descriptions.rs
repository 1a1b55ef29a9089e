//! The `ChessMove` value object.
//!
//! A move copies the pieces it touches out of the board at construction time
//! and never looks at the board again, so it stays valid while the board keeps
//! mutating underneath it. Identity is the `(from, to)` pair only; a promotion
//! always resolves to a queen, so the target piece never needs to be compared.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::promotion_row;
use crate::utils::algebraic::square_to_algebraic;

/// Special-move marker supplied by the generator when building a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecialMove {
    #[default]
    Normal,
    EnPassant,
    Castle,
}

#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl ChessMove {
    /// Builds a move for a known moving piece. No legality checks happen here.
    ///
    /// For en passant the captured piece is the opposing pawn, which does not
    /// sit on `to`.
    pub fn build(from: Square, to: Square, piece_moved: Piece, board: &Board, special: SpecialMove) -> Self {
        let is_en_passant = special == SpecialMove::EnPassant;
        let piece_captured = if is_en_passant {
            Some(Piece::new(piece_moved.color.opposite(), PieceKind::Pawn))
        } else {
            board[to.row as usize][to.col as usize]
        };

        Self {
            from,
            to,
            piece_moved,
            piece_captured,
            is_promotion: piece_moved.kind == PieceKind::Pawn
                && to.row == promotion_row(piece_moved.color),
            is_en_passant,
            is_castle: special == SpecialMove::Castle,
        }
    }

    /// Snapshots a plain move from the board, or `None` if `from` is empty.
    pub fn from_board(from: Square, to: Square, board: &Board) -> Option<Self> {
        let piece = board[from.row as usize][from.col as usize]?;
        Some(Self::build(from, to, piece, board, SpecialMove::Normal))
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// `<file><rank><file><rank>`, e.g. `e2e4`.
    pub fn get_chess_notation(&self) -> String {
        format!(
            "{}{}",
            square_to_algebraic(self.from),
            square_to_algebraic(self.to)
        )
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for ChessMove {}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_chess_notation())
    }
}
