use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{ChessMove, SpecialMove};

/// Walks from `from` (exclusive) along `dir` and returns the first occupied square.
pub fn first_piece_along(game_state: &GameState, from: Square, dir: (i8, i8)) -> Option<(Square, Piece)> {
    let mut current = from;
    while let Some(next) = current.offset(dir.0, dir.1) {
        if let Some(piece) = game_state.piece_at(next) {
            return Some((next, piece));
        }
        current = next;
    }
    None
}

/// Ray-casts each direction until the board edge or a blocker. Enemy blockers
/// are included as captures, friendly blockers are not.
pub fn push_ray_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match game_state.piece_at(to) {
                None => out.push(ChessMove::build(from, to, piece, &game_state.board, SpecialMove::Normal)),
                Some(blocker) => {
                    if blocker.color != piece.color {
                        out.push(ChessMove::build(from, to, piece, &game_state.board, SpecialMove::Normal));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Emits a move to every target not holding a friendly piece.
pub fn push_leaper_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    targets: impl Iterator<Item = Square>,
    out: &mut Vec<ChessMove>,
) {
    for to in targets {
        let friendly = game_state
            .piece_at(to)
            .is_some_and(|occupant| occupant.color == piece.color);
        if !friendly {
            out.push(ChessMove::build(from, to, piece, &game_state.board, SpecialMove::Normal));
        }
    }
}
