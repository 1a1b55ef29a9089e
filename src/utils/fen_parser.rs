//! FEN-to-GameState parser.
//!
//! Builds a fully-populated state from a Forsyth-Edwards Notation string,
//! including tracked king squares, castling rights, en-passant target and
//! clocks. The clock fields may be omitted and then default to `0 1`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if !(fields.len() == 4 || fields.len() == 6) {
        return Err(invalid(format!(
            "expected 4 or 6 fields, found {}",
            fields.len()
        )));
    }

    let mut game_state = GameState::new_empty();

    parse_board(fields[0], &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(fields[1])?;
    game_state.castle_rights = parse_castle_rights(fields[2])?;
    game_state.en_passant_target = parse_en_passant_target(fields[3])?;

    if fields.len() == 6 {
        game_state.halfmove_clock = fields[4]
            .parse::<u16>()
            .map_err(|_| invalid(format!("Invalid halfmove clock: {}", fields[4])))?;
        game_state.fullmove_number = fields[5]
            .parse::<u16>()
            .map_err(|_| invalid(format!("Invalid fullmove number: {}", fields[5])))?;
    }

    Ok(game_state)
}

fn invalid(msg: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(msg.into())
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("Board layout must contain 8 ranks"));
    }

    let mut kings_found = [0usize; 2];

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("Invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("Invalid piece character '{ch}' in board layout")))?;

            if col >= 8 {
                return Err(invalid("Board rank has too many files"));
            }

            let square = Square::new(row as u8, col as u8);
            game_state.set_piece(square, Some(piece));
            if piece.kind == PieceKind::King {
                kings_found[piece.color.index()] += 1;
                game_state.king_squares[piece.color.index()] = square;
            }
            col += 1;
        }

        if col != 8 {
            return Err(invalid("Board rank does not sum to 8 files"));
        }
    }

    if kings_found != [1, 1] {
        return Err(invalid("Board must hold exactly one king per side"));
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(format!("Invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castle_rights(castling_part: &str) -> ChessResult<CastleRights> {
    let mut rights = CastleRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.light_kingside = true,
            'Q' => rights.light_queenside = true,
            'k' => rights.dark_kingside = true,
            'q' => rights.dark_queenside = true,
            _ => return Err(invalid(format!("Invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_target(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(format!("Invalid en-passant square: {en_passant_part}")))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(game_state.side_to_move, Color::Light);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(
            game_state.piece_at(Square::new(0, 3)),
            Some(Piece::new(Color::Dark, PieceKind::Queen))
        );
        assert_eq!(game_state.king_square(Color::Light), Square::new(7, 4));
    }

    #[test]
    fn clocks_are_optional() {
        let game_state = parse_fen("4k3/8/8/8/8/8/8/4K3 b - e3").expect("short FEN should parse");
        assert_eq!(game_state.side_to_move, Color::Dark);
        assert_eq!(game_state.en_passant_target, Some(Square::new(5, 4)));
        assert_eq!(game_state.fullmove_number, 1);
    }

    #[test]
    fn rejects_bad_layouts() {
        for fen in [
            "4k3/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K2 w - - 0 1",
            "4k3/8/8/8/8/8/8/4X3 w - - 0 1",
            "8/8/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/3KK3 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w KX - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - z9 0 1",
            "4k3/8/8/8/8/8/8/4K3 w -",
        ] {
            assert!(matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))), "{fen}");
        }
    }
}
