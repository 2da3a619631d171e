use cozy_chess::{Board, File, Move, Piece, Square};

use crate::{error::PositionError, position::Position, rules::GameState};

/// Formats a move in standard UCI notation.
///
/// The board encodes castling as "king takes own rook"; UCI expects the king's
/// two-square destination, so castling moves are rewritten here.
pub fn move_to_uci(board: &Board, mv: Move) -> String {
    let to = castle_destination(board, mv).unwrap_or(mv.to);
    let mut s = format!("{}{}", mv.from, to);
    if let Some(p) = mv.promotion {
        let ch = match p {
            Piece::Queen => 'q',
            Piece::Rook => 'r',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            _ => 'q',
        };
        s.push(ch);
    }
    s
}

fn castle_destination(board: &Board, mv: Move) -> Option<Square> {
    let mover = board.side_to_move();
    if board.piece_on(mv.from) != Some(Piece::King) || board.color_on(mv.to) != Some(mover) {
        return None;
    }
    let file = if (mv.to.file() as u8) > (mv.from.file() as u8) {
        File::G
    } else {
        File::C
    };
    Some(Square::new(file, mv.from.rank()))
}

pub fn parse_uci_move(pos: &Position, txt: &str) -> Result<Move, PositionError> {
    let txt = txt.trim();
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return Err(PositionError::MalformedMove(txt.to_string()));
    }
    let wanted = txt.to_ascii_lowercase();

    // Match against the legal list so castling and promotion encodings agree.
    pos.legal_moves()
        .into_iter()
        .find(|&mv| move_to_uci(pos.board(), mv) == wanted)
        .ok_or_else(|| PositionError::IllegalMove(txt.to_string()))
}

/// Builds a position from the arguments of a UCI `position` command:
/// `startpos [moves ...]` or `fen <fields> [moves ...]`.
pub fn set_position_from_uci(args: &[&str]) -> Result<Position, PositionError> {
    let (mut pos, rest) = match args.first() {
        None => (Position::startpos(), &args[..0]),
        Some(&"startpos") => (Position::startpos(), &args[1..]),
        Some(&"fen") => {
            let end = args
                .iter()
                .position(|&a| a == "moves")
                .unwrap_or(args.len());
            let fen = args[1..end].join(" ");
            (Position::from_fen(&fen)?, &args[end..])
        }
        Some(other) => return Err(PositionError::UnsupportedCommand(other.to_string())),
    };

    if let Some((&"moves", moves)) = rest.split_first() {
        for txt in moves {
            let mv = parse_uci_move(&pos, txt)?;
            pos.apply_move(mv);
        }
    }
    Ok(pos)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
