use cozy_chess::{Color as CozyColor, Piece as CozyPiece};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];
}

impl From<CozyColor> for Color {
    fn from(c: CozyColor) -> Self {
        match c {
            CozyColor::White => Color::White,
            CozyColor::Black => Color::Black,
        }
    }
}

impl From<Color> for CozyColor {
    fn from(c: Color) -> Self {
        match c {
            Color::White => CozyColor::White,
            Color::Black => CozyColor::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }
}

impl From<CozyPiece> for PieceKind {
    fn from(p: CozyPiece) -> Self {
        match p {
            CozyPiece::Pawn => PieceKind::Pawn,
            CozyPiece::Knight => PieceKind::Knight,
            CozyPiece::Bishop => PieceKind::Bishop,
            CozyPiece::Rook => PieceKind::Rook,
            CozyPiece::Queen => PieceKind::Queen,
            CozyPiece::King => PieceKind::King,
        }
    }
}

impl From<PieceKind> for CozyPiece {
    fn from(p: PieceKind) -> Self {
        match p {
            PieceKind::Pawn => CozyPiece::Pawn,
            PieceKind::Knight => CozyPiece::Knight,
            PieceKind::Bishop => CozyPiece::Bishop,
            PieceKind::Rook => CozyPiece::Rook,
            PieceKind::Queen => CozyPiece::Queen,
            PieceKind::King => CozyPiece::King,
        }
    }
}
