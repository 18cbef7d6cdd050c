//! Shape catalog - the seven standard pieces
//!
//! Local geometry is given with y growing upwards. Spawn positions are a pure
//! function of the board size: horizontally centered and pushed against the
//! top of the well (the I bar sits one row lower).

use crate::piece::{HalfPoint, Piece, Point};
use crate::types::PieceKind;

/// Build the piece of `kind` for a board of the given size
pub fn piece(kind: PieceKind, board_width: usize, board_height: usize) -> Piece {
    let (offsets, center, top) = shape(kind);
    let x = (board_width / 2) as i32 - 1;
    let y = board_height as i32 - top;
    Piece::new(kind, offsets, kind.color(), center, Point::new(x, y))
}

/// All seven pieces in catalog order
pub fn pieces(board_width: usize, board_height: usize) -> Vec<Piece> {
    PieceKind::ALL
        .iter()
        .map(|&kind| piece(kind, board_width, board_height))
        .collect()
}

/// Local offsets, rotation center and how far below the board height the
/// spawn position sits.
fn shape(kind: PieceKind) -> (&'static [(i32, i32)], HalfPoint, i32) {
    match kind {
        PieceKind::I => (
            &[(0, 2), (1, 2), (2, 2), (3, 2)],
            HalfPoint::from_halves(3, 3),
            3,
        ),
        PieceKind::J => (&[(0, 2), (0, 1), (1, 1), (2, 1)], HalfPoint::new(1, 1), 2),
        PieceKind::L => (&[(0, 1), (1, 1), (2, 1), (2, 2)], HalfPoint::new(1, 1), 2),
        PieceKind::O => (
            &[(0, 0), (0, 1), (1, 0), (1, 1)],
            HalfPoint::from_halves(1, 1),
            1,
        ),
        PieceKind::S => (&[(0, 1), (1, 1), (1, 2), (2, 2)], HalfPoint::new(1, 1), 2),
        PieceKind::T => (&[(1, 2), (0, 1), (1, 1), (2, 1)], HalfPoint::new(1, 1), 2),
        PieceKind::Z => (&[(0, 2), (1, 2), (1, 1), (2, 1)], HalfPoint::new(1, 1), 2),
    }
}
