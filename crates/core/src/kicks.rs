//! Wall kick tables
//!
//! Offsets follow the Super Rotation System with y growing upwards.
//! Reference: https://tetris.wiki/Super_Rotation_System
//!
//! Each row holds the nudges for one clockwise transition `r -> r + 1`.
//! The counterclockwise transition `r + 1 -> r` reuses the same row with
//! every offset negated (`wise = -1`).

use crate::types::PieceKind;

/// Candidate nudges for one transition, tried in order
pub type KickRow = [(i32, i32); 4];

/// Rows indexed by the clockwise source rotation 0..4
pub type KickTable = [KickRow; 4];

/// Shared by J, L, O, S, T and Z
const JLSTZ_KICKS: KickTable = [
    // 0 -> 1
    [(-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 1 -> 2
    [(1, 0), (1, -1), (0, 2), (1, 2)],
    // 2 -> 3
    [(1, 0), (1, 1), (0, -2), (1, -2)],
    // 3 -> 0
    [(-1, 0), (-1, -1), (0, 2), (-1, 2)],
];

const I_KICKS: KickTable = [
    // 0 -> 1
    [(-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 1 -> 2
    [(-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 2 -> 3
    [(2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 3 -> 0
    [(1, 0), (-2, 0), (1, -2), (-2, 1)],
];

/// Kick table for a piece kind
pub fn kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::I => &I_KICKS,
        PieceKind::J | PieceKind::L | PieceKind::O | PieceKind::S | PieceKind::T | PieceKind::Z => {
            &JLSTZ_KICKS
        }
    }
}

/// Table row and sign for a transition `previous -> current`.
///
/// Returns `None` for anything that is not a single quarter turn. The 3/0
/// wraparound is matched explicitly because `current - previous` is not
/// monotonic across it.
pub fn transition(previous: u8, current: u8) -> Option<(usize, i32)> {
    match (previous, current) {
        (3, 0) => Some((3, 1)),
        (0, 3) => Some((3, -1)),
        (p, c) if p < 3 && c == p + 1 => Some((p as usize, 1)),
        (p, c) if c < 3 && p == c + 1 => Some((c as usize, -1)),
        _ => None,
    }
}

/// Offsets to try, already scaled by the transition direction
pub fn kick_offsets(kind: PieceKind, previous: u8, current: u8) -> Option<[(i32, i32); 4]> {
    let (row, wise) = transition(previous, current)?;
    Some(kick_table(kind)[row].map(|(dx, dy)| (dx * wise, dy * wise)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clockwise_transitions() {
        assert_eq!(transition(0, 1), Some((0, 1)));
        assert_eq!(transition(1, 2), Some((1, 1)));
        assert_eq!(transition(2, 3), Some((2, 1)));
        assert_eq!(transition(3, 0), Some((3, 1)));
    }

    #[test]
    fn counterclockwise_transitions() {
        assert_eq!(transition(1, 0), Some((0, -1)));
        assert_eq!(transition(2, 1), Some((1, -1)));
        assert_eq!(transition(3, 2), Some((2, -1)));
        assert_eq!(transition(0, 3), Some((3, -1)));
    }

    #[test]
    fn non_adjacent_transitions_have_no_row() {
        assert_eq!(transition(0, 2), None);
        assert_eq!(transition(1, 3), None);
        assert_eq!(transition(2, 2), None);
        assert_eq!(transition(4, 0), None);
    }

    #[test]
    fn i_spawn_clockwise_offsets() {
        assert_eq!(
            kick_offsets(PieceKind::I, 0, 1),
            Some([(-2, 0), (1, 0), (-2, -1), (1, 2)])
        );
        assert_eq!(
            kick_offsets(PieceKind::I, 1, 0),
            Some([(2, 0), (-1, 0), (2, 1), (-1, -2)])
        );
    }

    #[test]
    fn non_i_pieces_share_a_table() {
        let t = kick_table(PieceKind::T);
        for kind in [PieceKind::J, PieceKind::L, PieceKind::O, PieceKind::S, PieceKind::Z] {
            assert_eq!(kick_table(kind), t);
        }
        assert_ne!(kick_table(PieceKind::I), t);
    }
}
