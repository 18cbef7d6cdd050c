//! Piece module - a rigid body of colored cells
//!
//! A piece stores its cells in a local frame together with a rotation center
//! and a position offset. Moving and rotating are pure geometric transforms:
//! nothing here consults the board, so every operation always succeeds and
//! legality is decided by the caller.

use arrayvec::ArrayVec;

use crate::types::{Color, PieceKind, RotationDirection, MAX_PIECE_CELLS};

/// Integer point in the board plane (1-based, y grows upwards)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Point whose coordinates are integers or half-integers.
///
/// Stored doubled so rotation arithmetic stays in integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfPoint {
    x2: i32,
    y2: i32,
}

impl HalfPoint {
    /// Point at whole coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x2: x * 2, y2: y * 2 }
    }

    /// Point given in half units, e.g. `from_halves(3, 3)` is (1.5, 1.5)
    pub const fn from_halves(x2: i32, y2: i32) -> Self {
        Self { x2, y2 }
    }
}

/// A single colored cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Cell {
    pub const fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }
}

/// Cell storage of a piece
pub type Body = ArrayVec<Cell, MAX_PIECE_CELLS>;

/// A movable, rotatable piece.
///
/// Cloning yields a fully independent body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    cells: Body,
    spawn_cells: Body,
    center: HalfPoint,
    position: Point,
    spawn_position: Point,
    rotation: u8,
    previous_rotation: Option<u8>,
}

impl Piece {
    /// Build a piece from local cell offsets, all painted with `color`.
    ///
    /// Offsets beyond [`MAX_PIECE_CELLS`] are ignored.
    pub fn new(
        kind: PieceKind,
        offsets: &[(i32, i32)],
        color: Color,
        center: HalfPoint,
        position: Point,
    ) -> Self {
        let cells: Body = offsets
            .iter()
            .take(MAX_PIECE_CELLS)
            .map(|&(x, y)| Cell::new(x, y, color))
            .collect();

        Self {
            kind,
            spawn_cells: cells.clone(),
            cells,
            center,
            position,
            spawn_position: position,
            rotation: 0,
            previous_rotation: None,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Color of the whole piece (taken from its first cell)
    pub fn color(&self) -> Option<Color> {
        self.cells.first().map(|cell| cell.color)
    }

    /// Repaint every cell, including the spawn geometry
    pub fn set_color(&mut self, color: Color) {
        for cell in self.cells.iter_mut().chain(self.spawn_cells.iter_mut()) {
            cell.color = color;
        }
    }

    /// Cells in the local frame (rotation applied, position not applied)
    pub fn body(&self) -> &[Cell] {
        &self.cells
    }

    pub fn center(&self) -> HalfPoint {
        self.center
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Rotation index in 0..4, 0 being the spawn orientation
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Index before the last rotation, `None` if never rotated since spawn
    pub fn previous_rotation(&self) -> Option<u8> {
        self.previous_rotation
    }

    pub(crate) fn set_previous_rotation(&mut self, previous: Option<u8>) {
        self.previous_rotation = previous;
    }

    /// Cells translated by the piece position
    pub fn absolute_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let Point { x, y } = self.position;
        self.cells
            .iter()
            .map(move |cell| Cell::new(cell.x + x, cell.y + y, cell.color))
    }

    pub fn move_up(&mut self) -> &mut Self {
        self.translate(0, 1)
    }

    pub fn move_down(&mut self) -> &mut Self {
        self.translate(0, -1)
    }

    pub fn move_left(&mut self) -> &mut Self {
        self.translate(-1, 0)
    }

    pub fn move_right(&mut self) -> &mut Self {
        self.translate(1, 0)
    }

    pub fn translate(&mut self, dx: i32, dy: i32) -> &mut Self {
        self.position.x += dx;
        self.position.y += dy;
        self
    }

    pub fn rotate_clockwise(&mut self) -> &mut Self {
        self.rotate(RotationDirection::Clockwise)
    }

    pub fn rotate_counterclockwise(&mut self) -> &mut Self {
        self.rotate(RotationDirection::Counterclockwise)
    }

    /// Quarter turn of every cell about the rotation center.
    ///
    /// With cos = 0 and sin = ±1 the turn reduces to swapping the relative
    /// coordinates and negating one of them.
    pub fn rotate(&mut self, direction: RotationDirection) -> &mut Self {
        let (fx, fy) = match direction {
            RotationDirection::Clockwise => (1, -1),
            RotationDirection::Counterclockwise => (-1, 1),
        };
        self.previous_rotation = Some(self.rotation);
        self.rotation = direction.apply(self.rotation);

        let HalfPoint { x2: cx, y2: cy } = self.center;
        for cell in &mut self.cells {
            let rel_x = cell.x * 2 - cx;
            let rel_y = cell.y * 2 - cy;
            let x2 = cx + rel_y * fx;
            let y2 = cy + rel_x * fy;
            debug_assert!(x2 % 2 == 0 && y2 % 2 == 0, "rotation left the grid lattice");
            cell.x = x2.div_euclid(2);
            cell.y = y2.div_euclid(2);
        }
        self
    }

    /// Restore spawn geometry, spawn position and rotation index 0.
    ///
    /// Rotates clockwise until the body matches the spawn copy; four quarter
    /// turns are the identity, so at most three are ever needed.
    pub fn reset(&mut self) {
        let mut turns = 0;
        while self.cells != self.spawn_cells && turns < 4 {
            self.rotate_clockwise();
            turns += 1;
        }
        assert!(
            self.cells == self.spawn_cells,
            "{} piece did not return to its spawn geometry",
            self.kind.as_str()
        );

        self.position = self.spawn_position;
        self.rotation = 0;
        self.previous_rotation = None;
    }

    /// First cell with the greatest local x
    pub fn rightmost_cell(&self) -> Option<Cell> {
        self.extremal(|candidate, best| candidate.x > best.x)
    }

    /// First cell with the smallest local x
    pub fn leftmost_cell(&self) -> Option<Cell> {
        self.extremal(|candidate, best| candidate.x < best.x)
    }

    /// First cell with the smallest local y
    pub fn bottom_cell(&self) -> Option<Cell> {
        self.extremal(|candidate, best| candidate.y < best.y)
    }

    fn extremal(&self, better: impl Fn(&Cell, &Cell) -> bool) -> Option<Cell> {
        let mut cells = self.cells.iter();
        let mut best = *cells.next()?;
        for cell in cells {
            if better(cell, &best) {
                best = *cell;
            }
        }
        Some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t_piece() -> Piece {
        Piece::new(
            PieceKind::T,
            &[(1, 2), (0, 1), (1, 1), (2, 1)],
            Color::PURPLE,
            HalfPoint::new(1, 1),
            Point::new(4, 22),
        )
    }

    fn coords(piece: &Piece) -> Vec<(i32, i32)> {
        piece.body().iter().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn clockwise_turn_points_t_right() {
        let mut piece = t_piece();
        piece.rotate_clockwise();

        // Nose moves from above the center to its right.
        assert_eq!(coords(&piece), vec![(2, 1), (1, 2), (1, 1), (1, 0)]);
        assert_eq!(piece.rotation(), 1);
        assert_eq!(piece.previous_rotation(), Some(0));
    }

    #[test]
    fn counterclockwise_from_spawn_is_index_three() {
        let mut piece = t_piece();
        piece.rotate_counterclockwise();
        assert_eq!(piece.rotation(), 3);
        assert_eq!(piece.previous_rotation(), Some(0));
        assert_eq!(coords(&piece), vec![(0, 1), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn half_integer_center_stays_on_lattice() {
        let mut piece = Piece::new(
            PieceKind::I,
            &[(0, 2), (1, 2), (2, 2), (3, 2)],
            Color::CYAN,
            HalfPoint::from_halves(3, 3),
            Point::new(4, 21),
        );
        piece.rotate_clockwise();
        assert_eq!(coords(&piece), vec![(2, 3), (2, 2), (2, 1), (2, 0)]);
    }

    #[test]
    fn moves_chain_and_only_touch_position() {
        let mut piece = t_piece();
        piece.move_left().move_left().move_down().move_right().move_up();
        assert_eq!(piece.position(), Point::new(3, 22));
        assert_eq!(coords(&piece), coords(&t_piece()));
    }

    #[test]
    fn reset_restores_spawn_state() {
        let mut piece = t_piece();
        piece.rotate_clockwise().rotate_clockwise().move_down().move_left();
        piece.reset();
        assert_eq!(piece, t_piece());
        assert_eq!(piece.previous_rotation(), None);
    }

    #[test]
    fn clone_is_independent() {
        let original = t_piece();
        let mut copy = original.clone();
        copy.rotate_clockwise().move_down();
        assert_eq!(original, t_piece());
        assert_ne!(copy, original);
    }

    #[test]
    fn extremal_cells() {
        let piece = t_piece();
        assert_eq!(piece.leftmost_cell().map(|c| (c.x, c.y)), Some((0, 1)));
        assert_eq!(piece.rightmost_cell().map(|c| (c.x, c.y)), Some((2, 1)));
        assert_eq!(piece.bottom_cell().map(|c| (c.x, c.y)), Some((0, 1)));
    }

    #[test]
    fn absolute_cells_apply_position() {
        let piece = t_piece();
        let abs: Vec<_> = piece.absolute_cells().map(|c| (c.x, c.y)).collect();
        assert_eq!(abs, vec![(5, 24), (4, 23), (5, 23), (6, 23)]);
    }

    #[test]
    fn set_color_repaints_everything() {
        let mut piece = t_piece();
        piece.set_color(Color::RED.with_alpha(10));
        assert!(piece.body().iter().all(|c| c.color == Color::RED.with_alpha(10)));
        piece.rotate_clockwise();
        piece.reset();
        assert_eq!(piece.color(), Some(Color::RED.with_alpha(10)));
    }
}
