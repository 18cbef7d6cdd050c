//! Board module - the settled grid plus the current piece and its ghost
//!
//! The grid is a flat row-major vector (`(y - 1) * width + (x - 1)`), using
//! 1-based coordinates where row 1 is the floor. Per-row and per-column
//! occupancy counts are kept in step with the grid on every write.
//!
//! Every mutation of the current piece is checked against the settled cells
//! and the walls before it is committed; a rejected move leaves the board
//! exactly as it was.

use tracing::debug;

use crate::kicks::kick_offsets;
use crate::piece::{Cell, Piece};
use crate::types::{
    Color, RotationDirection, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, GHOST_ALPHA,
};

/// The playfield
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<Color>>,
    blocks_per_row: Vec<usize>,
    blocks_per_column: Vec<usize>,
    current: Option<Piece>,
    ghost: Option<Piece>,
    ghost_enabled: bool,
}

impl Board {
    /// Create an empty board
    pub fn new(width: usize, height: usize, ghost_enabled: bool) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
            blocks_per_row: vec![0; height],
            blocks_per_column: vec![0; width],
            current: None,
            ghost: None,
            ghost_enabled,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat index of a 1-based coordinate
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize - 1) * self.width + (x as usize - 1))
    }

    /// Whether `(x, y)` lies inside `[1, width] x [1, height]`
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 1 && y >= 1 && x as usize <= self.width && y as usize <= self.height
    }

    /// Settled color at `(x, y)`.
    ///
    /// Outer `None` means out of bounds, inner `None` an empty cell.
    pub fn get(&self, x: i32, y: i32) -> Option<Option<Color>> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Settled cell at `(x, y)`, `None` when empty or out of bounds
    pub fn block_at_cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.get(x, y)
            .flatten()
            .map(|color| Cell::new(x, y, color))
    }

    /// Whether `(x, y)` is inside the grid and holds a settled cell
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Write a settled cell, keeping the occupancy counts in step.
    ///
    /// Returns false when out of bounds or when the cell is covered by the
    /// current piece.
    pub fn set(&mut self, x: i32, y: i32, cell: Option<Color>) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        if cell.is_some() && self.covered_by_current(x, y) {
            return false;
        }

        let (col, row) = (x as usize - 1, y as usize - 1);
        match (self.cells[idx].is_some(), cell.is_some()) {
            (false, true) => {
                self.blocks_per_row[row] += 1;
                self.blocks_per_column[col] += 1;
            }
            (true, false) => {
                self.blocks_per_row[row] -= 1;
                self.blocks_per_column[col] -= 1;
            }
            _ => {}
        }
        self.cells[idx] = cell;
        self.refresh_ghost();
        true
    }

    fn covered_by_current(&self, x: i32, y: i32) -> bool {
        self.current
            .as_ref()
            .is_some_and(|piece| piece.absolute_cells().any(|c| c.x == x && c.y == y))
    }

    /// Occupied cells in a 1-based row, `None` when out of range
    pub fn amount_of_blocks_in_row(&self, row: i32) -> Option<usize> {
        if row < 1 || row as usize > self.height {
            return None;
        }
        Some(self.blocks_per_row[row as usize - 1])
    }

    /// Occupied cells in a 1-based column, `None` when out of range
    pub fn amount_of_blocks_in_column(&self, column: i32) -> Option<usize> {
        if column < 1 || column as usize > self.width {
            return None;
        }
        Some(self.blocks_per_column[column as usize - 1])
    }

    /// Whether a 1-based row is completely filled
    pub fn is_row_full(&self, row: i32) -> bool {
        self.amount_of_blocks_in_row(row) == Some(self.width)
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn ghost(&self) -> Option<&Piece> {
        self.ghost.as_ref()
    }

    pub fn ghost_enabled(&self) -> bool {
        self.ghost_enabled
    }

    /// Collision test for `piece` displaced by `(dx, dy)`.
    ///
    /// `extra` is evaluated on the undisplaced absolute coordinate of each
    /// cell. Any displaced cell outside the grid or on a settled cell counts
    /// as a collision.
    fn collides(&self, piece: &Piece, dx: i32, dy: i32, extra: impl Fn(i32, i32) -> bool) -> bool {
        piece.absolute_cells().any(|cell| {
            let (x, y) = (cell.x + dx, cell.y + dy);
            !self.in_bounds(x, y) || extra(cell.x, cell.y) || self.is_occupied(x, y)
        })
    }

    /// Install `piece` as the current piece.
    ///
    /// Fails without side effects when its spawn cells are blocked.
    pub fn set_current_tetromino(&mut self, piece: Piece) -> bool {
        if self.collides(&piece, 0, 0, |_, _| false) {
            return false;
        }
        self.current = Some(piece);
        self.refresh_ghost();
        true
    }

    pub fn move_curr_tetromino_down(&mut self) -> bool {
        self.shift_current(0, -1, |_, y| y <= 1)
    }

    pub fn move_curr_tetromino_left(&mut self) -> bool {
        self.shift_current(-1, 0, |x, _| x <= 1)
    }

    pub fn move_curr_tetromino_right(&mut self) -> bool {
        let width = self.width as i32;
        self.shift_current(1, 0, move |x, _| x >= width)
    }

    fn shift_current(&mut self, dx: i32, dy: i32, extra: impl Fn(i32, i32) -> bool) -> bool {
        let blocked = match &self.current {
            Some(piece) => self.collides(piece, dx, dy, extra),
            None => return false,
        };
        if blocked {
            return false;
        }
        if let Some(piece) = self.current.as_mut() {
            piece.translate(dx, dy);
        }
        self.refresh_ghost();
        true
    }

    /// True iff the current piece cannot move one row down
    pub fn is_downwards_movement_obstructed(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|piece| self.collides(piece, 0, -1, |_, y| y <= 1))
    }

    /// Drop the current piece until it rests; returns the rows travelled.
    ///
    /// Placing the piece is left to the caller.
    pub fn hard_drop_curr_tetromino(&mut self) -> u32 {
        let mut rows = 0;
        while self.move_curr_tetromino_down() {
            rows += 1;
        }
        rows
    }

    pub fn rotate_curr_tetromino_clockwise(&mut self) -> bool {
        self.rotate_current(RotationDirection::Clockwise)
    }

    pub fn rotate_curr_tetromino_counterclockwise(&mut self) -> bool {
        self.rotate_current(RotationDirection::Counterclockwise)
    }

    fn rotate_current(&mut self, direction: RotationDirection) -> bool {
        let Some(mut piece) = self.current.take() else {
            return false;
        };

        let previous = piece.previous_rotation();
        piece.rotate(direction);
        let placed = !self.collides(&piece, 0, 0, |_, _| false) || self.wall_kick(&mut piece);
        if !placed {
            piece.rotate(direction.inverse());
            piece.set_previous_rotation(previous);
        }

        self.current = Some(piece);
        if placed {
            self.refresh_ghost();
        }
        placed
    }

    /// Nudge an already rotated piece to the first free kick offset
    fn wall_kick(&self, piece: &mut Piece) -> bool {
        let Some(previous) = piece.previous_rotation() else {
            return false;
        };
        let Some(offsets) = kick_offsets(piece.kind(), previous, piece.rotation()) else {
            return false;
        };

        for (dx, dy) in offsets {
            if !self.collides(piece, dx, dy, |_, _| false) {
                piece.translate(dx, dy);
                return true;
            }
        }
        false
    }

    /// Bake the current piece into the grid.
    ///
    /// Returns the piece reset to its spawn state, or `None` if there was no
    /// current piece.
    pub fn place_curr_tetromino(&mut self) -> Option<Piece> {
        let mut piece = self.current.take()?;
        self.ghost = None;

        for cell in piece.absolute_cells() {
            if let Some(idx) = self.index(cell.x, cell.y) {
                let (col, row) = (cell.x as usize - 1, cell.y as usize - 1);
                if self.cells[idx].is_none() {
                    self.blocks_per_row[row] += 1;
                    self.blocks_per_column[col] += 1;
                }
                self.cells[idx] = Some(cell.color);
            }
        }
        debug!(kind = piece.kind().as_str(), "placed piece");

        piece.reset();
        Some(piece)
    }

    /// Empty a 1-based row if, and only if, it is full
    pub fn clear_row(&mut self, row: i32) -> bool {
        if !self.is_row_full(row) {
            return false;
        }

        let start = (row as usize - 1) * self.width;
        for cell in &mut self.cells[start..start + self.width] {
            *cell = None;
        }
        for count in &mut self.blocks_per_column {
            *count -= 1;
        }
        self.blocks_per_row[row as usize - 1] = 0;
        self.refresh_ghost();
        true
    }

    /// Shift every row above `row` down by one and empty the top row.
    ///
    /// Whatever `row` held is overwritten; normally it was just cleared.
    /// Refused when a shifted cell would land on the current piece.
    pub fn pull_above_blocks_down_from(&mut self, row: i32) -> bool {
        if row < 1 || row as usize > self.height {
            return false;
        }
        if self.pull_hits_current(row) {
            return false;
        }

        let width = self.width;
        let start = (row as usize - 1) * width;
        for (col, cell) in self.cells[start..start + width].iter().enumerate() {
            if cell.is_some() {
                self.blocks_per_column[col] -= 1;
            }
        }
        // copy_within handles the overlapping ranges
        self.cells.copy_within(start + width.., start);
        let top = (self.height - 1) * width;
        for cell in &mut self.cells[top..] {
            *cell = None;
        }

        self.blocks_per_row.copy_within(row as usize.., row as usize - 1);
        self.blocks_per_row[self.height - 1] = 0;
        self.refresh_ghost();
        true
    }

    /// Whether pulling the rows above `row` down would move a settled cell
    /// onto the current piece
    fn pull_hits_current(&self, row: i32) -> bool {
        let height = self.height as i32;
        self.current.as_ref().is_some_and(|piece| {
            piece
                .absolute_cells()
                .any(|c| c.y >= row && c.y < height && self.is_occupied(c.x, c.y + 1))
        })
    }

    /// Clear every full row and compact the grid.
    ///
    /// Rows are emptied first, then compacted from the highest cleared row
    /// down so no row is shifted twice. A pull that would hit the current
    /// piece is skipped. Returns the cleared rows in ascending order.
    pub fn clear_full_rows(&mut self) -> Vec<i32> {
        let cleared: Vec<i32> = (1..=self.height as i32)
            .filter(|&row| self.clear_row(row))
            .collect();

        for &row in cleared.iter().rev() {
            self.pull_above_blocks_down_from(row);
        }
        if !cleared.is_empty() {
            debug!(rows = ?cleared, "cleared rows");
        }
        cleared
    }

    /// Flip the ghost feature and return the new state
    pub fn toggle_ghost_piece(&mut self) -> bool {
        self.ghost_enabled = !self.ghost_enabled;
        self.refresh_ghost();
        self.ghost_enabled
    }

    /// Empty every cell and drop the current and ghost pieces
    pub fn clear_all(&mut self) {
        self.cells.fill(None);
        self.blocks_per_row.fill(0);
        self.blocks_per_column.fill(0);
        self.current = None;
        self.ghost = None;
    }

    /// Rebuild the ghost from the current piece.
    fn refresh_ghost(&mut self) {
        let ghost = match (&self.current, self.ghost_enabled) {
            (Some(current), true) => {
                let mut ghost = current.clone();
                if let Some(color) = current.color() {
                    ghost.set_color(color.with_alpha(GHOST_ALPHA));
                }
                while !self.collides(&ghost, 0, -1, |_, y| y <= 1) {
                    ghost.move_down();
                }
                Some(ghost)
            }
            _ => None,
        };
        self.ghost = ghost;
    }

    /// Recount occupancy from the grid (used by tests to check the caches)
    pub fn recount(&self) -> (Vec<usize>, Vec<usize>) {
        let mut rows = vec![0; self.height];
        let mut columns = vec![0; self.width];
        for (idx, cell) in self.cells.iter().enumerate() {
            if cell.is_some() {
                rows[idx / self.width] += 1;
                columns[idx % self.width] += 1;
            }
        }
        (rows, columns)
    }

    /// Cached occupancy counts, rows then columns
    pub fn occupancy(&self) -> (&[usize], &[usize]) {
        (&self.blocks_per_row, &self.blocks_per_column)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT, true)
    }
}
