//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, making them usable
//! from the rules engine, the input mapping and any rendering front end.
//!
//! # Coordinates
//!
//! The playfield is addressed with 1-based coordinates where `y` grows
//! upwards: row 1 is the floor and row `height` is the top of the well.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_WIDTH` | 10 | Columns |
//! | `DEFAULT_BOARD_HEIGHT` | 24 | Rows |
//! | `DEFAULT_GRAVITY_INTERVAL_NS` | 4e8 | One gravity step every 400ms |
//! | `LOCK_DELAY_NS` | 5e8 | Grounded time before a piece locks (fixed) |
//! | `GHOST_ALPHA` | 100 | Alpha applied to the ghost piece color |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Action, PieceKind, RotationDirection};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Action::from_str("hardDrop"), Some(Action::HardDrop));
//! assert_eq!(
//!     RotationDirection::Clockwise.inverse(),
//!     RotationDirection::Counterclockwise
//! );
//! ```

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: usize = 10;

/// Default board height in cells (20 visible rows plus spawn headroom)
pub const DEFAULT_BOARD_HEIGHT: usize = 24;

/// Default gravity interval in nanoseconds (400ms per row)
pub const DEFAULT_GRAVITY_INTERVAL_NS: u64 = 400_000_000;

/// Continuous grounded time after which the current piece is placed (500ms).
///
/// Not configurable at runtime.
pub const LOCK_DELAY_NS: u64 = 500_000_000;

/// Alpha channel of the ghost piece color
pub const GHOST_ALPHA: u8 = 100;

/// Upper bound on the number of cells a single piece may have
pub const MAX_PIECE_CELLS: usize = 8;

/// Smallest board edge that still fits every standard piece at spawn
pub const MIN_BOARD_SIDE: usize = 4;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue
/// - **L**: Orange (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green
/// - **T**: Purple
/// - **Z**: Red (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to uppercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Canonical color of this kind
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::CYAN,
            PieceKind::J => Color::BLUE,
            PieceKind::L => Color::ORANGE,
            PieceKind::O => Color::YELLOW,
            PieceKind::S => Color::GREEN,
            PieceKind::T => Color::PURPLE,
            PieceKind::Z => Color::RED,
        }
    }
}

/// RGBA color tag carried by every cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const ORANGE: Color = Color::rgb(255, 200, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const PURPLE: Color = Color::rgb(153, 0, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with a different alpha channel
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Direction of a quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    Counterclockwise,
}

impl RotationDirection {
    /// The turn that undoes this one
    pub fn inverse(&self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::Counterclockwise,
            RotationDirection::Counterclockwise => RotationDirection::Clockwise,
        }
    }

    /// Next rotation index (0..4) after turning from `index`
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::RotationDirection;
    ///
    /// assert_eq!(RotationDirection::Clockwise.apply(3), 0);
    /// assert_eq!(RotationDirection::Counterclockwise.apply(0), 3);
    /// ```
    pub fn apply(&self, index: u8) -> u8 {
        match self {
            RotationDirection::Clockwise => (index + 1) % 4,
            RotationDirection::Counterclockwise => (index + 3) % 4,
        }
    }
}

/// Discrete player actions understood by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down and restart the gravity interval
    MoveDown,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Drop to the resting row and place immediately
    HardDrop,
}

impl Action {
    /// Every action
    pub const ALL: [Action; 6] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveDown,
        Action::RotateCw,
        Action::RotateCcw,
        Action::HardDrop,
    ];

    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Action;
    ///
    /// assert_eq!(Action::from_str("moveLeft"), Some(Action::MoveLeft));
    /// assert_eq!(Action::from_str("rotateCcw"), Some(Action::RotateCcw));
    /// assert_eq!(Action::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Action::MoveLeft),
            "moveright" => Some(Action::MoveRight),
            "movedown" => Some(Action::MoveDown),
            "rotatecw" => Some(Action::RotateCw),
            "rotateccw" => Some(Action::RotateCcw),
            "harddrop" => Some(Action::HardDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::MoveLeft => "moveLeft",
            Action::MoveRight => "moveRight",
            Action::MoveDown => "moveDown",
            Action::RotateCw => "rotateCw",
            Action::RotateCcw => "rotateCcw",
            Action::HardDrop => "hardDrop",
        }
    }

    /// Whether a successful application counts as an adjustment that
    /// refreshes the lock delay
    pub fn is_adjustment(&self) -> bool {
        matches!(
            self,
            Action::MoveLeft | Action::MoveRight | Action::RotateCw | Action::RotateCcw
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(DEFAULT_GRAVITY_INTERVAL_NS, 400_000_000);
        assert_eq!(LOCK_DELAY_NS, 500_000_000);
        assert_eq!(DEFAULT_BOARD_WIDTH, 10);
        assert_eq!(DEFAULT_BOARD_HEIGHT, 24);
    }

    #[test]
    fn kind_string_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn action_string_roundtrip() {
        for action in Action::ALL {
            assert_eq!(Action::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn kind_colors_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn rotation_index_wraps() {
        let mut index = 0;
        for expected in [1, 2, 3, 0] {
            index = RotationDirection::Clockwise.apply(index);
            assert_eq!(index, expected);
        }
        for expected in [3, 2, 1, 0] {
            index = RotationDirection::Counterclockwise.apply(index);
            assert_eq!(index, expected);
        }
    }

    #[test]
    fn ghost_alpha_keeps_rgb() {
        let ghost = Color::PURPLE.with_alpha(GHOST_ALPHA);
        assert_eq!((ghost.r, ghost.g, ghost.b), (153, 0, 255));
        assert_eq!(ghost.a, GHOST_ALPHA);
    }
}
