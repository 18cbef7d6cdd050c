//! Game module - the timing state machine
//!
//! Ties the board and the piece sequencer together. Gravity and lock delay
//! advance only from the elapsed-time samples handed to [`Game::update`],
//! so a game is fully deterministic for a given seed and input script.

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::catalog;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::piece::Piece;
use crate::rng::PieceBag;
use crate::timer::TimeSource;
use crate::types::{Action, LOCK_DELAY_NS};

/// A game session
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    bag: PieceBag,
    /// Time since the last gravity step
    elapsed_accumulator_ns: u64,
    /// Continuous grounded time of the current piece
    lock_delay_accumulator_ns: u64,
    interval_ns: u64,
    game_over: bool,
    /// Set by a successful lateral move or rotation; grants a fresh lock window
    just_moved: bool,
}

impl Game {
    /// Start a session and spawn its first piece
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let catalog = catalog::pieces(config.board_width, config.board_height);
        let mut game = Self {
            board: Board::new(config.board_width, config.board_height, config.ghost_enabled),
            bag: PieceBag::new(catalog, config.seed),
            elapsed_accumulator_ns: 0,
            lock_delay_accumulator_ns: 0,
            interval_ns: config.gravity_interval_ns,
            game_over: false,
            just_moved: false,
        };
        game.spawn_next();
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Piece that spawns after the current one
    pub fn next_piece(&self) -> Option<&Piece> {
        self.bag.peek()
    }

    /// Upcoming pieces in spawn order
    pub fn next_queue(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.bag.queue()
    }

    /// Every piece kind this game draws from
    pub fn catalog(&self) -> &[Piece] {
        self.bag.catalog()
    }

    /// Gravity interval in nanoseconds
    pub fn interval(&self) -> u64 {
        self.interval_ns
    }

    pub fn set_interval(&mut self, interval_ns: u64) -> Result<(), ConfigError> {
        if interval_ns == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        self.interval_ns = interval_ns;
        Ok(())
    }

    /// Flip the ghost piece and return the new state
    pub fn toggle_ghost_piece(&mut self) -> bool {
        self.board.toggle_ghost_piece()
    }

    /// Install the head of the bag as the current piece.
    ///
    /// A blocked spawn is a top-out: the board is left untouched and the
    /// game is flagged over until the next update resets it.
    fn spawn_next(&mut self) -> bool {
        let Some(piece) = self.bag.take_next() else {
            return false;
        };
        let kind = piece.kind();

        if !self.board.set_current_tetromino(piece) {
            warn!(kind = kind.as_str(), "spawn blocked, game over");
            self.game_over = true;
            return false;
        }

        self.bag.refill();
        debug!(kind = kind.as_str(), "spawned piece");
        true
    }

    /// Bake the current piece, clear rows and bring in the next piece
    fn place_and_spawn(&mut self) {
        self.board.place_curr_tetromino();
        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            debug!(lines = cleared.len(), "line clear");
        }
        self.spawn_next();
    }

    /// Apply a player action; returns whether it had an effect.
    ///
    /// Lateral moves and rotations overwrite the just-moved flag with their
    /// result, so only a successful last adjustment refreshes the lock delay.
    pub fn apply_action(&mut self, action: Action) -> bool {
        if self.game_over || self.board.current().is_none() {
            return false;
        }

        let moved = match action {
            Action::HardDrop => {
                self.board.hard_drop_curr_tetromino();
                self.place_and_spawn();
                self.elapsed_accumulator_ns = 0;
                self.lock_delay_accumulator_ns = 0;
                return true;
            }
            Action::MoveDown => {
                self.elapsed_accumulator_ns = 0;
                self.board.move_curr_tetromino_down()
            }
            Action::MoveLeft => self.board.move_curr_tetromino_left(),
            Action::MoveRight => self.board.move_curr_tetromino_right(),
            Action::RotateCw => self.board.rotate_curr_tetromino_clockwise(),
            Action::RotateCcw => self.board.rotate_curr_tetromino_counterclockwise(),
        };

        if action.is_adjustment() {
            self.just_moved = moved;
        }
        moved
    }

    /// Advance gravity and lock delay by `delta_ns`
    pub fn update(&mut self, delta_ns: u64) {
        if self.game_over {
            self.reset();
            return;
        }

        self.elapsed_accumulator_ns = self.elapsed_accumulator_ns.saturating_add(delta_ns);
        if self.elapsed_accumulator_ns >= self.interval_ns {
            self.apply_action(Action::MoveDown);
        }

        if self.board.is_downwards_movement_obstructed() && !self.just_moved {
            self.lock_delay_accumulator_ns = self.lock_delay_accumulator_ns.saturating_add(delta_ns);
            if self.lock_delay_accumulator_ns >= LOCK_DELAY_NS {
                self.place_and_spawn();
                self.lock_delay_accumulator_ns = 0;
            }
        } else {
            self.lock_delay_accumulator_ns = 0;
            self.just_moved = false;
        }
    }

    /// Sample `timer` once and advance by the result
    pub fn tick(&mut self, timer: &mut impl TimeSource) {
        let delta_ns = timer.elapsed_ns();
        self.update(delta_ns);
    }

    /// Clear the board, start a fresh bag and spawn
    pub fn reset(&mut self) {
        info!("game reset");
        self.board.clear_all();
        self.bag.reseed();
        self.elapsed_accumulator_ns = 0;
        self.lock_delay_accumulator_ns = 0;
        self.just_moved = false;
        self.game_over = false;
        self.spawn_next();
    }
}
