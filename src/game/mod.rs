//! Game session and selection handling.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::options::GameOptions;

mod actions;
pub mod state;

pub use state::{Selection, Zone};

/// A solitaire session: the board, the player's current selection, and an
/// activation counter.
///
/// Input arrives as activations of board zones (see [`Game::activate`]);
/// each one runs to completion before the next. A front end redraws from
/// [`Game::board`] and [`Game::selection`] afterwards.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards in play.
    board: Board,
    /// What the player has picked up.
    selection: Selection,
    /// Game options.
    options: GameOptions,
    /// Accepted activations since the deal.
    activations: u32,
    /// Random number generator for deals.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game dealt from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use klondike::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.board().stock_len(), 24);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let board = Board::new(&mut rng);

        Self {
            board,
            selection: Selection::None,
            options,
            activations: 0,
            rng,
        }
    }

    /// Creates a game from an arranged board.
    ///
    /// `seed` drives later deals made by [`restart`](Self::restart).
    #[must_use]
    pub fn from_board(board: Board, options: GameOptions, seed: u64) -> Self {
        Self {
            board,
            selection: Selection::None,
            options,
            activations: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Abandons the current board and deals a new one.
    ///
    /// This also clears the selection and the activation counter.
    pub fn restart(&mut self) {
        self.board = Board::new(&mut self.rng);
        self.selection = Selection::None;
        self.activations = 0;
        log::debug!("dealt a new board");
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current selection.
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of activations accepted since the deal.
    ///
    /// Fewer is better: the count is the player's score.
    #[must_use]
    pub const fn activations(&self) -> u32 {
        self.activations
    }

    /// Returns whether the waste is selected.
    #[must_use]
    pub const fn is_waste_selected(&self) -> bool {
        self.selection.is_waste()
    }

    /// Returns whether a tableau pile is selected.
    #[must_use]
    pub const fn is_pile_selected(&self) -> bool {
        self.selection.is_pile()
    }

    /// Returns the index of the selected tableau pile.
    #[must_use]
    pub const fn selected_pile(&self) -> Option<usize> {
        self.selection.pile()
    }

    /// Returns whether the game has been won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }
}
