//! A Klondike solitaire game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns a dealt [`Board`] and the
//! player's current [`Selection`], and turns activations of board zones into
//! moves: drawing from the stock, picking up the waste or a tableau run, and
//! placing cards on foundations and tableau piles.
//!
//! Rendering is left to front ends, which read a [`BoardView`] after each
//! activation.
//!
//! # Example
//!
//! ```
//! use klondike::{Game, GameOptions, Outcome, Zone};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let outcome = game.activate(Zone::Stock).unwrap();
//! assert_eq!(outcome, Outcome::Drew(3));
//! assert_eq!(game.board().waste_len(), 3);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod card;
pub mod error;
pub mod game;
pub mod options;
pub mod pile;
pub mod result;
pub mod view;

// Re-export main types
pub use board::{Board, DRAW_COUNT, FOUNDATION_COUNT, TABLEAU_COUNT};
pub use card::{Card, DECK_SIZE, Suit, new_shuffled_deck, standard_deck};
pub use error::IndexError;
pub use game::{Game, Selection, Zone};
pub use options::GameOptions;
pub use pile::Pile;
pub use result::Outcome;
pub use view::{BoardView, Renderer, TextRenderer};
