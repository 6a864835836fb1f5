//! Board state: stock, waste, foundations and tableau.

use rand::Rng;

use crate::card::{self, Card, KING};
use crate::error::IndexError;
use crate::pile::Pile;

mod moves;
mod rules;
mod stock;

/// Number of foundations.
pub const FOUNDATION_COUNT: usize = 4;
/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 7;
/// Maximum number of cards moved from stock to waste per draw.
pub const DRAW_COUNT: usize = 3;

/// A Klondike board.
///
/// The board owns every card in play. Commands that would break the
/// placement rules leave it unchanged, so a board dealt from a full deck
/// always holds each of the 52 cards exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Face-down draw pile.
    stock: Pile,
    /// Face-up discard pile.
    waste: Pile,
    /// Built up by suit from Ace to King.
    foundations: [Pile; FOUNDATION_COUNT],
    /// Built down by alternating color.
    tableau: [Pile; TABLEAU_COUNT],
}

impl Board {
    /// Deals a new board from a freshly shuffled deck.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::deal(card::new_shuffled_deck(rng))
    }

    /// Creates a board with every pile empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            stock: Pile::new(),
            waste: Pile::new(),
            foundations: Default::default(),
            tableau: Default::default(),
        }
    }

    /// Creates a board from prepared piles.
    ///
    /// Note: This function does not validate the arrangement. Piles that do
    /// not form a standard deck, or that break the building rules, are
    /// accepted as given.
    #[must_use]
    pub const fn from_piles(
        stock: Pile,
        waste: Pile,
        foundations: [Pile; FOUNDATION_COUNT],
        tableau: [Pile; TABLEAU_COUNT],
    ) -> Self {
        Self {
            stock,
            waste,
            foundations,
            tableau,
        }
    }

    /// Deals a deck onto an empty board.
    ///
    /// Cards are taken from the front of `deck`. Tableau pile `i` receives
    /// `i + 1` cards, face down except the last. Whatever remains becomes the
    /// stock, face down, with the last card of the deck on top.
    pub fn deal<I: IntoIterator<Item = Card>>(deck: I) -> Self {
        let mut board = Self::empty();
        let mut deck = deck.into_iter();

        for (index, pile) in board.tableau.iter_mut().enumerate() {
            for dealt in 0..=index {
                let Some(mut card) = deck.next() else {
                    break;
                };
                if dealt == index {
                    card.turn_up();
                } else {
                    card.turn_down();
                }
                pile.push(card);
            }
        }

        board.stock = deck
            .map(|mut card| {
                card.turn_down();
                card
            })
            .collect();

        log::trace!("dealt board with {} cards in stock", board.stock.len());
        board
    }

    /// Returns the top card of the stock.
    #[must_use]
    pub fn stock_top(&self) -> Option<&Card> {
        self.stock.top()
    }

    /// Returns the top card of the waste.
    #[must_use]
    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.top()
    }

    /// Returns the top card of a foundation.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a foundation index.
    pub fn foundation_top(&self, index: usize) -> Result<Option<&Card>, IndexError> {
        Ok(self.foundation(index)?.top())
    }

    /// Returns the cards of a tableau pile, bottom to top.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a tableau pile index.
    pub fn tableau_pile(&self, index: usize) -> Result<&[Card], IndexError> {
        Ok(self.pile(index)?.cards())
    }

    /// Returns the stock.
    #[must_use]
    pub const fn stock(&self) -> &Pile {
        &self.stock
    }

    /// Returns the waste.
    #[must_use]
    pub const fn waste(&self) -> &Pile {
        &self.waste
    }

    /// Returns a foundation.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a foundation index.
    pub fn foundation(&self, index: usize) -> Result<&Pile, IndexError> {
        self.foundations
            .get(index)
            .ok_or(IndexError::Foundation(index))
    }

    /// Returns a tableau pile.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a tableau pile index.
    pub fn pile(&self, index: usize) -> Result<&Pile, IndexError> {
        self.tableau.get(index).ok_or(IndexError::Pile(index))
    }

    /// Returns all foundations.
    #[must_use]
    pub const fn foundations(&self) -> &[Pile; FOUNDATION_COUNT] {
        &self.foundations
    }

    /// Returns all tableau piles.
    #[must_use]
    pub const fn tableau(&self) -> &[Pile; TABLEAU_COUNT] {
        &self.tableau
    }

    /// Returns the number of cards in the stock.
    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Returns the number of cards in the waste.
    #[must_use]
    pub fn waste_len(&self) -> usize {
        self.waste.len()
    }

    /// Iterates over every card on the board: stock, waste, foundations, then
    /// tableau, each pile bottom to top.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .cards()
            .iter()
            .chain(self.waste.cards())
            .chain(self.foundations.iter().flat_map(Pile::cards))
            .chain(self.tableau.iter().flat_map(Pile::cards))
    }

    /// Returns whether every foundation is topped by a King.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations
            .iter()
            .all(|pile| pile.top().is_some_and(|card| card.rank() == KING))
    }

    fn foundation_mut(&mut self, index: usize) -> Result<&mut Pile, IndexError> {
        self.foundations
            .get_mut(index)
            .ok_or(IndexError::Foundation(index))
    }

    fn pile_mut(&mut self, index: usize) -> Result<&mut Pile, IndexError> {
        self.tableau.get_mut(index).ok_or(IndexError::Pile(index))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
