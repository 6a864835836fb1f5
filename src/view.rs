//! Read-only board snapshots for front ends.
//!
//! A front end maps its own input (clicks, key presses) to
//! [`Zone`](crate::Zone) activations and draws from a [`BoardView`] after
//! each one. Layout and pixels stay on the front end's side.

use core::fmt;

use alloc::string::{String, ToString};

use crate::board::{Board, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::card::Card;
use crate::game::{Game, Selection};
use crate::pile::Pile;

/// Everything a front end needs to draw the board.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    /// Top card of the stock.
    pub stock_top: Option<&'a Card>,
    /// Number of cards in the stock.
    pub stock_len: usize,
    /// Top card of the waste.
    pub waste_top: Option<&'a Card>,
    /// Top card of each foundation.
    pub foundations: [Option<&'a Card>; FOUNDATION_COUNT],
    /// Each tableau pile, bottom to top.
    pub tableau: [&'a [Card]; TABLEAU_COUNT],
    /// What the player has picked up.
    pub selection: Selection,
    /// Whether the game has been won.
    pub won: bool,
}

impl<'a> BoardView<'a> {
    /// Captures a board and a selection.
    #[must_use]
    pub fn new(board: &'a Board, selection: Selection) -> Self {
        Self {
            stock_top: board.stock_top(),
            stock_len: board.stock_len(),
            waste_top: board.waste_top(),
            foundations: board.foundations().each_ref().map(Pile::top),
            tableau: board.tableau().each_ref().map(Pile::cards),
            selection,
            won: board.is_won(),
        }
    }
}

impl Game {
    /// Returns a snapshot of the board and selection for drawing.
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(self.board(), self.selection())
    }
}

/// A front end that can draw a board.
pub trait Renderer {
    /// What drawing produces.
    type Output;

    /// Draws the board.
    fn draw(&mut self, view: &BoardView<'_>) -> Self::Output;
}

/// Renders the board as plain text.
///
/// Face-down cards show as `##`, empty slots as `--`, and the selected card
/// is wrapped in brackets.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    type Output = String;

    fn draw(&mut self, view: &BoardView<'_>) -> String {
        view.to_string()
    }
}

struct Slot<'a> {
    card: Option<&'a Card>,
    selected: bool,
}

impl fmt::Display for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = if self.selected { ('[', ']') } else { (' ', ' ') };
        match self.card {
            None => write!(f, "{open}--{close}"),
            Some(card) if card.is_face_up() => write!(f, "{open}{card}{close}"),
            Some(_) => write!(f, "{open}##{close}"),
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stock = Slot {
            card: self.stock_top,
            selected: false,
        };
        let waste = Slot {
            card: self.waste_top,
            selected: self.selection.is_waste(),
        };
        write!(f, "stock{stock}({:>2})  waste{waste}  foundations", self.stock_len)?;
        for card in self.foundations {
            write!(f, "{}", Slot { card, selected: false })?;
        }
        writeln!(f)?;

        for (index, pile) in self.tableau.iter().enumerate() {
            write!(f, "{index}:")?;
            if pile.is_empty() {
                write!(f, "{}", Slot { card: None, selected: false })?;
            }
            let selected = self.selection == Selection::Pile(index);
            for (position, card) in pile.iter().enumerate() {
                let slot = Slot {
                    card: Some(card),
                    selected: selected && position + 1 == pile.len(),
                };
                write!(f, "{slot}")?;
            }
            writeln!(f)?;
        }

        if self.won {
            writeln!(f, "all foundations complete")?;
        }
        Ok(())
    }
}
