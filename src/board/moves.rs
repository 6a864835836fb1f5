use crate::error::IndexError;

use super::Board;
use super::rules::{fits_foundation, fits_tableau};

impl Board {
    /// Moves the top waste card onto a foundation if the rules allow it.
    ///
    /// Returns whether the card moved.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a foundation index.
    pub fn move_waste_to_foundation(&mut self, index: usize) -> Result<bool, IndexError> {
        let target = self.foundation(index)?;
        if !self
            .waste
            .top()
            .is_some_and(|card| fits_foundation(card, target.top()))
        {
            return Ok(false);
        }

        if let Some(card) = self.waste.pop() {
            log::debug!("moved {card} from waste to foundation {index}");
            self.foundation_mut(index)?.push(card);
        }
        Ok(true)
    }

    /// Moves the top card of a tableau pile onto a foundation if the rules
    /// allow it.
    ///
    /// Returns whether the card moved.
    ///
    /// # Errors
    ///
    /// Returns an error if `pile` is not a tableau pile index or `index` is
    /// not a foundation index.
    pub fn move_tableau_to_foundation(
        &mut self,
        pile: usize,
        index: usize,
    ) -> Result<bool, IndexError> {
        let source = self.pile(pile)?;
        let target = self.foundation(index)?;
        if !source
            .top()
            .is_some_and(|card| card.is_face_up() && fits_foundation(card, target.top()))
        {
            return Ok(false);
        }

        if let Some(card) = self.pile_mut(pile)?.pop() {
            log::debug!("moved {card} from pile {pile} to foundation {index}");
            self.foundation_mut(index)?.push(card);
        }
        Ok(true)
    }

    /// Moves the top waste card onto a tableau pile if the rules allow it.
    ///
    /// Returns whether the card moved.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a tableau pile index.
    pub fn move_waste_to_tableau(&mut self, index: usize) -> Result<bool, IndexError> {
        let target = self.pile(index)?;
        if !self
            .waste
            .top()
            .is_some_and(|card| fits_tableau(card, target.top()))
        {
            return Ok(false);
        }

        if let Some(card) = self.waste.pop() {
            log::debug!("moved {card} from waste to pile {index}");
            self.pile_mut(index)?.push(card);
        }
        Ok(true)
    }

    /// Moves the whole face-up run of one tableau pile onto another.
    ///
    /// The move is legal when the bottom card of the run fits on the target
    /// pile. The run keeps its order. Returns the number of cards moved, zero
    /// when the move is illegal, the source has no face-up run, or both
    /// indices name the same pile.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is not a tableau pile index.
    pub fn move_run(&mut self, from: usize, to: usize) -> Result<usize, IndexError> {
        let source = self.pile(from)?;
        let target = self.pile(to)?;
        if from == to
            || !source
                .face_up_run()
                .first()
                .is_some_and(|bottom| fits_tableau(bottom, target.top()))
        {
            return Ok(0);
        }

        let run = self.pile_mut(from)?.take_face_up_run();
        let moved = run.len();
        self.pile_mut(to)?.extend_run(run);
        log::debug!("moved {moved} card(s) from pile {from} to pile {to}");
        Ok(moved)
    }

    /// Turns up the top card of a tableau pile if it is face down.
    ///
    /// Returns whether a card was turned.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a tableau pile index.
    pub fn flip_tableau_top(&mut self, index: usize) -> Result<bool, IndexError> {
        let Some(card) = self.pile_mut(index)?.top_mut() else {
            return Ok(false);
        };
        if card.is_face_up() {
            return Ok(false);
        }

        card.turn_up();
        log::debug!("turned up {card} on pile {index}");
        Ok(true)
    }
}
