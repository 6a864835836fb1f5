use crate::card::Card;
use crate::error::IndexError;
use crate::result::Outcome;

use super::{Game, Selection, Zone};

impl Game {
    fn record(&mut self, zone: Zone) {
        self.activations = self.activations.saturating_add(1);
        log::trace!("activated {zone:?} with {:?} selected", self.selection);
    }

    fn select(&mut self, selection: Selection) -> Outcome {
        self.selection = selection;
        log::debug!("selected {selection:?}");
        Outcome::Selected(selection)
    }

    fn deselect(&mut self) -> Outcome {
        self.selection = Selection::None;
        log::debug!("cleared selection");
        Outcome::Deselected
    }

    fn finish_move(&mut self, from: Zone, to: Zone, cards: usize) -> Outcome {
        self.selection = Selection::None;
        if self.board.is_won() {
            log::info!("all foundations complete after {} activations", self.activations);
        }
        Outcome::Moved { from, to, cards }
    }

    /// Dispatches an activation of `zone` to the matching command.
    ///
    /// # Errors
    ///
    /// Returns an error if the zone carries an out-of-range index.
    pub fn activate(&mut self, zone: Zone) -> Result<Outcome, IndexError> {
        match zone {
            Zone::Stock => Ok(self.stock_activated()),
            Zone::Waste => Ok(self.waste_activated()),
            Zone::Foundation(index) => self.foundation_activated(index),
            Zone::Tableau(index) => self.pile_activated(index),
        }
    }

    /// Handles an activation of the stock.
    ///
    /// With nothing selected, draws up to three cards onto the waste, or turns
    /// the waste back into the stock once the stock is empty. Ignored while
    /// anything is selected.
    pub fn stock_activated(&mut self) -> Outcome {
        self.record(Zone::Stock);
        if self.selection != Selection::None {
            return Outcome::Ignored;
        }

        match self.board.draw_from_stock() {
            0 => match self.board.reset_stock() {
                0 => Outcome::Ignored,
                recycled => Outcome::Recycled(recycled),
            },
            drawn => Outcome::Drew(drawn),
        }
    }

    /// Handles an activation of the waste.
    ///
    /// Picks up the top waste card when nothing is selected, or puts it back
    /// down when the waste is already selected.
    pub fn waste_activated(&mut self) -> Outcome {
        self.record(Zone::Waste);
        match self.selection {
            Selection::None if !self.board.waste().is_empty() => self.select(Selection::Waste),
            Selection::Waste => self.deselect(),
            _ => Outcome::Ignored,
        }
    }

    /// Handles an activation of the foundation at `index`.
    ///
    /// Moves the selected card (top of the waste or of the selected pile) onto
    /// the foundation if the rules allow it, clearing the selection. Otherwise
    /// nothing changes.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a foundation index.
    pub fn foundation_activated(&mut self, index: usize) -> Result<Outcome, IndexError> {
        self.board.foundation(index)?;
        self.record(Zone::Foundation(index));

        let (from, moved) = match self.selection {
            Selection::Waste => (Zone::Waste, self.board.move_waste_to_foundation(index)?),
            Selection::Pile(pile) => (
                Zone::Tableau(pile),
                self.board.move_tableau_to_foundation(pile, index)?,
            ),
            Selection::None => return Ok(Outcome::Ignored),
        };

        if !moved {
            return Ok(Outcome::Ignored);
        }
        Ok(self.finish_move(from, Zone::Foundation(index), 1))
    }

    /// Handles an activation of the tableau pile at `index`.
    ///
    /// - With nothing selected, picks up the pile if its top card is face up,
    ///   or turns the top card up if it is face down.
    /// - With the same pile selected, puts it back down.
    /// - With another pile selected, moves that pile's face-up run here if
    ///   its bottom card fits. An illegal move leaves both piles unchanged and
    ///   clears the selection unless
    ///   [`GameOptions::clear_selection_on_rejected_move`](crate::GameOptions::clear_selection_on_rejected_move)
    ///   is off.
    /// - With the waste selected, moves the top waste card here if it fits.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a tableau pile index.
    pub fn pile_activated(&mut self, index: usize) -> Result<Outcome, IndexError> {
        let top_face_up = self.board.pile(index)?.top().map(Card::is_face_up);
        self.record(Zone::Tableau(index));

        match self.selection {
            Selection::Pile(selected) if selected == index => Ok(self.deselect()),
            Selection::Pile(selected) => match self.board.move_run(selected, index)? {
                0 => {
                    if self.options.clear_selection_on_rejected_move {
                        self.selection = Selection::None;
                    }
                    log::debug!("rejected move from pile {selected} to pile {index}");
                    Ok(Outcome::Rejected)
                }
                moved => {
                    let to = Zone::Tableau(index);
                    Ok(self.finish_move(Zone::Tableau(selected), to, moved))
                }
            },
            Selection::Waste => {
                if self.board.move_waste_to_tableau(index)? {
                    Ok(self.finish_move(Zone::Waste, Zone::Tableau(index), 1))
                } else {
                    Ok(Outcome::Ignored)
                }
            }
            Selection::None => match top_face_up {
                Some(true) => Ok(self.select(Selection::Pile(index))),
                Some(false) => {
                    self.board.flip_tableau_top(index)?;
                    Ok(Outcome::Flipped(index))
                }
                None => Ok(Outcome::Ignored),
            },
        }
    }
}
