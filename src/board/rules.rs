use crate::card::{ACE, Card, KING};
use crate::error::IndexError;

use super::Board;

/// Returns whether `card` may be placed on a foundation topped by `top`.
#[must_use]
pub fn fits_foundation(card: &Card, top: Option<&Card>) -> bool {
    match top {
        None => card.rank() == ACE,
        Some(top) => {
            top.suit() == card.suit() && top.rank().checked_add(1) == Some(card.rank())
        }
    }
}

/// Returns whether `card` may be placed on a tableau pile topped by `top`.
///
/// Empty piles take only Kings. Otherwise the top card must be face up, of
/// the opposite color and exactly one rank higher.
#[must_use]
pub fn fits_tableau(card: &Card, top: Option<&Card>) -> bool {
    match top {
        None => card.rank() == KING,
        Some(top) => {
            top.is_face_up()
                && card.rank().checked_add(1) == Some(top.rank())
                && card.is_red() != top.is_red()
        }
    }
}

impl Board {
    /// Returns whether `card` may be placed on the foundation at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a foundation index.
    pub fn can_place_on_foundation(&self, card: &Card, index: usize) -> Result<bool, IndexError> {
        Ok(fits_foundation(card, self.foundation(index)?.top()))
    }

    /// Returns whether `card` may be placed on the tableau pile at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a tableau pile index.
    pub fn can_place_on_tableau(&self, card: &Card, index: usize) -> Result<bool, IndexError> {
        Ok(fits_tableau(card, self.pile(index)?.top()))
    }
}
