//! Activation outcome types.

use crate::game::state::{Selection, Zone};

/// What a single activation did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Cards were drawn from the stock onto the waste.
    Drew(usize),
    /// The waste was turned back over into the stock.
    Recycled(usize),
    /// A zone was picked up.
    Selected(Selection),
    /// The selection was cleared without moving anything.
    Deselected,
    /// Cards moved between zones.
    Moved {
        /// Where the cards came from.
        from: Zone,
        /// Where the cards went.
        to: Zone,
        /// How many cards moved.
        cards: usize,
    },
    /// The face-down top card of a tableau pile was turned up.
    Flipped(usize),
    /// An illegal pile-to-pile move was attempted and the run put back.
    Rejected,
    /// Nothing changed.
    Ignored,
}

impl Outcome {
    /// Returns whether cards changed place or orientation.
    #[must_use]
    pub const fn changed_board(&self) -> bool {
        matches!(
            self,
            Self::Drew(_) | Self::Recycled(_) | Self::Moved { .. } | Self::Flipped(_)
        )
    }
}
