//! Selection and zone types.

/// The zone currently picked up by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Nothing is picked up.
    #[default]
    None,
    /// The top waste card is picked up.
    Waste,
    /// The face-up run of a tableau pile is picked up.
    Pile(usize),
}

impl Selection {
    /// Returns whether the waste is selected.
    #[must_use]
    pub const fn is_waste(&self) -> bool {
        matches!(self, Self::Waste)
    }

    /// Returns whether a tableau pile is selected.
    #[must_use]
    pub const fn is_pile(&self) -> bool {
        matches!(self, Self::Pile(_))
    }

    /// Returns the selected tableau pile index.
    #[must_use]
    pub const fn pile(&self) -> Option<usize> {
        match self {
            Self::Pile(index) => Some(*index),
            _ => None,
        }
    }
}

/// A region of the board the player can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    /// The draw pile.
    Stock,
    /// The discard pile.
    Waste,
    /// A foundation, by index (0..4).
    Foundation(usize),
    /// A tableau pile, by index (0..7).
    Tableau(usize),
}
