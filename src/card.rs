//! Card types and deck utilities.

use core::fmt;

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in deck construction order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns whether the suit is red (diamonds or hearts).
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Diamonds | Self::Hearts)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Hearts => 'h',
            Self::Spades => 's',
        };
        write!(f, "{c}")
    }
}

/// Rank of an ace.
pub const ACE: u8 = 1;
/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
///
/// Rank and suit are fixed at construction; only the face-up flag changes
/// as the card moves around the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    rank: u8,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Creates a new face-down card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but never satisfy the placement rules.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Creates a new face-up card.
    #[must_use]
    pub const fn face_up(suit: Suit, rank: u8) -> Self {
        Self {
            rank,
            suit,
            face_up: true,
        }
    }

    /// Returns the rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether the card is red.
    #[must_use]
    pub const fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Turns the card face up.
    pub const fn turn_up(&mut self) {
        self.face_up = true;
    }

    /// Turns the card face down.
    pub const fn turn_down(&mut self) {
        self.face_up = false;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank {
            ACE => 'A',
            10 => 'T',
            JACK => 'J',
            QUEEN => 'Q',
            KING => 'K',
            r @ 2..=9 => char::from(b'0' + r),
            _ => '?',
        };
        write!(f, "{rank}{}", self.suit)
    }
}

/// Returns the 52 standard cards, face down, ordered by rank then suit.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for rank in ACE..=KING {
        for suit in Suit::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// Returns the 52 standard cards, face down, in a uniformly random order.
pub fn new_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = standard_deck();
    cards.shuffle(rng);
    cards
}
