//! Card piles with stack discipline.

use alloc::vec::Vec;

use crate::card::Card;

/// An ordered pile of cards.
///
/// Cards are stored bottom to top: the last element is the top card, the
/// only one that [`push`](Self::push), [`pop`](Self::pop) and
/// [`top`](Self::top) touch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the top card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the top card mutably.
    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// Returns the cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards in the contiguous face-up run at the top.
    #[must_use]
    pub fn face_up_run_len(&self) -> usize {
        self.cards
            .iter()
            .rev()
            .take_while(|card| card.is_face_up())
            .count()
    }

    /// Returns the contiguous face-up run at the top, bottom to top.
    #[must_use]
    pub fn face_up_run(&self) -> &[Card] {
        &self.cards[self.cards.len() - self.face_up_run_len()..]
    }

    /// Removes and returns the contiguous face-up run at the top, bottom to top.
    pub fn take_face_up_run(&mut self) -> Vec<Card> {
        let start = self.cards.len() - self.face_up_run_len();
        self.cards.split_off(start)
    }

    /// Places a run of cards on top, keeping their order.
    pub fn extend_run(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
