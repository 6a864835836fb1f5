//! Error types for board operations.

use thiserror::Error;

/// An index outside the board's foundations or tableau piles.
///
/// This signals a caller bug rather than an illegal move: illegal moves
/// leave the board unchanged and are reported through
/// [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Foundation index outside 0..4.
    #[error("foundation index {0} out of range (expected 0..4)")]
    Foundation(usize),
    /// Tableau pile index outside 0..7.
    #[error("tableau pile index {0} out of range (expected 0..7)")]
    Pile(usize),
}
