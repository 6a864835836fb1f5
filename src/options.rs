//! Game configuration options.

/// Configuration options for a solitaire session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use klondike::GameOptions;
///
/// let options = GameOptions::default().with_clear_selection_on_rejected_move(false);
/// assert!(!options.clear_selection_on_rejected_move);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Whether an illegal pile-to-pile move clears the selection.
    ///
    /// When `false`, the source pile stays selected after the run is put back.
    pub clear_selection_on_rejected_move: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            clear_selection_on_rejected_move: true,
        }
    }
}

impl GameOptions {
    /// Sets whether an illegal pile-to-pile move clears the selection.
    ///
    /// # Example
    ///
    /// ```
    /// use klondike::GameOptions;
    ///
    /// let options = GameOptions::default().with_clear_selection_on_rejected_move(true);
    /// assert_eq!(options.clear_selection_on_rejected_move, true);
    /// ```
    #[must_use]
    pub const fn with_clear_selection_on_rejected_move(mut self, clear: bool) -> Self {
        self.clear_selection_on_rejected_move = clear;
        self
    }
}
