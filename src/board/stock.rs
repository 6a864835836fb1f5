use super::{Board, DRAW_COUNT};

impl Board {
    /// Moves up to three cards from the stock to the waste, turning each up.
    ///
    /// The last card moved ends up on top of the waste. Returns the number of
    /// cards moved, which is zero when the stock is empty.
    pub fn draw_from_stock(&mut self) -> usize {
        let mut drawn = 0;
        while drawn < DRAW_COUNT {
            let Some(mut card) = self.stock.pop() else {
                break;
            };
            card.turn_up();
            self.waste.push(card);
            drawn += 1;
        }

        if drawn > 0 {
            log::debug!("drew {drawn} card(s), {} left in stock", self.stock.len());
        }
        drawn
    }

    /// Turns the waste back over into the stock.
    ///
    /// Only applies once the stock is empty: cards are popped from the waste
    /// and pushed onto the stock face down, so the waste's top card ends up at
    /// the bottom of the stock. Returns the number of cards moved, which is
    /// zero when the stock is not empty or the waste is.
    pub fn reset_stock(&mut self) -> usize {
        if !self.stock.is_empty() {
            return 0;
        }

        let mut moved = 0;
        while let Some(mut card) = self.waste.pop() {
            card.turn_down();
            self.stock.push(card);
            moved += 1;
        }

        if moved > 0 {
            log::debug!("recycled {moved} card(s) from waste to stock");
        }
        moved
    }
}
