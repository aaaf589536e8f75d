use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A flavor-text card from the side deck. In JSON, just a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChanceCard {
    pub text: String,
}

/// A shuffled deck of chance cards, revealed one at a time.
///
/// Independent of the board; drawing a card never affects the game.
#[derive(Clone, Debug)]
pub struct ChanceDeck {
    cards: Vec<ChanceCard>,
    // Cards before this index have been drawn.
    next: usize,
}

impl ChanceDeck {
    pub fn shuffled<R: Rng + ?Sized>(mut cards: Vec<ChanceCard>, rng: &mut R) -> Self {
        cards.shuffle(rng);
        Self { cards, next: 0 }
    }

    /// Reveals the next card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<&ChanceCard> {
        let card = self.cards.get(self.next)?;
        self.next += 1;
        Some(card)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Puts all cards back and shuffles them again.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.next = 0;
    }
}
