use serde::Serialize;

use crate::card::Rank;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandValue {
    pub total: u32,
    pub is_soft: bool,
}

/// Totals a hand, demoting aces from 11 to 1 one at a time while the hand is over 21.
/// A total above 21 after every ace is demoted is a bust, not an error.
pub fn evaluate(cards: &[Rank]) -> HandValue {
    let mut total = 0u32;
    let mut aces = 0u32;

    for &card in cards {
        total += u32::from(card.value());
        if card == Rank::Ace {
            aces += 1;
        }
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    HandValue {
        total,
        is_soft: aces > 0,
    }
}

pub fn is_blackjack(cards: &[Rank]) -> bool {
    cards.len() == 2 && evaluate(cards).total == 21
}

/// Player cards in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Rank>,
}

impl Hand {
    pub fn new() -> Self {
        Hand::default()
    }

    pub fn push(&mut self, card: Rank) {
        self.cards.push(card);
    }

    /// Removes the most recently dealt card.
    pub fn undo_last(&mut self) -> Option<Rank> {
        self.cards.pop()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> HandValue {
        evaluate(&self.cards)
    }
}
