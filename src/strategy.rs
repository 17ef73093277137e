use serde::Serialize;

use crate::card::Rank;
use crate::hand::{is_blackjack, HandValue};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum Action {
    AwaitingInput,
    Bust,
    Blackjack,
    Stand,
    Hit,
    Double,
    Split,
    SurrenderOrHit,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::AwaitingInput => "Awaiting Cards...",
            Action::Bust => "Bust",
            Action::Blackjack => "Blackjack!",
            Action::Stand => "Stand",
            Action::Hit => "Hit",
            Action::Double => "Double Down",
            Action::Split => "Split",
            Action::SurrenderOrHit => "Surrender (or Hit)",
        }
    }

    /// Whether following the advice means drawing another card.
    pub fn needs_another_card(&self) -> bool {
        matches!(self, Action::Hit | Action::SurrenderOrHit)
    }
}

/// Dealer upcard value for threshold comparisons. The ace is valued high.
pub fn dealer_value(upcard: Rank) -> u8 {
    upcard.value()
}

/// Basic-strategy advice for a single hand against the dealer upcard.
///
/// Rules are checked in precedence order and the first match wins:
/// terminal totals, pair splits, two-card surrender, soft totals, then hard totals.
pub fn recommend(hand: HandValue, cards: &[Rank], dealer: Option<Rank>) -> Action {
    let Some(upcard) = dealer else {
        return Action::AwaitingInput;
    };
    if cards.len() < 2 {
        return Action::AwaitingInput;
    }
    if hand.total > 21 {
        return Action::Bust;
    }
    if hand.total == 21 {
        return if is_blackjack(cards) {
            Action::Blackjack
        } else {
            Action::Stand
        };
    }

    let dealer = dealer_value(upcard);
    let two_cards = cards.len() == 2;

    if let [first, second] = cards {
        let pair = first.strategy_rank();
        if pair == second.strategy_rank() && should_split(pair, dealer) {
            return Action::Split;
        }
        // hard 16 surrenders unless the first card is ten-valued; 10-6 vs 10 hits
        if !hand.is_soft && should_surrender(hand.total, pair, dealer) {
            return Action::SurrenderOrHit;
        }
    }

    if hand.is_soft {
        soft_total(hand.total, dealer)
    } else {
        hard_total(hand.total, dealer, two_cards)
    }
}

fn should_split(pair: Rank, dealer: u8) -> bool {
    match pair {
        Rank::Ace | Rank::Eight => true,
        Rank::Nine => dealer != 7 && dealer <= 9,
        Rank::Seven | Rank::Two | Rank::Three => dealer <= 7,
        Rank::Six => dealer <= 6,
        Rank::Four => dealer == 5 || dealer == 6,
        // tens and fives play as totals
        _ => false,
    }
}

// `first` is the first dealt card's pair rank, not a pair check.
fn should_surrender(total: u32, first: Rank, dealer: u8) -> bool {
    match total {
        16 => dealer >= 9 && first != Rank::Ten,
        15 => dealer == 10,
        _ => false,
    }
}

fn soft_total(total: u32, dealer: u8) -> Action {
    match total {
        t if t >= 19 => Action::Stand,
        18 if dealer <= 8 => Action::Stand,
        _ => Action::Hit,
    }
}

fn hard_total(total: u32, dealer: u8, two_cards: bool) -> Action {
    let double_or_hit = if two_cards { Action::Double } else { Action::Hit };
    match total {
        t if t >= 17 => Action::Stand,
        13..=16 if dealer <= 6 => Action::Stand,
        12 if (4..=6).contains(&dealer) => Action::Stand,
        11 => double_or_hit,
        10 if dealer <= 9 => double_or_hit,
        9 if (3..=6).contains(&dealer) => double_or_hit,
        _ => Action::Hit,
    }
}
