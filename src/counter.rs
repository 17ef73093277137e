use serde::Serialize;

use crate::{card::Rank, error::AdvisorError};

/// Deck estimate restored by a shoe reset.
pub const DEFAULT_DECKS: f64 = 6.0;
/// The deck estimate never drops below half a deck.
pub const MIN_HALF_DECKS: u32 = 1;
/// True count at or above which the shoe is reported as favorable.
pub const FAVORABLE_TRUE_COUNT: f64 = 2.0;

const DEFAULT_HALF_DECKS: u32 = 12;

/// Hi-Lo tag for a single card.
pub fn rank_value(card: Rank) -> i32 {
    match card {
        Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
        Rank::Seven | Rank::Eight | Rank::Nine => 0,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1,
    }
}

/// Running count per deck remaining, rounded half up to one decimal.
pub fn true_count(running_count: i32, decks_remaining: f64) -> f64 {
    if decks_remaining <= 0.0 {
        return 0.0;
    }
    let tenths = (f64::from(running_count) / decks_remaining * 10.0 + 0.5).floor();
    tenths / 10.0
}

/// A rank-anonymous card seen in another player's hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Adjustment {
    /// A 2 through 6 was seen.
    Low,
    /// A ten-valued card or an ace was seen.
    High,
}

impl Adjustment {
    pub fn delta(self) -> i32 {
        match self {
            Adjustment::Low => 1,
            Adjustment::High => -1,
        }
    }
}

impl TryFrom<i32> for Adjustment {
    type Error = AdvisorError;

    fn try_from(delta: i32) -> Result<Self, Self::Error> {
        match delta {
            1 => Ok(Adjustment::Low),
            -1 => Ok(Adjustment::High),
            other => Err(AdvisorError::InvalidInput(format!(
                "count adjustment must be +1 or -1, got {other}"
            ))),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum CountTrend {
    Favorable,
    Neutral,
    Unfavorable,
}

impl CountTrend {
    pub fn classify(true_count: f64, favorable_at: f64) -> CountTrend {
        if true_count >= favorable_at {
            CountTrend::Favorable
        } else if true_count < 0.0 {
            CountTrend::Unfavorable
        } else {
            CountTrend::Neutral
        }
    }
}

/// Shoe-scoped Hi-Lo state. Survives rounds; only a shoe reset clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardCounter {
    running_count: i32,
    half_decks: u32,
}

impl Default for CardCounter {
    fn default() -> Self {
        CardCounter::new()
    }
}

impl CardCounter {
    pub fn new() -> Self {
        CardCounter {
            running_count: 0,
            half_decks: DEFAULT_HALF_DECKS,
        }
    }

    pub fn add_card(&mut self, card: Rank) -> i32 {
        self.running_count += rank_value(card);
        self.running_count
    }

    pub fn remove_card(&mut self, card: Rank) -> i32 {
        self.running_count -= rank_value(card);
        self.running_count
    }

    pub fn manual_adjust(&mut self, adjustment: Adjustment) -> i32 {
        self.running_count += adjustment.delta();
        self.running_count
    }

    pub fn increase_decks(&mut self) -> f64 {
        self.half_decks = self.half_decks.saturating_add(1);
        self.decks_remaining()
    }

    pub fn decrease_decks(&mut self) -> f64 {
        self.half_decks = self.half_decks.saturating_sub(1).max(MIN_HALF_DECKS);
        self.decks_remaining()
    }

    pub fn reset(&mut self) {
        *self = CardCounter::new();
    }

    pub fn running_count(&self) -> i32 {
        self.running_count
    }

    pub fn decks_remaining(&self) -> f64 {
        f64::from(self.half_decks) / 2.0
    }

    pub fn true_count(&self) -> f64 {
        true_count(self.running_count, self.decks_remaining())
    }
}
