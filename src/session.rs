use log::debug;
use serde::Serialize;

use crate::{
    card::Rank,
    config::AdvisorConfig,
    counter::{Adjustment, CardCounter, CountTrend},
    hand::Hand,
    strategy::{recommend, Action},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub player_cards: Vec<Rank>,
    pub dealer_card: Option<Rank>,
    pub total: u32,
    pub is_soft: bool,
    pub advice: Action,
    pub advice_label: String,
    pub needs_another_card: bool,
    pub running_count: i32,
    pub decks_remaining: f64,
    pub true_count: f64,
    pub count_trend: CountTrend,
}

/// Table state for one seat: the current round plus the shoe-wide count.
pub struct Session {
    hand: Hand,
    dealer: Option<Rank>,
    counter: CardCounter,
    favorable_at: f64,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(&AdvisorConfig::default())
    }
}

impl Session {
    pub fn new(config: &AdvisorConfig) -> Self {
        Session {
            hand: Hand::new(),
            dealer: None,
            counter: CardCounter::new(),
            favorable_at: config.favorable_true_count,
        }
    }

    /// Replaces the dealer upcard, retracting the previous card from the count first.
    pub fn set_dealer_card(&mut self, card: Rank) {
        if let Some(previous) = self.dealer.replace(card) {
            self.counter.remove_card(previous);
        }
        let running = self.counter.add_card(card);
        debug!("dealer upcard {card}, running count {running}");
    }

    pub fn add_player_card(&mut self, card: Rank) {
        self.hand.push(card);
        let running = self.counter.add_card(card);
        debug!("player card {card}, running count {running}");
    }

    pub fn undo_player_card(&mut self) -> Option<Rank> {
        let card = self.hand.undo_last()?;
        let running = self.counter.remove_card(card);
        debug!("undid player card {card}, running count {running}");
        Some(card)
    }

    pub fn adjust_count(&mut self, adjustment: Adjustment) {
        let running = self.counter.manual_adjust(adjustment);
        debug!("manual {adjustment:?} adjustment, running count {running}");
    }

    pub fn increase_decks(&mut self) {
        let decks = self.counter.increase_decks();
        debug!("decks remaining {decks}");
    }

    pub fn decrease_decks(&mut self) {
        let decks = self.counter.decrease_decks();
        debug!("decks remaining {decks}");
    }

    /// Clears the cards on the table. The count belongs to the shoe and is kept.
    pub fn next_round(&mut self) {
        self.hand.clear();
        self.dealer = None;
        debug!("next round, running count {}", self.counter.running_count());
    }

    pub fn reset_shoe(&mut self) {
        self.hand.clear();
        self.dealer = None;
        self.counter.reset();
        debug!("shoe reset");
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn dealer_card(&self) -> Option<Rank> {
        self.dealer
    }

    pub fn counter(&self) -> &CardCounter {
        &self.counter
    }

    pub fn advice(&self) -> Action {
        recommend(self.hand.value(), self.hand.cards(), self.dealer)
    }

    pub fn snapshot(&self) -> SessionView {
        let value = self.hand.value();
        let advice = self.advice();
        let true_count = self.counter.true_count();
        SessionView {
            player_cards: self.hand.cards().to_vec(),
            dealer_card: self.dealer,
            total: value.total,
            is_soft: value.is_soft,
            advice,
            advice_label: advice.label().to_string(),
            needs_another_card: advice.needs_another_card(),
            running_count: self.counter.running_count(),
            decks_remaining: self.counter.decks_remaining(),
            true_count,
            count_trend: CountTrend::classify(true_count, self.favorable_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn replacing_dealer_card_retracts_previous_tag() {
        let mut session = Session::default();
        session.set_dealer_card(King);
        assert_eq!(session.counter().running_count(), -1);
        session.set_dealer_card(Five);
        assert_eq!(session.counter().running_count(), 1);
        assert_eq!(session.dealer_card(), Some(Five));
    }

    #[test]
    fn advice_follows_the_table() {
        let mut session = Session::default();
        session.add_player_card(Nine);
        assert_eq!(session.advice(), Action::AwaitingInput);
        session.set_dealer_card(Ten);
        assert_eq!(session.advice(), Action::AwaitingInput);
        session.add_player_card(Seven);
        assert_eq!(session.advice(), Action::SurrenderOrHit);
        session.add_player_card(Two);
        assert_eq!(session.advice(), Action::Stand);
        session.add_player_card(King);
        assert_eq!(session.advice(), Action::Bust);
    }

    #[test]
    fn undo_restores_hand_and_count() {
        let mut session = Session::default();
        assert_eq!(session.undo_player_card(), None);
        session.add_player_card(Five);
        session.add_player_card(King);
        session.add_player_card(Seven);
        assert_eq!(session.undo_player_card(), Some(Seven));
        assert_eq!(session.hand().cards(), &[Five, King]);
        assert_eq!(session.counter().running_count(), 0);
    }

    #[test]
    fn next_round_keeps_the_count() {
        let mut session = Session::default();
        session.set_dealer_card(Four);
        session.add_player_card(Two);
        session.add_player_card(Three);
        session.decrease_decks();
        session.next_round();
        assert!(session.hand().is_empty());
        assert_eq!(session.dealer_card(), None);
        assert_eq!(session.counter().running_count(), 3);
        assert_eq!(session.counter().decks_remaining(), 5.5);
    }

    #[test]
    fn reset_shoe_clears_everything() {
        let mut session = Session::default();
        session.set_dealer_card(Four);
        session.add_player_card(Two);
        session.adjust_count(Adjustment::Low);
        session.increase_decks();
        session.reset_shoe();
        assert!(session.hand().is_empty());
        assert_eq!(session.dealer_card(), None);
        assert_eq!(session.counter().running_count(), 0);
        assert_eq!(session.counter().decks_remaining(), 6.0);
    }

    #[test]
    fn snapshot_reports_count_and_advice() {
        let mut session = Session::default();
        for _ in 0..6 {
            session.adjust_count(Adjustment::Low);
        }
        for _ in 0..6 {
            session.decrease_decks();
        }
        session.set_dealer_card(Two);
        session.add_player_card(Five);
        session.add_player_card(Six);

        let view = session.snapshot();
        assert_eq!(view.player_cards, vec![Five, Six]);
        assert_eq!(view.total, 11);
        assert!(!view.is_soft);
        assert_eq!(view.advice, Action::Double);
        assert_eq!(view.advice_label, "Double Down");
        assert!(!view.needs_another_card);
        assert_eq!(view.running_count, 9);
        assert_eq!(view.decks_remaining, 3.0);
        assert_eq!(view.true_count, 3.0);
        assert_eq!(view.count_trend, CountTrend::Favorable);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["dealerCard"], "2");
        assert_eq!(json["advice"], "Double");
        assert_eq!(json["countTrend"], "Favorable");
    }
}
