use log::warn;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

pub mod card;
pub mod config;
pub mod counter;
pub mod error;
pub mod hand;
mod logger;
pub mod session;
pub mod strategy;

use card::Rank;
use config::AdvisorConfig;
use counter::Adjustment;
use error::AdvisorError;
use session::Session;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendInput {
    pub player_cards: Vec<Rank>,
    #[serde(default)]
    pub dealer_card: Option<Rank>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendOutput {
    pub action: strategy::Action,
    pub label: &'static str,
    pub needs_another_card: bool,
}

pub fn parse_rank(symbol: &str) -> Result<Rank, AdvisorError> {
    symbol.parse::<Rank>().map_err(|err| {
        warn!("rejected card input: {err}");
        err
    })
}

fn from_js<T: for<'de> Deserialize<'de>>(value: &JsValue) -> Result<T, AdvisorError> {
    serde_wasm_bindgen::from_value(value.clone())
        .map_err(|err| AdvisorError::InvalidInput(err.to_string()))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|err| AdvisorError::Serialization(err.to_string()).into())
}

#[wasm_bindgen]
pub fn card_options() -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    to_js(&Rank::ALL)
}

#[wasm_bindgen]
pub fn evaluate_hand(cards: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let cards: Vec<Rank> = from_js(cards)?;
    to_js(&hand::evaluate(&cards))
}

#[wasm_bindgen]
pub fn recommend_action(params: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input: RecommendInput = from_js(params)?;
    let action = strategy::recommend(
        hand::evaluate(&input.player_cards),
        &input.player_cards,
        input.dealer_card,
    );
    to_js(&RecommendOutput {
        action,
        label: action.label(),
        needs_another_card: action.needs_another_card(),
    })
}

#[wasm_bindgen]
pub fn rank_value(card: &str) -> Result<i32, JsValue> {
    Ok(counter::rank_value(parse_rank(card)?))
}

#[wasm_bindgen]
pub fn true_count(running_count: i32, decks_remaining: f64) -> f64 {
    counter::true_count(running_count, decks_remaining)
}

/// Stateful handle for the page. Every mutator returns the refreshed session view.
#[wasm_bindgen]
pub struct Advisor(Session);

#[wasm_bindgen]
impl Advisor {
    #[wasm_bindgen(constructor)]
    pub fn new(config: &JsValue) -> Result<Advisor, JsValue> {
        console_error_panic_hook::set_once();
        let config: AdvisorConfig = if config.is_undefined() || config.is_null() {
            AdvisorConfig::default()
        } else {
            from_js(config)?
        };
        logger::ConsoleLogger::install(config.level_filter()?);
        Ok(Advisor(Session::new(&config)))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.0.snapshot())
    }

    pub fn set_dealer_card(&mut self, card: &str) -> Result<JsValue, JsValue> {
        self.0.set_dealer_card(parse_rank(card)?);
        self.snapshot()
    }

    pub fn add_player_card(&mut self, card: &str) -> Result<JsValue, JsValue> {
        self.0.add_player_card(parse_rank(card)?);
        self.snapshot()
    }

    pub fn undo_player_card(&mut self) -> Result<JsValue, JsValue> {
        self.0.undo_player_card();
        self.snapshot()
    }

    /// `delta` is +1 for a low card seen at another seat, -1 for a high one.
    pub fn adjust_count(&mut self, delta: i32) -> Result<JsValue, JsValue> {
        let adjustment = Adjustment::try_from(delta).map_err(|err| {
            warn!("rejected count adjustment: {err}");
            err
        })?;
        self.0.adjust_count(adjustment);
        self.snapshot()
    }

    pub fn increase_decks(&mut self) -> Result<JsValue, JsValue> {
        self.0.increase_decks();
        self.snapshot()
    }

    pub fn decrease_decks(&mut self) -> Result<JsValue, JsValue> {
        self.0.decrease_decks();
        self.snapshot()
    }

    pub fn next_round(&mut self) -> Result<JsValue, JsValue> {
        self.0.next_round();
        self.snapshot()
    }

    pub fn reset_shoe(&mut self) -> Result<JsValue, JsValue> {
        self.0.reset_shoe();
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rank_reports_unknown_symbols() {
        assert_eq!(parse_rank("Q"), Ok(Rank::Queen));
        assert_eq!(parse_rank("11"), Err(AdvisorError::UnknownRank("11".to_string())));
    }

    #[test]
    fn recommend_input_uses_card_symbols() {
        let input: RecommendInput =
            serde_json::from_str(r#"{"playerCards":["8","8"],"dealerCard":"6"}"#).unwrap();
        let action = strategy::recommend(
            hand::evaluate(&input.player_cards),
            &input.player_cards,
            input.dealer_card,
        );
        assert_eq!(action, strategy::Action::Split);

        let waiting: RecommendInput = serde_json::from_str(r#"{"playerCards":["9","7"]}"#).unwrap();
        assert_eq!(waiting.dealer_card, None);
    }

    #[test]
    fn card_options_follow_picker_order() {
        let symbols = serde_json::to_value(Rank::ALL).unwrap();
        assert_eq!(
            symbols,
            serde_json::json!(["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"])
        );
    }

    #[test]
    fn recommend_output_wire_names() {
        let output = RecommendOutput {
            action: strategy::Action::SurrenderOrHit,
            label: strategy::Action::SurrenderOrHit.label(),
            needs_another_card: true,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["action"], "SurrenderOrHit");
        assert_eq!(json["label"], "Surrender (or Hit)");
        assert_eq!(json["needsAnotherCard"], true);
    }
}
