use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("unknown card rank: {0:?}")]
    UnknownRank(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<AdvisorError> for wasm_bindgen::JsValue {
    fn from(err: AdvisorError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
