//! Named actions as they arrive from the UI layer.
//!
//! The front-end speaks `{ "action": "swap", "payload": { ... } }`. Each
//! engine defines a typed action enum, adjacently tagged with the same two
//! keys, and `ActionRequest::decode` converts between the two:
//!
//! ```
//! use arcade_rules::core::ActionRequest;
//! use arcade_rules::games::twenty48::Game2048Action;
//! use arcade_rules::core::Direction;
//! use serde_json::json;
//!
//! let request = ActionRequest::new("move", json!({ "direction": "left" }));
//! let action: Game2048Action = request.decode().unwrap();
//! assert_eq!(action, Game2048Action::Move { direction: Direction::Left });
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{EngineError, Result};

/// Typed action enum that can be decoded from an `ActionRequest`.
pub trait NamedAction: DeserializeOwned {
    /// Every action name the enum accepts.
    const NAMES: &'static [&'static str];
}

/// An action name plus its untyped JSON payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: String,
    #[serde(default)]
    pub payload: Value,
}

impl ActionRequest {
    pub fn new(action: impl Into<String>, payload: Value) -> Self {
        Self {
            action: action.into(),
            payload,
        }
    }

    /// A request with no payload (`restart`, `keep_playing`, ...).
    pub fn bare(action: impl Into<String>) -> Self {
        Self::new(action, Value::Null)
    }

    /// Decode into a typed action.
    pub fn decode<A: NamedAction>(&self) -> Result<A> {
        if !A::NAMES.contains(&self.action.as_str()) {
            return Err(EngineError::UnknownAction(self.action.clone()));
        }

        let mut tagged = Map::new();
        tagged.insert("action".to_owned(), Value::String(self.action.clone()));
        if !is_empty_payload(&self.payload) {
            tagged.insert("payload".to_owned(), self.payload.clone());
        }

        serde_json::from_value(Value::Object(tagged)).map_err(|source| EngineError::InvalidPayload {
            action: self.action.clone(),
            source,
        })
    }
}

fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}
