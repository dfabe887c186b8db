//! Result envelope returned to callers, and the backend's response shapes.

use folio_content::is_truthy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Uniform outcome of every client call.
///
/// Serializes as `{"success": bool, "data": T | null, "error": string | null}`.
/// On failure `data` is always `None` and `error` carries a human-readable
/// message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> FetchResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// A successful call whose payload was `null` or otherwise empty.
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl FetchResult<Value> {
    /// Apply `normalize` to a successful, truthy payload.
    ///
    /// Failures pass through unchanged. A success whose payload is falsy
    /// (`null`, `0`, `""`, `false`) stays a success with no data.
    pub fn normalized_with<U>(self, normalize: impl FnOnce(&Value) -> U) -> FetchResult<U> {
        match &self.data {
            Some(data) if self.success && is_truthy(data) => FetchResult::ok(normalize(data)),
            _ => FetchResult {
                success: self.success,
                data: None,
                error: self.error,
            },
        }
    }
}

/// The shapes a backend response body may take.
///
/// [`ResponseEnvelope::classify`] checks `data`, then `results`, then
/// `items`; the first key holding a truthy value wins. Anything else,
/// including bare arrays and objects without those keys, is `Bare`.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope {
    /// `{"data": ...}`, the portfolio backend's own shape.
    Data(Value),
    /// `{"results": ...}`
    Results(Value),
    /// `{"items": ...}`
    Items(Value),
    /// The body is the payload.
    Bare(Value),
}

impl ResponseEnvelope {
    /// Envelope keys in precedence order.
    pub const PRECEDENCE: [&'static str; 3] = ["data", "results", "items"];

    pub fn classify(body: Value) -> Self {
        match body {
            Value::Object(mut map) => {
                let found = Self::PRECEDENCE
                    .iter()
                    .find_map(|key| take_truthy(&mut map, key).map(|payload| (*key, payload)));
                match found {
                    Some(("data", payload)) => Self::Data(payload),
                    Some(("results", payload)) => Self::Results(payload),
                    Some((_, payload)) => Self::Items(payload),
                    None => Self::Bare(Value::Object(map)),
                }
            }
            other => Self::Bare(other),
        }
    }

    /// The key the payload was found under, `None` for a bare body.
    pub fn source_key(&self) -> Option<&'static str> {
        match self {
            Self::Data(_) => Some("data"),
            Self::Results(_) => Some("results"),
            Self::Items(_) => Some("items"),
            Self::Bare(_) => None,
        }
    }

    pub fn into_payload(self) -> Value {
        match self {
            Self::Data(v) | Self::Results(v) | Self::Items(v) | Self::Bare(v) => v,
        }
    }
}

fn take_truthy(map: &mut Map<String, Value>, key: &str) -> Option<Value> {
    if map.get(key).is_some_and(is_truthy) {
        map.remove(key)
    } else {
        None
    }
}
