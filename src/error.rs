// Errors raised while building or binding a particle network.

use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// A configuration value is out of range.
    InvalidConfig(String),
    /// The drawing surface could not be prepared (e.g. no 2d context).
    Surface(String),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::InvalidConfig(msg) => write!(f, "Invalid network config: {}", msg),
            NetworkError::Surface(msg) => write!(f, "Drawing surface unavailable: {}", msg),
        }
    }
}

impl std::error::Error for NetworkError {}

impl From<NetworkError> for JsValue {
    fn from(e: NetworkError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
