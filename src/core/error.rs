use std::error::Error;
use std::fmt;

use wasm_bindgen::JsValue;

/// Everything the engine can report back to a caller.
///
/// Once a session is initialized the simulation step itself cannot fail;
/// these are all contract violations detected at the call site.
#[derive(Debug, Clone, PartialEq)]
pub enum LifeError {
    /// Coordinate outside `[0, columns) x [0, rows)`
    OutOfBounds {
        x: i32,
        y: i32,
        columns: u32,
        rows: u32,
    },
    /// Non-positive size/fps, or a board smaller than a single cell
    InvalidConfiguration(String),
    /// Config JSON that does not parse
    Config(String),
    /// Browser globals (`window`, `performance`) missing
    Host(String),
}

impl LifeError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        LifeError::InvalidConfiguration(msg.into())
    }
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeError::OutOfBounds { x, y, columns, rows } => write!(
                f,
                "cell ({x}, {y}) is outside the {columns}x{rows} grid"
            ),
            LifeError::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            LifeError::Config(msg) => write!(f, "config parse error: {msg}"),
            LifeError::Host(msg) => write!(f, "host unavailable: {msg}"),
        }
    }
}

impl Error for LifeError {}

impl From<serde_json::Error> for LifeError {
    fn from(err: serde_json::Error) -> Self {
        LifeError::Config(err.to_string())
    }
}

impl From<LifeError> for JsValue {
    fn from(err: LifeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
