//! Platform abstraction layer
//!
//! Startup failures of the browser glue. Everything past startup is
//! infallible.

use std::fmt;

/// Errors raised while wiring the game into the host page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// No global `window` (not running in a browser)
    MissingWindow,
    /// No canvas element with the given id
    MissingCanvas(String),
    /// Canvas exists but has no 2D context
    ContextUnavailable,
    /// Any other JS-side failure
    Js(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::MissingWindow => write!(f, "no window available"),
            PlatformError::MissingCanvas(id) => write!(f, "no canvas element with id '{}'", id),
            PlatformError::ContextUnavailable => write!(f, "canvas 2D context unavailable"),
            PlatformError::Js(msg) => write!(f, "javascript error: {}", msg),
        }
    }
}

impl std::error::Error for PlatformError {}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PlatformError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PlatformError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            PlatformError::MissingCanvas("pong".into()).to_string(),
            "no canvas element with id 'pong'"
        );
        assert_eq!(PlatformError::ContextUnavailable.to_string(), "canvas 2D context unavailable");
    }
}
