//! Error handling for CabinetKit
//!
//! The derivation engine itself is infallible. Errors only arise at the
//! configuration boundary, where text is turned into closed enumerations
//! and lengths.
//!
//! Error types use `thiserror`.

use thiserror::Error;

/// Parse error type
///
/// Raised when configuration text does not name a known token or length.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Door position token outside the closed enumeration
    #[error("Unknown door position: {token}")]
    UnknownPosition {
        /// The rejected token.
        token: String,
    },

    /// Door type outside `solid`, `mirror`, `glass`
    #[error("Unknown door type: {value}")]
    UnknownDoorType {
        /// The rejected value.
        value: String,
    },

    /// Length text that is neither a decimal nor a fractional inch value
    #[error("Invalid length '{input}': {reason}")]
    InvalidLength {
        /// The text that failed to parse.
        input: String,
        /// Why it failed.
        reason: String,
    },
}
