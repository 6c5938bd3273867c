//! Error taxonomy for calculator actions.
//!
//! Every failure is recoverable at the action boundary: the session
//! rejects the offending action and keeps its previous state, so the
//! display never shows corrupted text.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The display text could not be committed as a decimal operand.
    #[error("display is not a valid decimal: {0:?}")]
    ParseError(String),

    /// A button label or symbol outside the recognized action set.
    /// Covers the grid's dead buttons (`(`, `)`, `.`, `%`) as well as
    /// anything else a caller might feed the classifier.
    #[error("unsupported operator: {0:?}")]
    UnsupportedOperator(String),

    /// A digit action outside 0-9.
    #[error("digit out of range: {0}")]
    InvalidDigit(u8),
}
