//! Calculator session state machine.
//!
//! A [`Session`] owns the display text, the pending binary operation,
//! and the two operands. Button presses arrive as [`Action`] values;
//! [`Action::classify`] turns raw button labels into actions once, at
//! the input boundary, so the session never sees a label it does not
//! understand.
//!
//! Two conceptual states: no operation pending (digits accumulate
//! into the display) and operation pending (digits accumulate into
//! what will become the second operand). Pressing an operator while
//! one is pending resolves the prior computation first, strictly
//! left to right — `2 + 3 * 4` is `(2+3)*4`, not `2+(3*4)`.
//!
//! When a chained operator resolves, the display shows the
//! intermediate result only as staging: the next digit replaces it
//! and starts the second operand fresh. After equals, digits extend
//! the displayed result directly.

use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};

use crate::error::CalcError;
use crate::eval::evaluate;

/// The four binary operations the calculator performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Map a button symbol to its operation.
    pub fn from_symbol(sym: char) -> Option<Operation> {
        match sym {
            '+' => Some(Operation::Add),
            '-' => Some(Operation::Subtract),
            '*' => Some(Operation::Multiply),
            '/' => Some(Operation::Divide),
            _ => None,
        }
    }

    /// The button symbol for this operation.
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }
}

/// A classified user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Digit(u8),
    Operator(Operation),
    Clear,
    Equals,
}

impl Action {
    /// Classify a button label.
    ///
    /// The grid carries `(`, `)`, `.`, and `%` buttons with no
    /// evaluation semantics; they are rejected here instead of
    /// falling through to the operator path.
    pub fn classify(label: &str) -> Result<Action, CalcError> {
        if label == "C" {
            return Ok(Action::Clear);
        }
        if label == "=" {
            return Ok(Action::Equals);
        }
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => Ok(Action::Digit(c as u8 - b'0')),
            (Some(c), None) => Operation::from_symbol(c)
                .map(Action::Operator)
                .ok_or_else(|| CalcError::UnsupportedOperator(label.to_string())),
            _ => Err(CalcError::UnsupportedOperator(label.to_string())),
        }
    }
}

/// The one stateful entity. Created with defaults, mutated only by
/// [`Session::apply`], reset by [`Action::Clear`].
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    display: String,
    pending: Option<Operation>,
    first: BigDecimal,
    second: BigDecimal,
    /// Set when a chained operator just resolved: the display holds
    /// an intermediate result and the next digit replaces it.
    awaiting_operand: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            first: BigDecimal::zero(),
            second: BigDecimal::zero(),
            awaiting_operand: false,
        }
    }

    /// The text currently shown. Re-read after every action.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The operation awaiting its second operand, if any.
    pub fn pending(&self) -> Option<Operation> {
        self.pending
    }

    /// Apply one action. On `Err` the session is left unchanged.
    pub fn apply(&mut self, action: Action) -> Result<(), CalcError> {
        match action {
            Action::Digit(d) => self.press_digit(d),
            Action::Operator(op) => self.press_operator(op),
            Action::Equals => self.press_equals(),
            Action::Clear => {
                self.clear();
                Ok(())
            }
        }
    }

    /// Append a digit, replacing a bare `"0"` so no leading zero is
    /// ever retained. No length bound. A digit following a chained
    /// resolve replaces the intermediate result instead of extending
    /// it.
    fn press_digit(&mut self, d: u8) -> Result<(), CalcError> {
        if d > 9 {
            return Err(CalcError::InvalidDigit(d));
        }
        let digit = char::from(b'0' + d);
        if self.awaiting_operand {
            self.display = digit.to_string();
            self.awaiting_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
        Ok(())
    }

    fn press_operator(&mut self, op: Operation) -> Result<(), CalcError> {
        match self.pending {
            None => {
                self.first = parse_decimal(&self.display)?;
                self.pending = Some(op);
                self.display = "0".to_string();
                self.awaiting_operand = false;
            }
            Some(pending) => {
                let second = parse_decimal(&self.display)?;
                let result = evaluate(&self.first, &second, pending);
                let shown = result.to_string();
                // Re-parse the displayed string so chained steps see
                // exactly what the user sees.
                self.first = parse_decimal(&shown)?;
                self.second = second;
                self.display = shown;
                self.pending = Some(op);
                self.awaiting_operand = true;
            }
        }
        Ok(())
    }

    fn press_equals(&mut self) -> Result<(), CalcError> {
        let Some(pending) = self.pending else {
            return Ok(());
        };
        let second = parse_decimal(&self.display)?;
        let result = evaluate(&self.first, &second, pending);
        self.display = result.to_string();
        self.second = second;
        self.pending = None;
        // digits extend a final result; only chained intermediates
        // are replaced
        self.awaiting_operand = false;
        Ok(())
    }

    fn clear(&mut self) {
        self.display = "0".to_string();
        self.pending = None;
        self.first = BigDecimal::zero();
        self.second = BigDecimal::zero();
        self.awaiting_operand = false;
    }
}

fn parse_decimal(text: &str) -> Result<BigDecimal, CalcError> {
    BigDecimal::from_str(text).map_err(|_| CalcError::ParseError(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(session: &mut Session, labels: &[&str]) {
        for label in labels {
            let action = Action::classify(label).unwrap();
            session.apply(action).unwrap();
        }
    }

    fn run(labels: &[&str]) -> Session {
        let mut session = Session::new();
        press(&mut session, labels);
        session
    }

    #[test]
    fn test_starts_at_zero() {
        let session = Session::new();
        assert_eq!(session.display(), "0");
        assert_eq!(session.pending(), None);
    }

    #[test]
    fn test_digit_accumulation() {
        assert_eq!(run(&["1", "2", "3"]).display(), "123");
    }

    #[test]
    fn test_no_leading_zero_retained() {
        assert_eq!(run(&["0", "5"]).display(), "5");
        assert_eq!(run(&["0", "0", "7"]).display(), "7");
    }

    #[test]
    fn test_operator_starts_new_entry() {
        let session = run(&["7", "+"]);
        assert_eq!(session.display(), "0");
        assert_eq!(session.pending(), Some(Operation::Add));
    }

    #[test]
    fn test_add_scenario() {
        // 12 + 8 = 20
        assert_eq!(run(&["1", "2", "+", "8", "="]).display(), "20");
    }

    #[test]
    fn test_chained_operators_resolve_left_to_right() {
        // 2 + 3 * 4 = (2+3)*4 = 20, no precedence
        assert_eq!(run(&["2", "+", "3", "*", "4", "="]).display(), "20");
    }

    #[test]
    fn test_chained_operator_shows_intermediate_result() {
        let session = run(&["2", "+", "3", "*"]);
        assert_eq!(session.display(), "5");
        assert_eq!(session.pending(), Some(Operation::Multiply));
    }

    #[test]
    fn test_digit_after_chained_resolve_starts_fresh() {
        // the intermediate "5" is staging only; 4 replaces it
        let session = run(&["2", "+", "3", "*", "4"]);
        assert_eq!(session.display(), "4");
        assert_eq!(session.pending(), Some(Operation::Multiply));
    }

    #[test]
    fn test_operator_pair_then_digit_replaces() {
        // "+" then "*" resolves 2+0=2; the next digit starts fresh
        let session = run(&["2", "+", "*", "3"]);
        assert_eq!(session.display(), "3");
        assert_eq!(run(&["2", "+", "*", "3", "="]).display(), "6");
    }

    #[test]
    fn test_divide_by_zero_sentinel() {
        // 5 / 0 = 0, never an error
        assert_eq!(run(&["5", "/", "0", "="]).display(), "0");
    }

    #[test]
    fn test_divide_scale() {
        assert_eq!(run(&["5", "/", "2", "="]).display(), "2.5");
    }

    #[test]
    fn test_subtraction_goes_negative() {
        assert_eq!(run(&["1", "-", "3", "="]).display(), "-2");
    }

    #[test]
    fn test_equals_is_idempotent() {
        let mut session = run(&["1", "+", "2", "="]);
        assert_eq!(session.display(), "3");
        session.apply(Action::Equals).unwrap();
        assert_eq!(session.display(), "3");
        assert_eq!(session.pending(), None);
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let mut session = run(&["4", "2"]);
        session.apply(Action::Equals).unwrap();
        assert_eq!(session.display(), "42");
    }

    #[test]
    fn test_digits_append_to_result() {
        // no pending operation after equals, so digits extend the
        // displayed result directly
        assert_eq!(run(&["1", "+", "2", "=", "5"]).display(), "35");
    }

    #[test]
    fn test_clear_resets_fully() {
        let mut session = run(&["9", "*", "9", "="]);
        press(&mut session, &["C"]);
        assert_eq!(session.display(), "0");
        assert_eq!(session.pending(), None);
        session.apply(Action::Equals).unwrap();
        assert_eq!(session.display(), "0");
    }

    #[test]
    fn test_operator_after_equals_uses_result() {
        // (1+2) then *4 = 12
        assert_eq!(run(&["1", "+", "2", "=", "*", "4", "="]).display(), "12");
    }

    #[test]
    fn test_invalid_digit_rejected_unchanged() {
        let mut session = run(&["4", "+"]);
        let before = session.clone();
        assert_eq!(
            session.apply(Action::Digit(12)),
            Err(CalcError::InvalidDigit(12))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_classify_known_labels() {
        assert_eq!(Action::classify("0").unwrap(), Action::Digit(0));
        assert_eq!(Action::classify("9").unwrap(), Action::Digit(9));
        assert_eq!(
            Action::classify("+").unwrap(),
            Action::Operator(Operation::Add)
        );
        assert_eq!(
            Action::classify("/").unwrap(),
            Action::Operator(Operation::Divide)
        );
        assert_eq!(Action::classify("C").unwrap(), Action::Clear);
        assert_eq!(Action::classify("=").unwrap(), Action::Equals);
    }

    #[test]
    fn test_classify_rejects_dead_buttons() {
        // present on the grid, no evaluation semantics
        for label in ["(", ")", ".", "%"] {
            assert_eq!(
                Action::classify(label),
                Err(CalcError::UnsupportedOperator(label.to_string()))
            );
        }
        assert!(Action::classify("ans").is_err());
        assert!(Action::classify("").is_err());
    }

    #[test]
    fn test_operation_symbol_round_trip() {
        for op in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ] {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
        }
    }
}
