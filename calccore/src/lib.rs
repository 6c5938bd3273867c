//! calccore — calculator logic for pocketcalc
//!
//! The session state machine and the arbitrary-precision evaluator.
//! No UI types; the shell talks to this crate through [`Action`] and
//! reads back [`Session::display`].

pub mod error;
pub mod eval;
pub mod session;

pub use error::CalcError;
pub use eval::evaluate;
pub use session::{Action, Operation, Session};
