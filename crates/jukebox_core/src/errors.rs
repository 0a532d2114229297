//! Invocation-failure taxonomy for reflective construction and calls.
//!
//! A [`CallError`] is how a registered constructor or method body reports that it could not
//! run: wrong argument count, wrong argument shape, a receiver of the wrong concrete type.
//! These values never cross the probe boundary: [`crate::probe`] logs them and reduces the
//! outcome to absence, keeping invocation failure distinct from the ordinary lookup miss
//! (which is plain `None` and not an error at all).

use thiserror::Error;

use crate::value::ParamTy;

/// Failure raised by a constructor or method body during reflective invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("expected {expected} argument(s), got {got}")]
    Arity { expected: usize, got: usize },

    #[error("argument {index} should be {expected:?}, got {got:?}")]
    ArgumentShape {
        index: usize,
        expected: ParamTy,
        got: ParamTy,
    },

    #[error("receiver is not a {expected}")]
    Receiver { expected: &'static str },

    #[error("{name} is declared without a body")]
    NotInvokable { name: String },

    #[error("operation body panicked")]
    Panicked,
}
