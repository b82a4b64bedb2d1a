//! Error kinds raised while evaluating expressions.

pub mod kind;

pub use kind::{NegativeBase, VariableOutOfRange};
