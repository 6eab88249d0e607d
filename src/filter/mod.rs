//! Constraint filtering of a dictionary against guess feedback
//!
//! [`WordFilter::filter`] is the single entry point: dictionary plus guess history
//! in, ordered matches (or a structured error) out.

mod constraint;
mod engine;
mod error;

pub use constraint::RowConstraint;
pub use engine::{
    DEFAULT_PARALLEL_THRESHOLD, FilterConfig, Matches, WordFilter, compile_history,
};
pub use error::{ErrorKind, FilterError, MalformedInput};
