//! Command implementations

pub mod analyze;
pub mod filter;
pub mod simple;
pub mod verify;

pub use analyze::analyze_document;
pub use filter::{FilterReport, filter_rows, parse_rows};
pub use simple::{Command, Session, run_simple};
pub use verify::{VerifyConfig, VerifyResult, Violation, ViolationKind, run_verify};
