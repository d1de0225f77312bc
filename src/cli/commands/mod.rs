//! Command implementations

mod check;

pub use check::{CheckOptions, check};
