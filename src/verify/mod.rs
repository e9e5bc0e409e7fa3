//! The three comparison strategies
//!
//! `pattern` greps tool output against embedded expectations, `objdiff`
//! byte-compares assembled objects before and after transformation, and
//! `relax` cross-checks relaxer-reported function sizes against a symbol
//! dump.

pub mod objdiff;
pub mod pattern;
pub mod relax;
