//! Pure Fibonacci sequence generation.

pub mod sequence;

pub use sequence::{generate, generate_checked, Term, MAX_EXACT_TERMS};
