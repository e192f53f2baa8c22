//! Arithmetic behind the tip form.

pub mod common;
pub mod split;

pub use split::{compute, compute_validated};
