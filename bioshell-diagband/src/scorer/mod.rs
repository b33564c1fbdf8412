//! Clusters seed pairs along diagonals and decides where to trigger extension.

mod diagband;

pub use diagband::*;
