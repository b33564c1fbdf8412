//! A minimal encoded-sequence store.
//!
//! Building a production-scale genome index (on-disk two-bit packing, enhanced suffix arrays,
//! memory mapping) is out of scope for this crate — see the crate-level Non-goals. This module
//! provides just enough of that interface, backed by a plain `Vec<u8>`, for the seed-and-extend
//! pipeline to run and to be exercised by tests.

mod sequence_store;

pub use sequence_store::*;
