//! This module provides documentation for the [`bioshell-taxonomy`](self) crate.
//!
//! # Table of Contents
//! - [`taxonomy` command line application](#taxonomy_app)
//!
//! ## `taxonomy` command line examples <a name="taxonomy_app"></a>
#![doc = include_str!("taxonomy_app.md")]
//!
