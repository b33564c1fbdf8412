//! This module provides documentation for the [`bioshell-pdb`](self) crate.
//!
//! # Table of Contents
//! - [Cookbook](#cookbook)
//!     - [pdb_tool](#pdb_tool)
//!
//! # Cookbook
//! <a name="pdb_tool"></a>
//! ## `pdb_tool` examples
#![doc = include_str!("pdb_tool.md")]
//!
