// textent/src/lib.rs
//! # textent CLI
//!
//! Command-line front end for `textent-core`. Reads plain text from a file
//! or stdin, forwards the optional metadata flags, and prints the analysis
//! as a colored one-line report or as JSON.

pub mod cli;
pub mod logger;
pub mod render;
