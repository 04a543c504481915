//! Band acquisition: synthetic scene generation.

pub mod synthetic;

pub use synthetic::*;
