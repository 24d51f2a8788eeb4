//! Single-head Horn-formula reconstruction: decide whether a propositional
//! Horn-like clause formula is equivalent to one where every variable heads
//! at most one clause, and build such a formula when it exists.

pub mod clause;
pub mod cli;
pub mod config;
pub mod error;
pub mod hclose;
pub mod index;
pub mod intern;
pub mod minbodies;
pub mod parser;
pub mod pretty;
pub mod rcn;
pub mod reconstruct;
pub mod resolution;
pub mod stats;
pub mod testscript;
