//! ISAAC random number generation.
//!
//! Split into the working state and mixing round (`state`), seeding
//! (`seeding`), block generation (`generator`) and the public generator
//! instance ([`isaac`]).

pub mod isaac;

pub(crate) mod generator;
pub(crate) mod seeding;
pub(crate) mod state;
