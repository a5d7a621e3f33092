//! Helpers used around the generator core.

pub mod converter;
