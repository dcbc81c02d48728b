//! Integration tests for Blammo noise crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between generator, volume, persistence and config crates.

#[cfg(test)]
mod golden;
