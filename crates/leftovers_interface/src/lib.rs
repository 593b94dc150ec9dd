//! Trait definitions for the Leftovers recipe generator.
//!
//! The recipe generator never talks to a model directly; it goes through
//! [`TextGenerator`], so tests and alternative backends can stand in for the
//! hosted model.

mod generator;

pub use generator::TextGenerator;
