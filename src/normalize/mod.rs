//! Email text normalization
//!
//! Turns raw subject+body text into a clean, space-tokenizable string by
//! stripping markup remnants, stray punctuation, and encoded noise.

pub mod cleaner;

pub use cleaner::Normalizer;
