// newscheck-lexicon/src/lib.rs
#![no_std]

extern crate alloc; 

#[cfg(feature = "std")]
extern crate std;

pub mod keywords;
pub mod scoring;

pub use keywords::{CategoryCounts, KeywordMatcher, Lexicon, LexiconError};
pub use scoring::{blend_confidence, ml_confidence, BoostWeights};

/// Confidence expressed as a percentage in `[0, 100]`.
pub type Confidence = f64;
