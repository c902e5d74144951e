//! Sequence adapters

mod skip;

pub use skip::{SkipExt, SkipSequence};
