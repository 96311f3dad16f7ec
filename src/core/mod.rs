// Core algorithm exports
pub mod classifier;

pub use classifier::{classify, dominant_style, tally_answers, ClassifyError};
