// Text normalization, tokenization and part-of-speech tagging.
// The tagger is built lazily on first use and shared through `TaggerHandle`.

pub mod lexicon;
pub mod tagger;

pub use tagger::{PosTagger, TaggerHandle, Token};
