//! Tokenizer and part-of-speech tagger.
//!
//! `PosTagger` is the seam the skill matcher depends on. The default backend,
//! `LexiconTagger`, is a rule-based English tagger: closed-class lexicons first, then
//! suffix rules, then NOUN as the open-class fallback. It is built on first use through
//! `TaggerHandle` and reused for the lifetime of the process.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::nlp::lexicon;

/// Default upper bound on input length, in characters.
pub const DEFAULT_MAX_CHARS: usize = 1_000_000;

// Word runs joined by internal `.`, `-`, `/` or `'`, with trailing `+`/`#` kept (c++, c#).
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+(?:[./\-']\w+)*[+#]*").expect("token pattern is valid"));

/// Universal part-of-speech tags. Only NOUN and PROPN feed the skill matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Adp,
    Det,
    Pron,
    Cconj,
    Sconj,
    Part,
    Num,
}

impl PartOfSpeech {
    pub fn is_nominal(self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::Propn)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub surface: String,
    pub pos: PartOfSpeech,
    pub is_stop: bool,
}

#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("input of {len} characters exceeds the tagger limit of {max}")]
    InputTooLong { len: usize, max: usize },

    #[error("tagger unavailable: {0}")]
    Unavailable(String),
}

/// Tokenizes and tags text. Implementations receive text that is already lower-cased.
pub trait PosTagger: Send + Sync {
    fn tag(&self, text: &str) -> Result<Vec<Token>, TaggerError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LexiconTagger
// ────────────────────────────────────────────────────────────────────────────

pub struct LexiconTagger {
    max_chars: usize,
    stop_words: HashSet<&'static str>,
    determiners: HashSet<&'static str>,
    pronouns: HashSet<&'static str>,
    adpositions: HashSet<&'static str>,
    cconj: HashSet<&'static str>,
    sconj: HashSet<&'static str>,
    auxiliaries: HashSet<&'static str>,
    particles: HashSet<&'static str>,
    verbs: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
}

fn word_set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

impl LexiconTagger {
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars,
            stop_words: word_set(lexicon::STOP_WORDS),
            determiners: word_set(lexicon::DETERMINERS),
            pronouns: word_set(lexicon::PRONOUNS),
            adpositions: word_set(lexicon::ADPOSITIONS),
            cconj: word_set(lexicon::COORDINATING_CONJUNCTIONS),
            sconj: word_set(lexicon::SUBORDINATING_CONJUNCTIONS),
            auxiliaries: word_set(lexicon::AUXILIARIES),
            particles: word_set(lexicon::PARTICLES),
            verbs: word_set(lexicon::VERBS),
            adjectives: word_set(lexicon::ADJECTIVES),
        }
    }

    fn classify(&self, word: &str) -> PartOfSpeech {
        let len = word.chars().count();

        if word.chars().all(|c| c.is_ascii_digit() || c == '.') {
            PartOfSpeech::Num
        } else if self.particles.contains(word) {
            PartOfSpeech::Part
        } else if self.auxiliaries.contains(word) {
            PartOfSpeech::Aux
        } else if self.determiners.contains(word) {
            PartOfSpeech::Det
        } else if self.pronouns.contains(word) {
            PartOfSpeech::Pron
        } else if self.adpositions.contains(word) {
            PartOfSpeech::Adp
        } else if self.cconj.contains(word) {
            PartOfSpeech::Cconj
        } else if self.sconj.contains(word) {
            PartOfSpeech::Sconj
        } else if self.verbs.contains(word) {
            PartOfSpeech::Verb
        } else if word.contains(lexicon::PROPER_NAME_MARKERS) {
            PartOfSpeech::Propn
        } else if self.adjectives.contains(word) {
            PartOfSpeech::Adj
        } else if len > 4 && word.ends_with("ly") {
            PartOfSpeech::Adv
        } else if len > 4 && word.ends_with("ed") {
            PartOfSpeech::Verb
        } else if len > 5
            && lexicon::ADJECTIVE_SUFFIXES
                .iter()
                .any(|suffix| word.ends_with(suffix))
        {
            PartOfSpeech::Adj
        } else {
            PartOfSpeech::Noun
        }
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, text: &str) -> Result<Vec<Token>, TaggerError> {
        let len = text.chars().count();
        if len > self.max_chars {
            return Err(TaggerError::InputTooLong {
                len,
                max: self.max_chars,
            });
        }

        Ok(TOKEN_PATTERN
            .find_iter(text)
            .map(|m| {
                let surface = m.as_str();
                Token {
                    surface: surface.to_string(),
                    pos: self.classify(surface),
                    is_stop: self.stop_words.contains(surface),
                }
            })
            .collect())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// TaggerHandle
// ────────────────────────────────────────────────────────────────────────────

/// Cloneable handle to the process-wide tagger. The lexicons are built on the first
/// `tag` call and shared by every clone afterwards.
#[derive(Clone)]
pub struct TaggerHandle {
    max_chars: usize,
    cell: Arc<OnceCell<LexiconTagger>>,
}

impl TaggerHandle {
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars,
            cell: Arc::new(OnceCell::new()),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    fn tagger(&self) -> &LexiconTagger {
        self.cell.get_or_init(|| {
            info!("Initializing lexicon tagger (max {} chars)", self.max_chars);
            LexiconTagger::new(self.max_chars)
        })
    }
}

impl Default for TaggerHandle {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHARS)
    }
}

impl PosTagger for TaggerHandle {
    fn tag(&self, text: &str) -> Result<Vec<Token>, TaggerError> {
        self.tagger().tag(text)
    }
}
