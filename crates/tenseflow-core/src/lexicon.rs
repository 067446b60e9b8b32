//! Lexical pools that parameterize generated sentences.

use crate::error::{GrammarError, GrammarResult};
use crate::model::{Number, Person, PronounEntry};

pub const PRONOUNS: &[PronounEntry] = &[
    PronounEntry::new("I", Person::First, Number::Singular),
    PronounEntry::new("You", Person::Second, Number::Singular),
    PronounEntry::new("He", Person::Third, Number::Singular),
    PronounEntry::new("She", Person::Third, Number::Singular),
    PronounEntry::new("They", Person::Third, Number::Plural),
    PronounEntry::new("We", Person::First, Number::Plural),
];

pub const VERBS: &[&str] = &["read", "write", "draw", "play", "study", "cook", "watch"];

pub const NOUNS: &[&str] = &[
    "book", "movie", "song", "game", "recipe", "story", "article",
];

pub const TIMES: &[&str] = &[
    "morning",
    "afternoon",
    "evening",
    "night",
    "weekend",
    "today",
    "yesterday",
    "tomorrow",
];

/// WH-words for present continuous questions.
pub const WH_CONTINUOUS: &[&str] = &["What", "Why", "How"];

/// WH-words for future simple questions.
pub const WH_FUTURE: &[&str] = &["When", "Where"];

/// Range of the selection variant; a multiple of every WH pool length so
/// each alternative is equally likely.
pub const VARIANT_SPAN: usize = 6;

/// The pools a generator samples from.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pronouns: &'static [PronounEntry],
    nouns: &'static [&'static str],
    times: &'static [&'static str],
    verbs: &'static [&'static str],
}

impl Lexicon {
    /// Build a lexicon from custom pools. Every pool must be non-empty.
    pub fn new(
        pronouns: &'static [PronounEntry],
        nouns: &'static [&'static str],
        times: &'static [&'static str],
        verbs: &'static [&'static str],
    ) -> GrammarResult<Self> {
        if pronouns.is_empty() {
            return Err(GrammarError::EmptyPool { pool: "pronouns" });
        }
        if nouns.is_empty() {
            return Err(GrammarError::EmptyPool { pool: "nouns" });
        }
        if times.is_empty() {
            return Err(GrammarError::EmptyPool { pool: "times" });
        }
        if verbs.is_empty() {
            return Err(GrammarError::EmptyPool { pool: "verbs" });
        }
        Ok(Self {
            pronouns,
            nouns,
            times,
            verbs,
        })
    }

    /// The built-in pools.
    pub const fn standard() -> Self {
        Self {
            pronouns: PRONOUNS,
            nouns: NOUNS,
            times: TIMES,
            verbs: VERBS,
        }
    }

    pub fn pronouns(&self) -> &'static [PronounEntry] {
        self.pronouns
    }

    pub fn nouns(&self) -> &'static [&'static str] {
        self.nouns
    }

    pub fn times(&self) -> &'static [&'static str] {
        self.times
    }

    pub fn verbs(&self) -> &'static [&'static str] {
        self.verbs
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}
