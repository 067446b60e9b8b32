//! Error types for the grammar core.

use thiserror::Error;

use crate::generator::MAX_BATCH_SIZE;
use crate::reference::ReferenceVersion;

/// Result type alias for grammar operations.
pub type GrammarResult<T> = Result<T, GrammarError>;

/// Errors raised while building or validating grammar configuration.
///
/// Generation and normalization themselves never fail; these errors only
/// surface while a profile or lexicon is being assembled.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// A template can emit a tense the reference table does not describe.
    #[error(
        "template {template} emits tense {tense:?} missing from the {tables} reference table"
    )]
    UncoveredTense {
        template: &'static str,
        tense: String,
        tables: ReferenceVersion,
    },

    /// A template can emit a POS tag the reference table does not describe.
    #[error(
        "template {template} emits tag {tag:?} missing from the {tables} reference table"
    )]
    UncoveredTag {
        template: &'static str,
        tag: String,
        tables: ReferenceVersion,
    },

    /// A lexical pool has no entries to sample from.
    #[error("lexical pool {pool} is empty")]
    EmptyPool { pool: &'static str },

    /// Batch sampling was configured with a size outside `1..=MAX_BATCH_SIZE`.
    #[error(
        "invalid batch size: {size} (must be between 1 and {max})",
        max = MAX_BATCH_SIZE
    )]
    InvalidBatchSize { size: usize },

    /// A named option did not match any known value.
    #[error("unknown {kind}: {value:?} (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Profile TOML could not be parsed.
    #[error("profile parse error: {0}")]
    ProfileParse(#[from] toml::de::Error),

    /// I/O error while reading a profile file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl GrammarError {
    pub(crate) fn unknown(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}
