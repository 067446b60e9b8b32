//! Grammar core of the TenseFlow tutor.
//!
//! Two pure pipelines meet in a common record, [`Example`]:
//!
//! - **Generation**: a [`Lexicon`] of pronouns, nouns, times and verbs is
//!   sampled uniformly and fed through a fixed [`Template`]; every token is
//!   tagged and transcribed via [`resolve`].
//! - **Normalization**: whatever JSON a remote analyzer returns is mapped onto
//!   a non-empty list of examples by the [`Normalizer`], substituting the fixed
//!   default example when nothing usable arrives.
//!
//! A [`GrammarProfile`] selects the template set, reference tables, element
//! policy and sampling strategy; a [`TutorSession`] holds what is on display.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tenseflow_core::GrammarProfile;
//!
//! let profile = GrammarProfile::default();
//! let example = profile.generator().generate(&mut StdRng::seed_from_u64(42));
//! assert!(profile.tables().has_tense(&example.tense));
//! ```

mod error;
pub mod generator;
pub mod lexicon;
pub mod model;
pub mod normalize;
mod phonetic;
pub mod profile;
pub mod reference;
pub mod session;
pub mod template;

pub use error::{GrammarError, GrammarResult};
pub use generator::{ExampleGenerator, Sampling, MAX_BATCH_SIZE};
pub use lexicon::Lexicon;
pub use model::{
    default_example, AnalyzeRequest, AnalyzerResponse, Example, Number, Person, Polarity,
    PronounEntry, QuestionType, Tag,
};
pub use normalize::{normalize, ElementPolicy, NormalizeReport, Normalizer, ResponseShape};
pub use phonetic::{is_known, resolve};
pub use profile::{GrammarProfile, ProfilePreset};
pub use reference::{ReferenceTables, ReferenceVersion, TagInfo, TenseForm, TenseInfo, TENSE_NAMES};
pub use session::{AnalysisOutcome, Notice, TutorSession};
pub use template::{Selection, Template, TemplateSet};
