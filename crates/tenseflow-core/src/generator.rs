//! Random example generation over the template library.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lexicon::{Lexicon, VARIANT_SPAN};
use crate::model::Example;
use crate::template::{Selection, TemplateSet};

/// Largest accepted batch for [`Sampling::Batch`].
pub const MAX_BATCH_SIZE: usize = 1000;

/// How a single displayed example is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum Sampling {
    /// Generate exactly one example.
    #[default]
    Direct,
    /// Generate `size` candidates and pick one uniformly. Sizes outside
    /// `1..=MAX_BATCH_SIZE` are clamped.
    Batch { size: usize },
}

/// Samples lexical items and templates uniformly and independently.
///
/// Holds no mutable state; all randomness comes from the caller's RNG, so a
/// seeded RNG reproduces the exact same sequence of examples.
#[derive(Debug, Clone, Default)]
pub struct ExampleGenerator {
    lexicon: Lexicon,
    template_set: TemplateSet,
    attributes: bool,
}

impl ExampleGenerator {
    pub fn new(lexicon: Lexicon, template_set: TemplateSet, attributes: bool) -> Self {
        Self {
            lexicon,
            template_set,
            attributes,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn template_set(&self) -> TemplateSet {
        self.template_set
    }

    /// Draw one example.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Example {
        let pronoun = pick(rng, self.lexicon.pronouns());
        let noun = *pick(rng, self.lexicon.nouns());
        let time = *pick(rng, self.lexicon.times());
        let verb = *pick(rng, self.lexicon.verbs());
        let variant = rng.random_range(0..VARIANT_SPAN);
        let template = pick(rng, self.template_set.templates());

        let selection = Selection {
            pronoun,
            noun,
            time,
            verb,
            variant,
        };
        let example = template.render(&selection, self.attributes);
        debug!(
            target: "tenseflow::generate",
            template = template.name,
            tense = template.tense,
            "example_generated"
        );
        example
    }

    /// Draw `n` independent examples.
    pub fn generate_batch<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<Example> {
        (0..n).map(|_| self.generate(rng)).collect()
    }

    /// Draw one example using `sampling`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, sampling: &Sampling) -> Example {
        match *sampling {
            Sampling::Direct => self.generate(rng),
            Sampling::Batch { size } => {
                let mut batch = self.generate_batch(rng, size.clamp(1, MAX_BATCH_SIZE));
                let chosen = rng.random_range(0..batch.len());
                batch.swap_remove(chosen)
            }
        }
    }
}

/// Uniform pick from a pool. Pools are non-empty by construction of [`Lexicon`]
/// and the template sets.
fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, pool: &'a [T]) -> &'a T {
    &pool[rng.random_range(0..pool.len())]
}
