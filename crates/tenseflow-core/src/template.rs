//! Sentence templates.
//!
//! Each template is a pure function of a [`Selection`]: it builds the surface
//! sentence, tags every token with a POS code and resolves its transcription.
//! Tense, polarity and question type are fixed per template and attached by
//! [`Template::render`].
//!
//! Inflection is naive concatenation (`verb + "s"`, `verb + "ing"`); English
//! spelling changes such as consonant doubling are not applied.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GrammarError, GrammarResult};
use crate::lexicon::{Lexicon, VARIANT_SPAN, WH_CONTINUOUS, WH_FUTURE};
use crate::model::{Example, Polarity, PronounEntry, QuestionType, Tag};
use crate::phonetic::resolve;
use crate::reference::ReferenceTables;

/// The lexical items a template is instantiated with.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub pronoun: &'a PronounEntry,
    pub noun: &'a str,
    pub time: &'a str,
    pub verb: &'a str,
    /// Chooses among template-internal alternatives such as the WH-word.
    pub variant: usize,
}

/// Sentence and tags produced by a template body.
struct Draft {
    sentence: String,
    tags: Vec<Tag>,
}

/// A fixed sentence pattern.
pub struct Template {
    pub name: &'static str,
    pub tense: &'static str,
    pub polarity: Polarity,
    pub question_type: QuestionType,
    build: fn(&Selection<'_>) -> Draft,
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("name", &self.name)
            .field("tense", &self.tense)
            .field("polarity", &self.polarity)
            .field("question_type", &self.question_type)
            .finish()
    }
}

impl Template {
    /// Instantiate the template.
    ///
    /// With `attributes` set, person and number are copied from the selected
    /// pronoun and the template's polarity and question type are attached.
    pub fn render(&self, selection: &Selection<'_>, attributes: bool) -> Example {
        let Draft { sentence, tags } = (self.build)(selection);
        let example = Example {
            sentence,
            tense: self.tense.to_string(),
            tags,
            person: Some(selection.pronoun.person),
            number: Some(selection.pronoun.number),
            polarity: Some(self.polarity),
            question_type: Some(self.question_type),
        };
        if attributes {
            example
        } else {
            example.without_attributes()
        }
    }
}

fn token(word: &str, code: &str) -> Tag {
    Tag::new(word, code, resolve(word))
}

fn subject_tag(selection: &Selection<'_>) -> Tag {
    token(selection.pronoun.word, "PRP")
}

fn ing(verb: &str) -> String {
    format!("{verb}ing")
}

fn present_simple_positive(s: &Selection<'_>) -> Draft {
    let (verb, code) = if s.pronoun.is_third_singular() {
        (format!("{}s", s.verb), "VBZ")
    } else {
        (s.verb.to_string(), "VBP")
    };
    let (subject, noun, time) = (s.pronoun.word, s.noun, s.time);
    Draft {
        sentence: format!("{subject} {verb} the {noun} every {time}."),
        tags: vec![
            subject_tag(s),
            token(&verb, code),
            token("the", "DT"),
            token(noun, "NN"),
            token("every", "DT"),
            token(time, "NN"),
        ],
    }
}

fn present_simple_negative(s: &Selection<'_>) -> Draft {
    let aux = if s.pronoun.is_third_singular() {
        "does"
    } else {
        "do"
    };
    let (subject, verb, noun) = (s.pronoun.word, s.verb, s.noun);
    Draft {
        sentence: format!("{subject} {aux} not {verb} the {noun}."),
        tags: vec![
            subject_tag(s),
            token(aux, "AUX"),
            token("not", "PART"),
            token(verb, "VB"),
            token("the", "DT"),
            token(noun, "NN"),
        ],
    }
}

fn present_continuous_wh(s: &Selection<'_>) -> Draft {
    let wh = WH_CONTINUOUS[s.variant % WH_CONTINUOUS.len()];
    let aux = if s.pronoun.is_third_singular() {
        "is"
    } else {
        "are"
    };
    let pronoun = s.pronoun.inner_form();
    let verb = ing(s.verb);
    Draft {
        sentence: format!("{wh} {aux} {pronoun} {verb}?"),
        tags: vec![
            token(wh, "WP"),
            token(aux, "AUX"),
            token(&pronoun, "PRP"),
            token(&verb, "VBG"),
        ],
    }
}

fn past_simple_interrogative(s: &Selection<'_>) -> Draft {
    let (subject, verb, noun) = (s.pronoun.word, s.verb, s.noun);
    Draft {
        sentence: format!("Did {subject} {verb} the {noun} yesterday?"),
        tags: vec![
            token("Did", "AUX"),
            subject_tag(s),
            token(verb, "VB"),
            token("the", "DT"),
            token(noun, "NN"),
            token("yesterday", "NN"),
        ],
    }
}

fn present_perfect_continuous_positive(s: &Selection<'_>) -> Draft {
    let (aux, code) = if s.pronoun.is_third_singular() {
        ("has", "VBZ")
    } else {
        ("have", "VBP")
    };
    let verb = ing(s.verb);
    let (subject, time) = (s.pronoun.word, s.time);
    Draft {
        sentence: format!("{subject} {aux} been {verb} since {time}."),
        tags: vec![
            subject_tag(s),
            token(aux, code),
            token("been", "VBN"),
            token(&verb, "VBG"),
            token("since", "IN"),
            token(time, "NN"),
        ],
    }
}

fn future_simple_negative(s: &Selection<'_>) -> Draft {
    let (subject, verb, noun) = (s.pronoun.word, s.verb, s.noun);
    Draft {
        sentence: format!("{subject} will not {verb} the {noun} tomorrow."),
        tags: vec![
            subject_tag(s),
            token("will", "MD"),
            token("not", "PART"),
            token(verb, "VB"),
            token("the", "DT"),
            token(noun, "NN"),
            token("tomorrow", "NN"),
        ],
    }
}

fn past_continuous_positive(s: &Selection<'_>) -> Draft {
    let aux = if s.pronoun.takes_were() {
        "were"
    } else {
        "was"
    };
    let subject = s.pronoun.word;
    let verb = ing(s.verb);
    Draft {
        sentence: format!("{subject} {aux} {verb} when I called."),
        tags: vec![
            subject_tag(s),
            token(aux, "VBD"),
            token(&verb, "VBG"),
            token("when", "IN"),
            token("I", "PRP"),
            token("called", "VBD"),
        ],
    }
}

fn future_simple_wh(s: &Selection<'_>) -> Draft {
    let wh = WH_FUTURE[s.variant % WH_FUTURE.len()];
    let pronoun = s.pronoun.inner_form();
    let verb = s.verb;
    Draft {
        sentence: format!("{wh} will {pronoun} {verb}?"),
        tags: vec![
            token(wh, "WP"),
            token("will", "MD"),
            token(&pronoun, "PRP"),
            token(verb, "VB"),
        ],
    }
}

fn future_continuous_positive(s: &Selection<'_>) -> Draft {
    let verb = ing(s.verb);
    let (subject, noun) = (s.pronoun.word, s.noun);
    Draft {
        sentence: format!("{subject} will be {verb} the {noun} tomorrow."),
        tags: vec![
            subject_tag(s),
            token("will", "MD"),
            token("be", "VB"),
            token(&verb, "VBG"),
            token("the", "DT"),
            token(noun, "NN"),
            token("tomorrow", "NN"),
        ],
    }
}

fn past_simple_negative(s: &Selection<'_>) -> Draft {
    let (subject, verb, noun) = (s.pronoun.word, s.verb, s.noun);
    Draft {
        sentence: format!("{subject} did not {verb} the {noun} yesterday."),
        tags: vec![
            subject_tag(s),
            token("did", "AUX"),
            token("not", "PART"),
            token(verb, "VB"),
            token("the", "DT"),
            token(noun, "NN"),
            token("yesterday", "NN"),
        ],
    }
}

const fn template(
    name: &'static str,
    tense: &'static str,
    polarity: Polarity,
    question_type: QuestionType,
    build: fn(&Selection<'_>) -> Draft,
) -> Template {
    Template {
        name,
        tense,
        polarity,
        question_type,
        build,
    }
}

/// Templates 1-8 followed by the two extended patterns.
static TEMPLATES: [Template; 10] = [
    template(
        "present_simple_positive",
        "Present Simple",
        Polarity::Positive,
        QuestionType::Statement,
        present_simple_positive,
    ),
    template(
        "present_simple_negative",
        "Present Simple",
        Polarity::Negative,
        QuestionType::Statement,
        present_simple_negative,
    ),
    template(
        "present_continuous_wh",
        "Present Continuous",
        Polarity::Positive,
        QuestionType::Wh,
        present_continuous_wh,
    ),
    template(
        "past_simple_interrogative",
        "Past Simple",
        Polarity::Positive,
        QuestionType::Interrogative,
        past_simple_interrogative,
    ),
    template(
        "present_perfect_continuous_positive",
        "Present Perfect Continuous",
        Polarity::Positive,
        QuestionType::Statement,
        present_perfect_continuous_positive,
    ),
    template(
        "future_simple_negative",
        "Future Simple",
        Polarity::Negative,
        QuestionType::Statement,
        future_simple_negative,
    ),
    template(
        "past_continuous_positive",
        "Past Continuous",
        Polarity::Positive,
        QuestionType::Statement,
        past_continuous_positive,
    ),
    template(
        "future_simple_wh",
        "Future Simple",
        Polarity::Positive,
        QuestionType::Wh,
        future_simple_wh,
    ),
    template(
        "future_continuous_positive",
        "Future Continuous",
        Polarity::Positive,
        QuestionType::Statement,
        future_continuous_positive,
    ),
    template(
        "past_simple_negative",
        "Past Simple",
        Polarity::Negative,
        QuestionType::Statement,
        past_simple_negative,
    ),
];

const CLASSIC_LEN: usize = 8;

/// Which templates a profile samples from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateSet {
    /// The eight original patterns.
    Classic,
    /// Classic plus future continuous and past simple negative.
    #[default]
    Extended,
}

/// Tense names and POS codes a template set can emit.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub tenses: BTreeSet<&'static str>,
    pub tags: BTreeSet<String>,
}

impl TemplateSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateSet::Classic => "classic",
            TemplateSet::Extended => "extended",
        }
    }

    pub fn templates(&self) -> &'static [Template] {
        match self {
            TemplateSet::Classic => &TEMPLATES[..CLASSIC_LEN],
            TemplateSet::Extended => &TEMPLATES[..],
        }
    }

    /// Look up a template of this set by name.
    pub fn find(&self, name: &str) -> Option<&'static Template> {
        self.templates().iter().find(|t| t.name == name)
    }

    /// Enumerate everything this set can emit over `lexicon`'s pronouns and
    /// every selection variant.
    pub fn vocabulary(&self, lexicon: &Lexicon) -> Vocabulary {
        let mut vocabulary = Vocabulary::default();
        for template in self.templates() {
            let single = Vocabulary::of_template(template, lexicon);
            vocabulary.tenses.extend(single.tenses);
            vocabulary.tags.extend(single.tags);
        }
        vocabulary
    }

    /// Check that every tense and tag this set can emit is described by `tables`.
    pub fn check_coverage(&self, lexicon: &Lexicon, tables: &ReferenceTables) -> GrammarResult<()> {
        for template in self.templates() {
            if !tables.has_tense(template.tense) {
                return Err(GrammarError::UncoveredTense {
                    template: template.name,
                    tense: template.tense.to_string(),
                    tables: tables.version,
                });
            }
        }

        // Per template so the error names the offending template.
        for template in self.templates() {
            let single = Vocabulary::of_template(template, lexicon);
            if let Some(tag) = single.tags.iter().find(|code| !tables.has_tag(code)) {
                return Err(GrammarError::UncoveredTag {
                    template: template.name,
                    tag: tag.clone(),
                    tables: tables.version,
                });
            }
        }
        Ok(())
    }
}

impl Vocabulary {
    fn of_template(template: &Template, lexicon: &Lexicon) -> Self {
        let mut vocabulary = Vocabulary::default();
        vocabulary.tenses.insert(template.tense);
        let (Some(&noun), Some(&time), Some(&verb)) = (
            lexicon.nouns().first(),
            lexicon.times().first(),
            lexicon.verbs().first(),
        ) else {
            return vocabulary;
        };
        for pronoun in lexicon.pronouns() {
            for variant in 0..VARIANT_SPAN {
                let selection = Selection {
                    pronoun,
                    noun,
                    time,
                    verb,
                    variant,
                };
                vocabulary
                    .tags
                    .extend((template.build)(&selection).tags.into_iter().map(|t| t.tag));
            }
        }
        vocabulary
    }
}

impl fmt::Display for TemplateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateSet {
    type Err = GrammarError;

    fn from_str(s: &str) -> GrammarResult<Self> {
        match s {
            "classic" => Ok(TemplateSet::Classic),
            "extended" => Ok(TemplateSet::Extended),
            other => Err(GrammarError::unknown(
                "template set",
                other,
                "classic, extended",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::PRONOUNS;
    use crate::model::{Number, Person};
    use crate::reference::ReferenceVersion;

    const SHE: PronounEntry = PronounEntry::new("She", Person::Third, Number::Singular);
    const WE: PronounEntry = PronounEntry::new("We", Person::First, Number::Plural);
    const YOU: PronounEntry = PronounEntry::new("You", Person::Second, Number::Singular);

    fn select(pronoun: &PronounEntry, variant: usize) -> Selection<'_> {
        Selection {
            pronoun,
            noun: "book",
            time: "morning",
            verb: "read",
            variant,
        }
    }

    fn render(name: &str, pronoun: &PronounEntry) -> Example {
        TemplateSet::Extended
            .find(name)
            .unwrap()
            .render(&select(pronoun, 0), true)
    }

    fn words(example: &Example) -> Vec<&str> {
        example.tags.iter().map(|t| t.word.as_str()).collect()
    }

    #[test]
    fn present_simple_positive_third_singular() {
        let example = render("present_simple_positive", &SHE);
        assert_eq!(example.sentence, "She reads the book every morning.");
        assert_eq!(example.tense, "Present Simple");
        assert_eq!(example.polarity, Some(Polarity::Positive));
        assert_eq!(example.question_type, Some(QuestionType::Statement));
        assert_eq!(example.tags[0], Tag::new("She", "PRP", "ʃiː"));
        assert_eq!(example.tags[1].word, "reads");
        assert_eq!(example.tags[1].tag, "VBZ");
    }

    #[test]
    fn present_simple_positive_plural_keeps_bare_verb() {
        let example = render("present_simple_positive", &WE);
        assert_eq!(example.sentence, "We read the book every morning.");
        assert_eq!(example.tags[1].tag, "VBP");
    }

    #[test]
    fn present_simple_negative_auxiliary_agrees() {
        assert_eq!(
            render("present_simple_negative", &SHE).sentence,
            "She does not read the book."
        );
        assert_eq!(
            render("present_simple_negative", &YOU).sentence,
            "You do not read the book."
        );
    }

    #[test]
    fn present_continuous_question_lowercases_inner_subject() {
        let example = TemplateSet::Classic
            .find("present_continuous_wh")
            .unwrap()
            .render(&select(&SHE, 1), true);
        assert_eq!(example.sentence, "Why is she reading?");
        assert_eq!(words(&example), ["Why", "is", "she", "reading"]);
        assert_eq!(example.question_type, Some(QuestionType::Wh));

        let first = PRONOUNS[0];
        let example = TemplateSet::Classic
            .find("present_continuous_wh")
            .unwrap()
            .render(&select(&first, 0), true);
        assert_eq!(example.sentence, "What are I reading?");
    }

    #[test]
    fn past_simple_interrogative_ignores_person() {
        assert_eq!(
            render("past_simple_interrogative", &SHE).sentence,
            "Did She read the book yesterday?"
        );
        assert_eq!(
            render("past_simple_interrogative", &WE).tags[2],
            Tag::new("read", "VB", "riːd")
        );
    }

    #[test]
    fn present_perfect_continuous_uses_has_or_have() {
        let she = render("present_perfect_continuous_positive", &SHE);
        assert_eq!(she.sentence, "She has been reading since morning.");
        assert_eq!(she.tags[1].tag, "VBZ");
        let we = render("present_perfect_continuous_positive", &WE);
        assert_eq!(we.sentence, "We have been reading since morning.");
        assert_eq!(we.tags[1].tag, "VBP");
    }

    #[test]
    fn past_continuous_uses_were_only_for_they_and_we() {
        assert_eq!(
            render("past_continuous_positive", &WE).sentence,
            "We were reading when I called."
        );
        assert_eq!(
            render("past_continuous_positive", &YOU).sentence,
            "You was reading when I called."
        );
    }

    #[test]
    fn future_templates_are_person_independent() {
        assert_eq!(
            render("future_simple_negative", &SHE).sentence,
            "She will not read the book tomorrow."
        );
        assert_eq!(
            render("future_simple_negative", &WE).sentence,
            "We will not read the book tomorrow."
        );
        assert_eq!(
            render("future_continuous_positive", &YOU).sentence,
            "You will be reading the book tomorrow."
        );
        let wh = TemplateSet::Extended
            .find("future_simple_wh")
            .unwrap()
            .render(&select(&WE, 1), true);
        assert_eq!(wh.sentence, "Where will we read?");
    }

    #[test]
    fn naive_inflection_is_not_corrected() {
        let selection = Selection {
            pronoun: &SHE,
            noun: "song",
            time: "night",
            verb: "study",
            variant: 0,
        };
        let example = TemplateSet::Classic.templates()[0].render(&selection, true);
        assert_eq!(example.sentence, "She studys the song every night.");
        assert_eq!(example.tags[1].phonetic, "studys");
    }

    #[test]
    fn render_without_attributes_strips_features() {
        let template = &TemplateSet::Classic.templates()[0];
        let example = template.render(&select(&SHE, 0), false);
        assert!(!example.has_attributes());
    }

    #[test]
    fn classic_is_a_prefix_of_extended() {
        fn names(set: TemplateSet) -> Vec<&'static str> {
            set.templates().iter().map(|t| t.name).collect()
        }
        let (classic, extended) = (names(TemplateSet::Classic), names(TemplateSet::Extended));
        assert_eq!(classic.len(), 8);
        assert_eq!(extended.len(), 10);
        assert_eq!(&extended[..8], &classic[..]);
    }

    #[test]
    fn both_sets_are_covered_by_both_table_versions() {
        let lexicon = Lexicon::standard();
        for set in [TemplateSet::Classic, TemplateSet::Extended] {
            for version in [ReferenceVersion::Standard, ReferenceVersion::Full] {
                set.check_coverage(&lexicon, version.tables()).unwrap();
            }
        }
    }

    #[test]
    fn vocabulary_lists_agreement_variants() {
        let vocabulary = TemplateSet::Classic.vocabulary(&Lexicon::standard());
        assert!(vocabulary.tags.contains("VBZ"));
        assert!(vocabulary.tags.contains("VBP"));
        assert!(!vocabulary.tenses.contains("Future Continuous"));
        let extended = TemplateSet::Extended.vocabulary(&Lexicon::standard());
        assert!(extended.tenses.contains("Future Continuous"));
    }
}
