//! Canonical records rendered by the tutor: tagged tokens and example sentences.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{GrammarError, GrammarResult};

/// Grammatical person of a subject pronoun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    First,
    Second,
    Third,
}

/// Grammatical number of a subject pronoun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Plural,
}

/// Whether a sentence is affirmative or negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

/// Question classification of a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum QuestionType {
    /// WH-question ("What are you reading?").
    #[serde(rename = "WH")]
    Wh,
    /// Yes/no question ("Did you read the book?").
    #[serde(rename = "interrogative")]
    Interrogative,
    /// Plain statement.
    #[serde(rename = "none")]
    Statement,
}

impl Person {
    pub fn as_str(&self) -> &'static str {
        match self {
            Person::First => "first",
            Person::Second => "second",
            Person::Third => "third",
        }
    }
}

impl Number {
    pub fn as_str(&self) -> &'static str {
        match self {
            Number::Singular => "singular",
            Number::Plural => "plural",
        }
    }
}

impl Polarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
        }
    }
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Wh => "WH",
            QuestionType::Interrogative => "interrogative",
            QuestionType::Statement => "none",
        }
    }
}

macro_rules! display_via_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_via_as_str!(Person, Number, Polarity, QuestionType);

impl FromStr for Person {
    type Err = GrammarError;

    fn from_str(s: &str) -> GrammarResult<Self> {
        match s {
            "first" => Ok(Person::First),
            "second" => Ok(Person::Second),
            "third" => Ok(Person::Third),
            other => Err(GrammarError::unknown(
                "person",
                other,
                "first, second, third",
            )),
        }
    }
}

impl FromStr for Number {
    type Err = GrammarError;

    fn from_str(s: &str) -> GrammarResult<Self> {
        match s {
            "singular" => Ok(Number::Singular),
            "plural" => Ok(Number::Plural),
            other => Err(GrammarError::unknown("number", other, "singular, plural")),
        }
    }
}

impl FromStr for Polarity {
    type Err = GrammarError;

    fn from_str(s: &str) -> GrammarResult<Self> {
        match s {
            "positive" => Ok(Polarity::Positive),
            "negative" => Ok(Polarity::Negative),
            other => Err(GrammarError::unknown(
                "polarity",
                other,
                "positive, negative",
            )),
        }
    }
}

impl FromStr for QuestionType {
    type Err = GrammarError;

    fn from_str(s: &str) -> GrammarResult<Self> {
        match s {
            "WH" => Ok(QuestionType::Wh),
            "interrogative" => Ok(QuestionType::Interrogative),
            "none" => Ok(QuestionType::Statement),
            other => Err(GrammarError::unknown(
                "question type",
                other,
                "WH, interrogative, none",
            )),
        }
    }
}

/// A subject pronoun from the lexical pool together with its agreement features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PronounEntry {
    pub word: &'static str,
    pub person: Person,
    pub number: Number,
}

impl PronounEntry {
    pub const fn new(word: &'static str, person: Person, number: Number) -> Self {
        Self {
            word,
            person,
            number,
        }
    }

    /// Third person singular subjects take the -s / does / is / has forms.
    pub fn is_third_singular(&self) -> bool {
        self.person == Person::Third && self.number == Number::Singular
    }

    /// Pronouns that take "were" in the past continuous template.
    pub fn takes_were(&self) -> bool {
        self.word.eq_ignore_ascii_case("they") || self.word.eq_ignore_ascii_case("we")
    }

    /// Surface form inside a question, where the subject is not sentence-initial.
    pub fn inner_form(&self) -> String {
        if self.word == "I" {
            self.word.to_string()
        } else {
            self.word.to_lowercase()
        }
    }
}

/// One annotated token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Tag {
    /// Surface form as it appears in the sentence.
    pub word: String,
    /// POS code, normally a key of the tag reference table.
    pub tag: String,
    /// IPA-like transcription.
    #[serde(default, alias = "phonemic", alias = "ipa")]
    pub phonetic: String,
}

impl Tag {
    pub fn new(
        word: impl Into<String>,
        tag: impl Into<String>,
        phonetic: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
            phonetic: phonetic.into(),
        }
    }
}

/// Canonical example record: a sentence, its tense and its per-token tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub sentence: String,
    pub tense: String,
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarity: Option<Polarity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,
}

impl Example {
    /// Drop the extended grammatical attributes, keeping sentence, tense and tags.
    pub fn without_attributes(mut self) -> Self {
        self.person = None;
        self.number = None;
        self.polarity = None;
        self.question_type = None;
        self
    }

    /// Whether any extended grammatical attribute is set.
    pub fn has_attributes(&self) -> bool {
        self.person.is_some()
            || self.number.is_some()
            || self.polarity.is_some()
            || self.question_type.is_some()
    }
}

/// The example shown before any live analysis arrives and whenever a
/// response cannot be used.
pub fn default_example() -> Example {
    let tag = |word: &str, code: &str, phonetic: &str| Tag::new(word, code, phonetic);
    Example {
        sentence: "She has been reading a book since morning.".to_string(),
        tense: "Present Perfect Continuous".to_string(),
        tags: vec![
            tag("She", "PRP", "ʃiː"),
            tag("has", "VBZ", "hæz"),
            tag("been", "VBN", "bɪn"),
            tag("reading", "VBG", "ˈriːdɪŋ"),
            tag("a", "DT", "ə"),
            tag("book", "NN", "bʊk"),
            tag("since", "IN", "sɪns"),
            tag("morning", "NN", "ˈmɔːrnɪŋ"),
        ],
        person: Some(Person::Third),
        number: Some(Number::Singular),
        polarity: Some(Polarity::Positive),
        question_type: Some(QuestionType::Statement),
    }
}

/// Request body sent to the remote analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzeRequest {
    /// Trimmed, non-empty learner input.
    pub sentence: String,
}

/// Response shapes the remote analyzer may answer with.
///
/// Only used to describe the contract; decoding goes through the
/// normalizer, which accepts any JSON.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AnalyzerResponse {
    /// A bare array of examples.
    Examples(Vec<Example>),
    /// An object wrapping the examples in a `messages` array.
    Messages { messages: Vec<Example> },
    /// A single example object.
    Single(Example),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn example_serializes_with_camel_case_and_skips_absent_attributes() {
        let example = Example {
            sentence: "A".into(),
            tense: "Present Simple".into(),
            tags: vec![],
            person: None,
            number: None,
            polarity: None,
            question_type: Some(QuestionType::Wh),
        };
        let value = serde_json::to_value(&example).unwrap();
        assert_eq!(
            value,
            json!({"sentence": "A", "tense": "Present Simple", "tags": [], "questionType": "WH"})
        );
    }

    #[test]
    fn tag_accepts_legacy_phonemic_key() {
        let value = json!({"word": "has", "tag": "VBZ", "phonemic": "hæz"});
        let tag: Tag = serde_json::from_value(value).unwrap();
        assert_eq!(tag.phonetic, "hæz");

        let value = json!({"word": "has", "tag": "VBZ"});
        let bare: Tag = serde_json::from_value(value).unwrap();
        assert_eq!(bare.phonetic, "");
    }

    #[test]
    fn tag_accepts_ipa_key() {
        let value = json!({"word": "She", "tag": "PRP", "ipa": "ʃiː"});
        let tag: Tag = serde_json::from_value(value).unwrap();
        assert_eq!(tag, Tag::new("She", "PRP", "ʃiː"));
    }

    #[test]
    fn third_singular_detection_uses_features() {
        let she = PronounEntry::new("She", Person::Third, Number::Singular);
        let they = PronounEntry::new("They", Person::Third, Number::Plural);
        assert!(she.is_third_singular());
        assert!(!they.is_third_singular());
        assert!(they.takes_were());
        assert!(!she.takes_were());
    }

    #[test]
    fn inner_form_keeps_first_person_capital() {
        let first = PronounEntry::new("I", Person::First, Number::Singular);
        let third = PronounEntry::new("She", Person::Third, Number::Singular);
        assert_eq!(first.inner_form(), "I");
        assert_eq!(third.inner_form(), "she");
    }

    #[test]
    fn enum_names_round_trip_through_from_str() {
        assert_eq!("WH".parse::<QuestionType>().unwrap(), QuestionType::Wh);
        assert_eq!(QuestionType::Statement.to_string(), "none");
        assert!("fourth".parse::<Person>().is_err());
    }
}
