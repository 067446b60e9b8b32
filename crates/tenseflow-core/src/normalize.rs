//! Normalization of arbitrary analyzer payloads into displayable examples.
//!
//! Accepted shapes, tried in order:
//!
//! 1. a JSON array, each element an example
//! 2. an object whose `messages` field is an array of examples
//! 3. a single example object (string `sentence`, string `tense`, array `tags`)
//!
//! Anything else, and any accepted shape that yields no examples, becomes the
//! fixed default example. Normalization never fails and never touches its input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{GrammarError, GrammarResult};
use crate::model::{default_example, Example, Tag};
use crate::reference::{ReferenceTables, ReferenceVersion};
use crate::session::Notice;

/// How individual elements of an accepted payload are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementPolicy {
    /// Decode every element; mistyped fields become empty.
    #[default]
    Trust,
    /// Drop elements that are not objects, have an empty sentence, or name a
    /// tense the reference table does not know.
    Validate,
}

impl ElementPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementPolicy::Trust => "trust",
            ElementPolicy::Validate => "validate",
        }
    }
}

impl fmt::Display for ElementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementPolicy {
    type Err = GrammarError;

    fn from_str(s: &str) -> GrammarResult<Self> {
        match s {
            "trust" => Ok(ElementPolicy::Trust),
            "validate" => Ok(ElementPolicy::Validate),
            other => Err(GrammarError::unknown(
                "element policy",
                other,
                "trust, validate",
            )),
        }
    }
}

/// Which payload shape was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseShape {
    Array,
    Messages,
    Single,
    Unrecognized,
}

impl ResponseShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseShape::Array => "array",
            ResponseShape::Messages => "messages",
            ResponseShape::Single => "single",
            ResponseShape::Unrecognized => "unrecognized",
        }
    }
}

/// Normalized examples plus how they were obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeReport {
    /// Never empty.
    pub examples: Vec<Example>,
    pub shape: ResponseShape,
    /// Elements removed by [`ElementPolicy::Validate`].
    pub dropped: usize,
    /// Whether `examples` is the default example rather than payload content.
    pub fell_back: bool,
}

impl NormalizeReport {
    /// The notice a user should see for this outcome, if any.
    ///
    /// Any outcome that shows the default example yields a notice saying so.
    pub fn notice(&self) -> Option<Notice> {
        match (self.fell_back, self.dropped) {
            (true, 0) => Some(Notice::UnrecognizedResponse),
            (true, dropped) => Some(Notice::NoUsableElements(dropped)),
            (false, 0) => None,
            (false, dropped) => Some(Notice::DroppedElements(dropped)),
        }
    }
}

/// Maps analyzer JSON onto [`Example`] records.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    tables: &'static ReferenceTables,
    policy: ElementPolicy,
    attributes: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(
            ReferenceVersion::default().tables(),
            ElementPolicy::default(),
            true,
        )
    }
}

impl Normalizer {
    pub fn new(tables: &'static ReferenceTables, policy: ElementPolicy, attributes: bool) -> Self {
        Self {
            tables,
            policy,
            attributes,
        }
    }

    pub fn policy(&self) -> ElementPolicy {
        self.policy
    }

    /// The example substituted when a payload is unusable.
    pub fn fallback(&self) -> Example {
        self.finish(default_example())
    }

    /// Normalize `payload`, discarding the report details.
    pub fn normalize(&self, payload: &Value) -> Vec<Example> {
        self.normalize_report(payload).examples
    }

    pub fn normalize_report(&self, payload: &Value) -> NormalizeReport {
        let (shape, elements) = match payload {
            Value::Array(items) => (ResponseShape::Array, items.as_slice()),
            Value::Object(map) => match map.get("messages") {
                Some(Value::Array(items)) => (ResponseShape::Messages, items.as_slice()),
                _ if is_single_example(map) => {
                    (ResponseShape::Single, std::slice::from_ref(payload))
                }
                _ => (ResponseShape::Unrecognized, [].as_slice()),
            },
            _ => (ResponseShape::Unrecognized, [].as_slice()),
        };

        let mut dropped = 0;
        let mut examples = Vec::with_capacity(elements.len());
        for element in elements {
            match self.decode(element) {
                Some(example) => examples.push(example),
                None => dropped += 1,
            }
        }

        let fell_back = examples.is_empty();
        if fell_back {
            examples.push(self.fallback());
        }

        debug!(
            target: "tenseflow::normalize",
            shape = shape.as_str(),
            count = examples.len(),
            dropped,
            fell_back,
            "response_normalized"
        );

        NormalizeReport {
            examples,
            shape,
            dropped,
            fell_back,
        }
    }

    fn decode(&self, element: &Value) -> Option<Example> {
        let example = match (self.policy, element) {
            (_, Value::Object(map)) => decode_lossy(map),
            (ElementPolicy::Trust, _) => decode_lossy(&Map::new()),
            (ElementPolicy::Validate, _) => return None,
        };

        if self.policy == ElementPolicy::Validate
            && (example.sentence.trim().is_empty() || !self.tables.has_tense(&example.tense))
        {
            return None;
        }
        Some(self.finish(example))
    }

    fn finish(&self, example: Example) -> Example {
        if self.attributes {
            example
        } else {
            example.without_attributes()
        }
    }
}

/// Normalize with the default settings: full tables, trusted elements,
/// attributes kept.
pub fn normalize(payload: &Value) -> Vec<Example> {
    Normalizer::default().normalize(payload)
}

fn is_single_example(map: &Map<String, Value>) -> bool {
    matches!(map.get("sentence"), Some(Value::String(_)))
        && matches!(map.get("tense"), Some(Value::String(_)))
        && matches!(map.get("tags"), Some(Value::Array(_)))
}

fn string_field(map: &Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn parsed_field<T: FromStr>(map: &Map<String, Value>, key: &str) -> Option<T> {
    map.get(key)?.as_str()?.parse().ok()
}

/// Transcription keys, current name first.
const PHONETIC_KEYS: [&str; 3] = ["phonetic", "phonemic", "ipa"];

fn decode_tag(value: &Value) -> Option<Tag> {
    let map = value.as_object()?;
    let phonetic = PHONETIC_KEYS
        .iter()
        .find_map(|key| map.get(*key)?.as_str())
        .map(str::to_string)
        .unwrap_or_default();
    Some(Tag {
        word: string_field(map, "word"),
        tag: string_field(map, "tag"),
        phonetic,
    })
}

fn decode_lossy(map: &Map<String, Value>) -> Example {
    let tags = match map.get("tags") {
        Some(Value::Array(items)) => items.iter().filter_map(decode_tag).collect(),
        _ => Vec::new(),
    };
    Example {
        sentence: string_field(map, "sentence"),
        tense: string_field(map, "tense"),
        tags,
        person: parsed_field(map, "person"),
        number: parsed_field(map, "number"),
        polarity: parsed_field(map, "polarity"),
        question_type: parsed_field(map, "questionType"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Person, QuestionType};
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "sentence": "They play the game.",
            "tense": "Present Simple",
            "tags": [{"word": "They", "tag": "PRP", "phonetic": "ðeɪ"}],
            "person": "third",
            "questionType": "none"
        })
    }

    #[test]
    fn mistyped_fields_become_empty_under_trust() {
        let out = normalize(&json!([{"sentence": 5, "tense": null, "tags": "x"}]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].sentence, "");
        assert_eq!(out[0].tense, "");
        assert!(out[0].tags.is_empty());
    }

    #[test]
    fn attributes_are_parsed_when_present() {
        let out = normalize(&json!([sample()]));
        assert_eq!(out[0].person, Some(Person::Third));
        assert_eq!(out[0].question_type, Some(QuestionType::Statement));
        assert_eq!(out[0].number, None);
    }

    #[test]
    fn attributes_are_stripped_when_disabled() {
        let normalizer =
            Normalizer::new(ReferenceVersion::Full.tables(), ElementPolicy::Trust, false);
        let out = normalizer.normalize(&json!([sample()]));
        assert!(!out[0].has_attributes());
        assert!(!normalizer.fallback().has_attributes());
    }

    #[test]
    fn legacy_phonemic_key_is_read() {
        let out = normalize(&json!([{
            "sentence": "x", "tense": "Past Simple",
            "tags": [{"word": "did", "tag": "AUX", "phonemic": "dɪd"}]
        }]));
        assert_eq!(out[0].tags[0].phonetic, "dɪd");
    }

    #[test]
    fn ipa_key_is_read() {
        let out = normalize(&json!([{
            "sentence": "She has been reading a book since morning.",
            "tense": "Present Perfect Continuous",
            "tags": [{"word": "She", "tag": "PRP", "ipa": "ʃiː"}]
        }]));
        assert_eq!(out[0].tags[0].phonetic, "ʃiː");
    }

    #[test]
    fn current_phonetic_key_wins_over_legacy_keys() {
        let out = normalize(&json!([{
            "sentence": "x", "tense": "Past Simple",
            "tags": [{"word": "did", "tag": "AUX", "phonetic": "dɪd", "ipa": "did"}]
        }]));
        assert_eq!(out[0].tags[0].phonetic, "dɪd");
    }

    #[test]
    fn messages_wrapper_must_hold_an_array() {
        let report = Normalizer::default()
            .normalize_report(&json!({"messages": "nope"}));
        assert_eq!(report.shape, ResponseShape::Unrecognized);
        assert_eq!(report.examples, vec![default_example()]);
    }

    #[test]
    fn report_notice_follows_outcome() {
        let normalizer = Normalizer::default();
        assert_eq!(
            normalizer.normalize_report(&json!([sample()])).notice(),
            None
        );
        assert_eq!(
            normalizer.normalize_report(&json!(null)).notice(),
            Some(Notice::UnrecognizedResponse)
        );
        assert_eq!(
            normalizer.normalize_report(&json!([])).notice(),
            Some(Notice::UnrecognizedResponse)
        );

        let strict = Normalizer::new(
            ReferenceVersion::Full.tables(),
            ElementPolicy::Validate,
            true,
        );
        let report = strict.normalize_report(&json!([
            sample(),
            7,
            {"sentence": "", "tense": "Past Simple", "tags": []}
        ]));
        assert_eq!(report.examples.len(), 1);
        assert_eq!(report.notice(), Some(Notice::DroppedElements(2)));

        let report = strict.normalize_report(&json!([
            {"sentence": "x", "tense": "Bogus", "tags": []}
        ]));
        assert!(report.fell_back);
        assert_eq!(report.notice(), Some(Notice::NoUsableElements(1)));
    }

    #[test]
    fn policy_parses_from_name() {
        assert_eq!(
            "validate".parse::<ElementPolicy>().unwrap(),
            ElementPolicy::Validate
        );
        assert!("lenient".parse::<ElementPolicy>().is_err());
    }
}
