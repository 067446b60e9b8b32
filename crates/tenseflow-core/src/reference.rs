//! Static POS tag and tense reference tables.
//!
//! Two table versions exist. `standard` carries one-line tag explanations and
//! a single affirmative entry per tense. `full` adds the wider tag set with
//! reference links and per-tense negative, interrogative and WH-question
//! forms. Tables are built once per process and handed out by reference.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{GrammarError, GrammarResult};
use crate::model::{Polarity, QuestionType};

/// The ten tense names every table version describes, in display order.
pub const TENSE_NAMES: [&str; 10] = [
    "Present Simple",
    "Present Continuous",
    "Present Perfect",
    "Present Perfect Continuous",
    "Past Simple",
    "Past Continuous",
    "Past Perfect",
    "Future Simple",
    "Future Continuous",
    "Future Perfect",
];

/// Which reference table version a profile renders against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceVersion {
    Standard,
    #[default]
    Full,
}

impl ReferenceVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceVersion::Standard => "standard",
            ReferenceVersion::Full => "full",
        }
    }

    /// The shared table for this version.
    pub fn tables(&self) -> &'static ReferenceTables {
        match self {
            ReferenceVersion::Standard => &STANDARD,
            ReferenceVersion::Full => &FULL,
        }
    }
}

impl fmt::Display for ReferenceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReferenceVersion {
    type Err = GrammarError;

    fn from_str(s: &str) -> GrammarResult<Self> {
        match s {
            "standard" => Ok(ReferenceVersion::Standard),
            "full" => Ok(ReferenceVersion::Full),
            other => Err(GrammarError::unknown(
                "reference table",
                other,
                "standard, full",
            )),
        }
    }
}

/// Explanation of one POS code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagInfo {
    pub code: &'static str,
    /// Short label ("Personal Pronoun").
    pub label: &'static str,
    /// Description following the label.
    pub description: &'static str,
    /// Further reading, when the table version links one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<&'static str>,
}

/// Formula, usage and examples for one form of a tense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenseForm {
    pub formula: &'static str,
    pub usage: &'static str,
    /// Newline-separated example sentences.
    pub example: &'static str,
}

/// Reference entry for one tense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenseInfo {
    pub name: &'static str,
    pub affirmative: TenseForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative: Option<TenseForm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogative: Option<TenseForm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wh_question: Option<TenseForm>,
}

impl TenseInfo {
    /// The form matching a sentence's question type and polarity.
    ///
    /// Question type wins over polarity; missing variants fall back to the
    /// affirmative form.
    pub fn form(&self, polarity: Option<Polarity>, question: Option<QuestionType>) -> &TenseForm {
        let variant = match (question, polarity) {
            (Some(QuestionType::Wh), _) => self.wh_question.as_ref(),
            (Some(QuestionType::Interrogative), _) => self.interrogative.as_ref(),
            (_, Some(Polarity::Negative)) => self.negative.as_ref(),
            _ => None,
        };
        variant.unwrap_or(&self.affirmative)
    }
}

/// A complete, immutable tag and tense reference.
#[derive(Debug, Serialize)]
pub struct ReferenceTables {
    pub version: ReferenceVersion,
    tags: Vec<TagInfo>,
    tenses: Vec<TenseInfo>,
}

impl ReferenceTables {
    /// Tag entries in display order.
    pub fn tags(&self) -> &[TagInfo] {
        &self.tags
    }

    /// Tense entries in display order.
    pub fn tenses(&self) -> &[TenseInfo] {
        &self.tenses
    }

    pub fn tag(&self, code: &str) -> Option<&TagInfo> {
        self.tags.iter().find(|info| info.code == code)
    }

    pub fn tense(&self, name: &str) -> Option<&TenseInfo> {
        self.tenses.iter().find(|info| info.name == name)
    }

    pub fn has_tag(&self, code: &str) -> bool {
        self.tag(code).is_some()
    }

    pub fn has_tense(&self, name: &str) -> bool {
        self.tense(name).is_some()
    }

    /// Look up the form of `name` matching the given polarity and question type.
    pub fn tense_form(
        &self,
        name: &str,
        polarity: Option<Polarity>,
        question: Option<QuestionType>,
    ) -> Option<&TenseForm> {
        self.tense(name).map(|info| info.form(polarity, question))
    }
}

const fn tag(code: &'static str, label: &'static str, description: &'static str) -> TagInfo {
    TagInfo {
        code,
        label,
        description,
        reference: None,
    }
}

const fn linked(
    code: &'static str,
    label: &'static str,
    description: &'static str,
    reference: &'static str,
) -> TagInfo {
    TagInfo {
        code,
        label,
        description,
        reference: Some(reference),
    }
}

const fn form(formula: &'static str, usage: &'static str, example: &'static str) -> TenseForm {
    TenseForm {
        formula,
        usage,
        example,
    }
}

const fn simple_tense(name: &'static str, affirmative: TenseForm) -> TenseInfo {
    TenseInfo {
        name,
        affirmative,
        negative: None,
        interrogative: None,
        wh_question: None,
    }
}

const fn full_tense(
    name: &'static str,
    affirmative: TenseForm,
    negative: TenseForm,
    interrogative: TenseForm,
    wh_question: TenseForm,
) -> TenseInfo {
    TenseInfo {
        name,
        affirmative,
        negative: Some(negative),
        interrogative: Some(interrogative),
        wh_question: Some(wh_question),
    }
}

static STANDARD: LazyLock<ReferenceTables> = LazyLock::new(|| ReferenceTables {
    version: ReferenceVersion::Standard,
    tags: vec![
        tag("PRP", "Pronoun", "replaces a noun (e.g., she, he, they)."),
        tag(
            "VBZ",
            "Verb, 3rd person singular present",
            "(e.g., has, does).",
        ),
        tag(
            "VBP",
            "Verb, non-3rd person singular present",
            "(e.g., have, do).",
        ),
        tag("VBN", "Verb, past participle", "(e.g., been, eaten)."),
        tag(
            "VBG",
            "Present participle or gerund verb",
            "(e.g., reading, going).",
        ),
        tag("VBD", "Verb, past tense", "(e.g., did, went)."),
        tag("VB", "Verb, base form", "(e.g., go, read, eat)."),
        tag("MD", "Modal auxiliary", "(e.g., will, would)."),
        tag(
            "DT",
            "Determiner",
            "introduces a noun (e.g., a, the, some).",
        ),
        tag(
            "NN",
            "Noun",
            "person, place, thing (e.g., book, idea, apple).",
        ),
        tag(
            "IN",
            "Preposition",
            "shows relationship (e.g., since, on, at).",
        ),
        tag("WP", "WH-pronoun", "(e.g., what, when, why)."),
        tag(
            "AUX",
            "Auxiliary verb",
            "helps the main verb (e.g., do, did, is).",
        ),
        tag(
            "PART",
            "Particle",
            "negation or infinitive marker (e.g., not).",
        ),
    ],
    tenses: vec![
        simple_tense(
            "Present Simple",
            form(
                "Subject + base verb (s/es for 3rd person)",
                "Routine or general truth.",
                "She reads every morning.",
            ),
        ),
        simple_tense(
            "Present Continuous",
            form(
                "Subject + am/is/are + verb-ing",
                "Action happening now.",
                "She is reading a book.",
            ),
        ),
        simple_tense(
            "Present Perfect",
            form(
                "Subject + has/have + past participle",
                "Action completed at unspecified time.",
                "She has read the book.",
            ),
        ),
        simple_tense(
            "Present Perfect Continuous",
            form(
                "Subject + has/have + been + verb-ing",
                "Action started in past and continues.",
                "She has been reading since morning.",
            ),
        ),
        simple_tense(
            "Past Simple",
            form(
                "Subject + past verb",
                "Completed action in past.",
                "She read the book yesterday.",
            ),
        ),
        simple_tense(
            "Past Continuous",
            form(
                "Subject + was/were + verb-ing",
                "Action in progress in past.",
                "She was reading when I called.",
            ),
        ),
        simple_tense(
            "Past Perfect",
            form(
                "Subject + had + past participle",
                "Action completed before another past action.",
                "She had read it before class.",
            ),
        ),
        simple_tense(
            "Future Simple",
            form(
                "Subject + will + base verb",
                "Prediction or plan.",
                "She will read tomorrow.",
            ),
        ),
        simple_tense(
            "Future Continuous",
            form(
                "Subject + will be + verb-ing",
                "Action that will be in progress.",
                "She will be reading at noon.",
            ),
        ),
        simple_tense(
            "Future Perfect",
            form(
                "Subject + will have + past participle",
                "Action completed before a future time.",
                "She will have read it by tomorrow.",
            ),
        ),
    ],
});

const WIKI_POS: &str = "https://en.wikipedia.org/wiki/Part_of_speech";
const WIKI_NOUN: &str = "https://en.wikipedia.org/wiki/Noun";
const WIKI_PROPER: &str = "https://en.wikipedia.org/wiki/Proper_noun";
const NLTK_TAGGING: &str = "https://www.tutorialspoint.com/natural_language_toolkit/natural_language_toolkit_basics_of_part_of_speech_tagging.htm";
const DETERMINERS: &str =
    "https://learnenglishweekly.com/advanced-english/pronouns-and-determiners-guide";

static FULL: LazyLock<ReferenceTables> = LazyLock::new(|| ReferenceTables {
    version: ReferenceVersion::Full,
    tags: vec![
        linked(
            "PRP",
            "Personal Pronoun",
            "replaces a noun (e.g., I, you, he, she, it, we, they).",
            WIKI_POS,
        ),
        linked(
            "PRP$",
            "Possessive Pronoun",
            "shows ownership (e.g., my, your, his, her, its, our, their).",
            DETERMINERS,
        ),
        linked(
            "WP",
            "WH-pronoun",
            "introduces questions (e.g., who, what, which).",
            WIKI_POS,
        ),
        linked(
            "WP$",
            "Possessive WH-pronoun",
            "(e.g., whose).",
            DETERMINERS,
        ),
        linked(
            "EX",
            "Existential there",
            "indicates existence (e.g., there is, there are).",
            NLTK_TAGGING,
        ),
        linked(
            "VB",
            "Verb, base form",
            "(e.g., go, read, eat).",
            NLTK_TAGGING,
        ),
        linked(
            "VBP",
            "Verb, non-3rd person singular present",
            "(e.g., run, have, do).",
            NLTK_TAGGING,
        ),
        linked(
            "VBZ",
            "Verb, 3rd person singular present",
            "(e.g., runs, has, does).",
            NLTK_TAGGING,
        ),
        linked(
            "VBD",
            "Verb, past tense",
            "(e.g., went, ate, played).",
            WIKI_POS,
        ),
        linked(
            "VBN",
            "Verb, past participle",
            "(e.g., eaten, gone, played).",
            WIKI_POS,
        ),
        linked(
            "VBG",
            "Verb, gerund / present participle",
            "(e.g., running, reading).",
            WIKI_POS,
        ),
        linked(
            "MD",
            "Modal verb",
            "indicates possibility, necessity, or future (e.g., can, could, will, would, should, must).",
            NLTK_TAGGING,
        ),
        linked(
            "AUX",
            "Auxiliary verb",
            "helps main verb form tenses/voices (e.g., am, is, are, have, be, do).",
            WIKI_POS,
        ),
        linked(
            "NN",
            "Noun, singular or mass",
            "(e.g., book, apple, water).",
            WIKI_NOUN,
        ),
        linked(
            "NNS",
            "Noun, plural",
            "(e.g., books, apples, cars).",
            WIKI_NOUN,
        ),
        linked(
            "NNP",
            "Proper noun, singular",
            "(e.g., John, London, Microsoft).",
            WIKI_PROPER,
        ),
        linked(
            "NNPS",
            "Proper noun, plural",
            "(e.g., Americans, Beatles).",
            WIKI_PROPER,
        ),
        linked(
            "DT",
            "Determiner",
            "introduces a noun (e.g., a, an, the, some, this, those).",
            DETERMINERS,
        ),
        tag(
            "PDT",
            "Predeterminer",
            "comes before a determiner (e.g., all, both, half).",
        ),
        tag("WDT", "WH-determiner", "(e.g., which, what)."),
        tag(
            "JJ",
            "Adjective",
            "describes a noun (e.g., big, red, happy).",
        ),
        tag(
            "JJR",
            "Adjective, comparative",
            "(e.g., bigger, faster, happier).",
        ),
        tag(
            "JJS",
            "Adjective, superlative",
            "(e.g., biggest, fastest, happiest).",
        ),
        tag(
            "RB",
            "Adverb",
            "modifies a verb, adjective, or another adverb (e.g., quickly, very, well).",
        ),
        tag(
            "RBR",
            "Adverb, comparative",
            "(e.g., faster, earlier, better).",
        ),
        tag(
            "RBS",
            "Adverb, superlative",
            "(e.g., fastest, earliest, best).",
        ),
        tag("WRB", "WH-adverb", "(e.g., where, when, why, how)."),
        tag(
            "IN",
            "Preposition or subordinating conjunction",
            "(e.g., in, on, at, because, since, although).",
        ),
        tag(
            "CC",
            "Coordinating conjunction",
            "(e.g., and, but, or, yet, so).",
        ),
        tag("TO", "Infinitive marker", "(e.g., to go, to read)."),
        tag(
            "PART",
            "Particle",
            "negation or other function particle (e.g., not).",
        ),
        tag(
            "UH",
            "Interjection",
            "expresses emotion (e.g., oh, wow, hey).",
        ),
        tag("CD", "Cardinal number", "(e.g., one, two, 100)."),
        tag("LS", "List item marker", "(e.g., 1., A., i.)."),
        tag("FW", "Foreign word", "(e.g., bonjour, gracias)."),
        tag("SYM", "Symbol", "(e.g., $, %, +, =)."),
    ],
    tenses: vec![
        full_tense(
            "Present Simple",
            form(
                "Subject + base verb (s/es for 3rd person)",
                "Routine or general truth.",
                "I walk to school every day.\nHe plays football on Sundays.\nShe reads every morning.\nThey study English after class.\nThe sun rises in the east.",
            ),
            form(
                "Subject + do/does not + base verb",
                "To say something is not true or not happening regularly.",
                "I do not like coffee.\nHe does not play tennis.\nThey do not watch TV.",
            ),
            form(
                "Do/Does + subject + base verb?",
                "To ask about habits or general truth.",
                "Do you play football?\nDoes she like pizza?\nDo they study English?",
            ),
            form(
                "Wh- + do/does + subject + base verb?",
                "To ask detailed questions.",
                "Where do you live?\nWhat does she read?\nWhen do they arrive?",
            ),
        ),
        full_tense(
            "Present Continuous",
            form(
                "Subject + am/is/are + verb-ing",
                "Action happening now.",
                "I am eating lunch right now.\nHe is watching TV.\nShe is reading a book.\nThey are playing football.\nWe are studying English.",
            ),
            form(
                "Subject + am/is/are not + verb-ing",
                "To say an action is not happening right now.",
                "I am not sleeping.\nHe is not watching TV.\nWe are not running.",
            ),
            form(
                "Am/Is/Are + subject + verb-ing?",
                "To ask if something is happening right now.",
                "Am I disturbing you?\nIs she working?\nAre they coming now?",
            ),
            form(
                "Wh- + am/is/are + subject + verb-ing?",
                "To ask about details of actions happening now.",
                "What are you doing?\nWhere is she going?\nWhy are they shouting?",
            ),
        ),
        full_tense(
            "Present Perfect",
            form(
                "Subject + has/have + past participle",
                "Action completed at unspecified time.",
                "I have finished my homework.\nHe has eaten breakfast.\nShe has read the book.\nThey have traveled to Japan.\nWe have watched that movie.",
            ),
            form(
                "Subject + has/have not + past participle",
                "To say an action has not been completed.",
                "I have not seen that movie.\nHe has not done his homework.\nWe have not visited London.",
            ),
            form(
                "Has/Have + subject + past participle?",
                "To ask if an action has been completed.",
                "Have you done your homework?\nHas she arrived?\nHave they finished dinner?",
            ),
            form(
                "Wh- + has/have + subject + past participle?",
                "To ask about details of past actions with present relevance.",
                "Where have you been?\nWhat has she done?\nWhich countries have they visited?",
            ),
        ),
        full_tense(
            "Present Perfect Continuous",
            form(
                "Subject + has/have + been + verb-ing",
                "Action started in past and continues.",
                "I have been studying since morning.\nHe has been working all day.\nShe has been reading since morning.\nThey have been playing football for two hours.\nWe have been waiting for you.",
            ),
            form(
                "Subject + has/have not + been + verb-ing",
                "To say an action has not continued.",
                "I have not been sleeping well.\nHe has not been working today.\nWe have not been studying enough.",
            ),
            form(
                "Has/Have + subject + been + verb-ing?",
                "To ask if an action has been continuing.",
                "Have you been studying?\nHas she been working?\nHave they been playing football?",
            ),
            form(
                "Wh- + has/have + subject + been + verb-ing?",
                "To ask about the details of a continuing action.",
                "What have you been doing?\nWhere has she been going?\nWhy have they been waiting?",
            ),
        ),
        full_tense(
            "Past Simple",
            form(
                "Subject + past verb",
                "Completed action in past.",
                "I walked to school yesterday.\nHe played football last Sunday.\nShe read the book yesterday.\nThey studied English last night.\nWe watched that movie last week.",
            ),
            form(
                "Subject + did not + base verb",
                "To say something did not happen in the past.",
                "I did not watch TV.\nHe did not play football.\nThey did not study yesterday.",
            ),
            form(
                "Did + subject + base verb?",
                "To ask about past actions.",
                "Did you go to school?\nDid she read the book?\nDid they watch the movie?",
            ),
            form(
                "Wh- + did + subject + base verb?",
                "To ask detailed past questions.",
                "What did you eat?\nWhere did she go?\nWhen did they arrive?",
            ),
        ),
        full_tense(
            "Past Continuous",
            form(
                "Subject + was/were + verb-ing",
                "Action in progress in past.",
                "I was eating dinner when he arrived.\nHe was watching TV at 8 PM.\nShe was reading when I called.\nThey were playing football yesterday.\nWe were studying while it was raining.",
            ),
            form(
                "Subject + was/were not + verb-ing",
                "To say an action was not happening at a past time.",
                "I was not sleeping.\nHe was not working.\nThey were not playing football.",
            ),
            form(
                "Was/Were + subject + verb-ing?",
                "To ask if something was happening at a past time.",
                "Were you sleeping?\nWas she working?\nWere they playing football?",
            ),
            form(
                "Wh- + was/were + subject + verb-ing?",
                "To ask detailed past continuous questions.",
                "What were you doing?\nWhere was she going?\nWhy were they shouting?",
            ),
        ),
        full_tense(
            "Past Perfect",
            form(
                "Subject + had + past participle",
                "Action completed before another past action.",
                "I had finished my homework before dinner.\nHe had eaten before I arrived.\nShe had read it before class.\nThey had left when we came.\nWe had watched that movie before the party.",
            ),
            form(
                "Subject + had not + past participle",
                "To say an action had not been completed before another action.",
                "I had not done my homework.\nHe had not eaten.\nThey had not arrived yet.",
            ),
            form(
                "Had + subject + past participle?",
                "To ask if an action had been completed before another action.",
                "Had you finished your work?\nHad she left?\nHad they eaten dinner?",
            ),
            form(
                "Wh- + had + subject + past participle?",
                "To ask details about what was done before another past action.",
                "What had you done?\nWhere had she gone?\nWhy had they left?",
            ),
        ),
        full_tense(
            "Future Simple",
            form(
                "Subject + will + base verb",
                "Prediction or plan.",
                "I will go to school tomorrow.\nHe will play football on Sunday.\nShe will read tomorrow.\nThey will travel next month.\nWe will watch that movie tonight.",
            ),
            form(
                "Subject + will not + base verb",
                "To say something will not happen.",
                "I will not go tomorrow.\nHe will not play football.\nThey will not study tonight.",
            ),
            form(
                "Will + subject + base verb?",
                "To ask about future actions.",
                "Will you go to school?\nWill she read the book?\nWill they travel tomorrow?",
            ),
            form(
                "Wh- + will + subject + base verb?",
                "To ask detailed future questions.",
                "What will you do tomorrow?\nWhere will she go?\nWhen will they arrive?",
            ),
        ),
        full_tense(
            "Future Continuous",
            form(
                "Subject + will be + verb-ing",
                "Action that will be in progress.",
                "I will be eating at noon.\nHe will be watching TV at 8 PM.\nShe will be reading at noon.\nThey will be playing football tomorrow.\nWe will be studying in the library.",
            ),
            form(
                "Subject + will not be + verb-ing",
                "To say an action will not be happening at a future time.",
                "I will not be working at 10.\nHe will not be playing.\nThey will not be studying.",
            ),
            form(
                "Will + subject + be + verb-ing?",
                "To ask about an action in progress at a future time.",
                "Will you be studying at 8?\nWill she be working?\nWill they be sleeping?",
            ),
            form(
                "Wh- + will + subject + be + verb-ing?",
                "To ask details about an action in progress in the future.",
                "What will you be doing at 9?\nWhere will she be going?\nWhy will they be waiting?",
            ),
        ),
        full_tense(
            "Future Perfect",
            form(
                "Subject + will have + past participle",
                "Action completed before a future time.",
                "I will have finished my homework by 8 PM.\nHe will have eaten by the time you arrive.\nShe will have read it by tomorrow.\nThey will have traveled by next week.\nWe will have watched that movie before Friday.",
            ),
            form(
                "Subject + will not have + past participle",
                "To say something will not be completed by a certain time.",
                "I will not have done my work by then.\nShe will not have left by 9.\nThey will not have finished the project.",
            ),
            form(
                "Will + subject + have + past participle?",
                "To ask if something will be completed by a certain time.",
                "Will you have finished by 10?\nWill she have cooked dinner?\nWill they have completed the task?",
            ),
            form(
                "Wh- + will + subject + have + past participle?",
                "To ask details of what will be completed by a future time.",
                "What will you have done by tomorrow?\nWhere will she have gone?\nWhich books will they have read?",
            ),
        ),
    ],
});
