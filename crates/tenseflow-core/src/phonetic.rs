//! Word to IPA-like transcription lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

const TRANSCRIPTIONS: &[(&str, &str)] = &[
    // pronouns
    ("i", "aɪ"),
    ("you", "juː"),
    ("he", "hiː"),
    ("she", "ʃiː"),
    ("they", "ðeɪ"),
    ("we", "wiː"),
    // base verbs and the inflections naive suffixing spells correctly
    ("read", "riːd"),
    ("reads", "riːdz"),
    ("reading", "ˈriːdɪŋ"),
    ("write", "raɪt"),
    ("writes", "raɪts"),
    ("draw", "drɔː"),
    ("draws", "drɔːz"),
    ("drawing", "ˈdrɔːɪŋ"),
    ("play", "pleɪ"),
    ("plays", "pleɪz"),
    ("playing", "ˈpleɪɪŋ"),
    ("study", "ˈstʌdi"),
    ("studying", "ˈstʌdiɪŋ"),
    ("cook", "kʊk"),
    ("cooks", "kʊks"),
    ("cooking", "ˈkʊkɪŋ"),
    ("watch", "wɒtʃ"),
    ("watching", "ˈwɒtʃɪŋ"),
    // nouns
    ("book", "bʊk"),
    ("movie", "ˈmuːvi"),
    ("song", "sɔŋ"),
    ("game", "geɪm"),
    ("recipe", "ˈrɛsəpi"),
    ("story", "ˈstɔːri"),
    ("article", "ˈɑːrtɪkəl"),
    // time expressions
    ("morning", "ˈmɔːrnɪŋ"),
    ("afternoon", "ˌæftərˈnuːn"),
    ("evening", "ˈiːvnɪŋ"),
    ("night", "naɪt"),
    ("weekend", "ˈwiːkˌɛnd"),
    ("today", "təˈdeɪ"),
    ("yesterday", "ˈjɛstərdeɪ"),
    ("tomorrow", "təˈmɒrəʊ"),
    // function words
    ("a", "ə"),
    ("the", "ðə"),
    ("every", "ˈɛvri"),
    ("since", "sɪns"),
    ("when", "wɛn"),
    ("not", "nɒt"),
    ("called", "kɔːld"),
    ("what", "wɒt"),
    ("why", "waɪ"),
    ("how", "haʊ"),
    ("where", "wɛər"),
    // auxiliaries and modals
    ("do", "duː"),
    ("does", "dʌz"),
    ("did", "dɪd"),
    ("will", "wɪl"),
    ("be", "biː"),
    ("been", "bɪn"),
    ("have", "hæv"),
    ("has", "hæz"),
    ("had", "hæd"),
    ("is", "ɪz"),
    ("are", "ɑːr"),
    ("was", "wɒz"),
    ("were", "wɜːr"),
];

static TRANSCRIPTION_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TRANSCRIPTIONS.iter().copied().collect());

/// Transcribe `word`, or return it unchanged when it is not in the table.
///
/// Lookup is case-insensitive; the fallback keeps the caller's casing.
pub fn resolve(word: &str) -> String {
    let folded = word.to_lowercase();
    match TRANSCRIPTION_MAP.get(folded.as_str()) {
        Some(ipa) => (*ipa).to_string(),
        None => word.to_string(),
    }
}

/// Whether `word` has an entry in the transcription table.
pub fn is_known(word: &str) -> bool {
    TRANSCRIPTION_MAP.contains_key(word.to_lowercase().as_str())
}
