//! Plain-text rendering of examples and reference entries.

use std::fmt::Write;

use tenseflow_core::{Example, Notice, QuestionType, ReferenceTables, TagInfo, TenseInfo};

/// Render one example as a card: tense explanation, sentence, tagged tokens.
pub fn example_card(example: &Example, tables: &ReferenceTables) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "📝 {}", example.sentence);
    let _ = writeln!(out, "🕒 Tense: {}", display_or_unknown(&example.tense));
    if let Some(features) = feature_summary(example) {
        let _ = writeln!(out, "   {features}");
    }

    let (polarity, question_type) = (example.polarity, example.question_type);
    match tables.tense_form(&example.tense, polarity, question_type) {
        Some(form) => {
            let _ = writeln!(out, "   Formula: {}", form.formula);
            let _ = writeln!(out, "   Usage:   {}", form.usage);
            for line in form.example.lines() {
                let _ = writeln!(out, "   e.g.     {line}");
            }
        }
        None => {
            let _ = writeln!(out, "   (no reference entry for this tense)");
        }
    }

    if !example.tags.is_empty() {
        let _ = writeln!(out);
        let word_width = example
            .tags
            .iter()
            .map(|t| t.word.chars().count())
            .max()
            .unwrap_or(0);
        let tag_width = example
            .tags
            .iter()
            .map(|t| t.tag.chars().count())
            .max()
            .unwrap_or(0);
        for tag in &example.tags {
            let explanation = tables
                .tag(&tag.tag)
                .map(|info| format!("{}: {}", info.label, info.description))
                .unwrap_or_default();
            let phonetic = if tag.phonetic.is_empty() {
                String::new()
            } else {
                format!("/{}/", tag.phonetic)
            };
            let line = format!(
                "   {:<word_width$}  {:<tag_width$}  {phonetic}  {explanation}",
                tag.word, tag.tag
            );
            let _ = writeln!(out, "{}", line.trim_end());
        }
    }
    out
}

/// One line describing person, number, polarity and question type, when known.
fn feature_summary(example: &Example) -> Option<String> {
    if !example.has_attributes() {
        return None;
    }
    let parts: Vec<String> = [
        example.person.map(|p| format!("{p} person")),
        example.number.map(|n| n.to_string()),
        example.polarity.map(|p| p.to_string()),
        example.question_type.map(|q| match q {
            QuestionType::Statement => "statement".to_string(),
            other => format!("{other} question"),
        }),
    ]
    .into_iter()
    .flatten()
    .collect();
    Some(parts.join(", "))
}

fn display_or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "(unknown)"
    } else {
        value
    }
}

pub fn notice_line(notice: &Notice) -> String {
    format!("⚠️  {notice}")
}

pub fn tag_entry(info: &TagInfo) -> String {
    let mut out = format!("{:<5} {}: {}", info.code, info.label, info.description);
    if let Some(reference) = info.reference {
        let _ = write!(out, " ({reference})");
    }
    out
}

pub fn tense_entry(info: &TenseInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🕒 {}", info.name);
    let variants = [
        ("Affirmative", Some(&info.affirmative)),
        ("Negative", info.negative.as_ref()),
        ("Interrogative", info.interrogative.as_ref()),
        ("WH-question", info.wh_question.as_ref()),
    ];
    for (label, form) in variants {
        let Some(form) = form else { continue };
        let _ = writeln!(out, "   {label}");
        let _ = writeln!(out, "     Formula: {}", form.formula);
        let _ = writeln!(out, "     Usage:   {}", form.usage);
        for line in form.example.lines() {
            let _ = writeln!(out, "     e.g.     {line}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenseflow_core::{default_example, ReferenceVersion};

    #[test]
    fn card_shows_sentence_tense_and_tags() {
        let tables = ReferenceVersion::Full.tables();
        let example = default_example();
        let card = example_card(&example, tables);
        assert!(card.contains(&format!("📝 {}", example.sentence)));
        assert!(card.contains("🕒 Tense: Present Perfect Continuous"));
        assert!(card.contains("third person, singular, positive, statement"));
        assert!(card.contains("/ʃiː/"));
        assert!(card.contains("Personal Pronoun"));
    }

    #[test]
    fn card_tolerates_unknown_tense_and_bare_example() {
        let example = Example {
            sentence: String::new(),
            tense: String::new(),
            tags: vec![],
            person: None,
            number: None,
            polarity: None,
            question_type: None,
        };
        let card = example_card(&example, ReferenceVersion::Standard.tables());
        assert!(card.contains("(unknown)"));
        assert!(card.contains("no reference entry"));
    }

    #[test]
    fn notice_is_flagged() {
        assert!(notice_line(&Notice::UnrecognizedResponse).starts_with("⚠️"));
    }
}
