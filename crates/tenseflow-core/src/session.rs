//! Display state of one tutor session.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::model::Example;
use crate::profile::GrammarProfile;

/// User-visible explanation of why the display does not show what was asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Notice {
    /// The analyzer could not be reached or answered with an error status.
    RequestFailed(String),
    /// The analyzer answered with something that holds no usable example.
    UnrecognizedResponse,
    /// Some elements of the response were discarded.
    DroppedElements(usize),
    /// Every element of the response was discarded.
    NoUsableElements(usize),
}

const SHOWING_DEFAULT: &str = "Displaying default example.";

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::RequestFailed(message) => {
                write!(f, "Failed to fetch data. {SHOWING_DEFAULT} ({message})")
            }
            Notice::UnrecognizedResponse => write!(
                f,
                "The analyzer response was not understood. {SHOWING_DEFAULT}"
            ),
            Notice::DroppedElements(1) => f.write_str("1 malformed example was skipped."),
            Notice::DroppedElements(n) => write!(f, "{n} malformed examples were skipped."),
            Notice::NoUsableElements(1) => {
                write!(f, "The only example was malformed. {SHOWING_DEFAULT}")
            }
            Notice::NoUsableElements(n) => {
                write!(f, "All {n} examples were malformed. {SHOWING_DEFAULT}")
            }
        }
    }
}

/// Result of one analysis round trip, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    /// Never empty.
    pub examples: Vec<Example>,
    pub notice: Option<Notice>,
}

impl AnalysisOutcome {
    /// Substitute `fallback` and explain why.
    pub fn fallback(fallback: Example, notice: Notice) -> Self {
        Self {
            examples: vec![fallback],
            notice: Some(notice),
        }
    }
}

/// What the learner currently sees.
#[derive(Debug, Clone)]
pub struct TutorSession {
    profile: GrammarProfile,
    examples: Vec<Example>,
    notice: Option<Notice>,
}

impl TutorSession {
    /// Start a session showing the default example.
    pub fn new(profile: GrammarProfile) -> Self {
        let examples = vec![profile.normalizer().fallback()];
        Self {
            profile,
            examples,
            notice: None,
        }
    }

    pub fn profile(&self) -> &GrammarProfile {
        &self.profile
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Show one freshly generated example and clear any notice.
    pub fn refresh<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Example {
        let example = self.profile.generator().sample(rng, &self.profile.sampling);
        self.notice = None;
        self.examples = vec![example];
        &self.examples[0]
    }

    /// Show an analyzer outcome together with its notice, if any.
    pub fn apply(&mut self, outcome: AnalysisOutcome) {
        if outcome.examples.is_empty() {
            self.examples = vec![self.profile.normalizer().fallback()];
            self.notice = Some(Notice::UnrecognizedResponse);
            return;
        }
        self.examples = outcome.examples;
        self.notice = outcome.notice;
    }
}

impl Default for TutorSession {
    fn default() -> Self {
        Self::new(GrammarProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_example;
    use crate::profile::ProfilePreset;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_session_shows_default_without_notice() {
        let session = TutorSession::default();
        assert_eq!(session.examples(), [default_example()].as_slice());
        assert!(session.notice().is_none());
    }

    #[test]
    fn refresh_clears_notice() {
        let mut session = TutorSession::default();
        session.apply(AnalysisOutcome::fallback(
            default_example(),
            Notice::UnrecognizedResponse,
        ));
        assert!(session.notice().is_some());

        let sentence = session
            .refresh(&mut StdRng::seed_from_u64(5))
            .sentence
            .clone();
        assert!(session.notice().is_none());
        assert_eq!(session.examples().len(), 1);
        assert_eq!(session.examples()[0].sentence, sentence);
    }

    #[test]
    fn apply_with_empty_examples_keeps_something_renderable() {
        let mut session = TutorSession::new(ProfilePreset::Minimal.profile());
        session.apply(AnalysisOutcome {
            examples: vec![],
            notice: None,
        });
        assert_eq!(session.examples().len(), 1);
        assert!(!session.examples()[0].has_attributes());
        assert_eq!(session.notice(), Some(&Notice::UnrecognizedResponse));
    }

    #[test]
    fn notice_messages() {
        let failed = Notice::RequestFailed("connection refused".into());
        assert_eq!(
            failed.to_string(),
            "Failed to fetch data. Displaying default example. (connection refused)"
        );
        assert_eq!(
            Notice::UnrecognizedResponse.to_string(),
            "The analyzer response was not understood. Displaying default example."
        );
        assert_eq!(
            Notice::DroppedElements(1).to_string(),
            "1 malformed example was skipped."
        );
        assert_eq!(
            Notice::DroppedElements(3).to_string(),
            "3 malformed examples were skipped."
        );
    }

    #[test]
    fn discarding_everything_says_the_default_is_shown() {
        assert_eq!(
            Notice::NoUsableElements(1).to_string(),
            "The only example was malformed. Displaying default example."
        );
        assert_eq!(
            Notice::NoUsableElements(4).to_string(),
            "All 4 examples were malformed. Displaying default example."
        );
    }
}
