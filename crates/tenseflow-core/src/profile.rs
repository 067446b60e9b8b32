//! Grammar profiles.
//!
//! A profile bundles every knob that changes what the tutor generates and how
//! it reads analyzer responses. Profiles are written in TOML:
//!
//! ```toml
//! extended_attributes = true
//! template_set = "extended"
//! reference_tables = "full"
//! element_policy = "trust"
//!
//! [sampling]
//! strategy = "batch"
//! size = 10
//! ```
//!
//! Every key is optional; missing keys take the `full` preset's value.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GrammarError, GrammarResult};
use crate::generator::{ExampleGenerator, Sampling, MAX_BATCH_SIZE};
use crate::lexicon::Lexicon;
use crate::normalize::{ElementPolicy, Normalizer};
use crate::reference::{ReferenceTables, ReferenceVersion};
use crate::template::TemplateSet;

/// Generation and normalization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarProfile {
    /// Attach person, number, polarity and question type to examples.
    pub extended_attributes: bool,
    pub template_set: TemplateSet,
    pub reference_tables: ReferenceVersion,
    pub element_policy: ElementPolicy,
    pub sampling: Sampling,
}

impl Default for GrammarProfile {
    fn default() -> Self {
        ProfilePreset::Full.profile()
    }
}

impl GrammarProfile {
    pub fn from_toml_str(source: &str) -> GrammarResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read, parse and validate a profile file.
    pub fn load(path: &Path) -> GrammarResult<Self> {
        let source = std::fs::read_to_string(path)?;
        let profile = Self::from_toml_str(&source)?;
        profile.validate()?;
        debug!(
            target: "tenseflow::profile",
            path = %path.display(),
            template_set = %profile.template_set,
            reference_tables = %profile.reference_tables,
            "profile_loaded"
        );
        Ok(profile)
    }

    /// Check the batch size and that the reference tables describe every tense
    /// and tag the template set can emit.
    pub fn validate(&self) -> GrammarResult<()> {
        if let Sampling::Batch { size } = self.sampling {
            if !(1..=MAX_BATCH_SIZE).contains(&size) {
                return Err(GrammarError::InvalidBatchSize { size });
            }
        }
        self.template_set
            .check_coverage(&Lexicon::standard(), self.tables())
    }

    pub fn tables(&self) -> &'static ReferenceTables {
        self.reference_tables.tables()
    }

    pub fn generator(&self) -> ExampleGenerator {
        ExampleGenerator::new(
            Lexicon::standard(),
            self.template_set,
            self.extended_attributes,
        )
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.tables(), self.element_policy, self.extended_attributes)
    }
}

/// Named built-in profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfilePreset {
    /// Extended templates, attributes, full tables, direct sampling.
    #[default]
    Full,
    /// The eight classic templates sampled from batches of ten.
    Classic,
    /// Classic templates without grammatical attributes.
    Minimal,
}

impl ProfilePreset {
    pub const ALL: [ProfilePreset; 3] = [
        ProfilePreset::Full,
        ProfilePreset::Classic,
        ProfilePreset::Minimal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfilePreset::Full => "full",
            ProfilePreset::Classic => "classic",
            ProfilePreset::Minimal => "minimal",
        }
    }

    pub fn profile(&self) -> GrammarProfile {
        match self {
            ProfilePreset::Full => GrammarProfile {
                extended_attributes: true,
                template_set: TemplateSet::Extended,
                reference_tables: ReferenceVersion::Full,
                element_policy: ElementPolicy::Trust,
                sampling: Sampling::Direct,
            },
            ProfilePreset::Classic => GrammarProfile {
                extended_attributes: true,
                template_set: TemplateSet::Classic,
                reference_tables: ReferenceVersion::Standard,
                element_policy: ElementPolicy::Trust,
                sampling: Sampling::Batch { size: 10 },
            },
            ProfilePreset::Minimal => GrammarProfile {
                extended_attributes: false,
                template_set: TemplateSet::Classic,
                reference_tables: ReferenceVersion::Standard,
                element_policy: ElementPolicy::Trust,
                sampling: Sampling::Direct,
            },
        }
    }
}

impl fmt::Display for ProfilePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfilePreset {
    type Err = GrammarError;

    fn from_str(s: &str) -> GrammarResult<Self> {
        match s {
            "full" => Ok(ProfilePreset::Full),
            "classic" => Ok(ProfilePreset::Classic),
            "minimal" => Ok(ProfilePreset::Minimal),
            other => Err(GrammarError::unknown(
                "profile",
                other,
                "full, classic, minimal",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_is_the_full_preset() {
        let profile = GrammarProfile::from_toml_str("").unwrap();
        assert_eq!(profile, ProfilePreset::Full.profile());
    }

    #[test]
    fn parse_partial_profile() {
        let toml = r#"
extended_attributes = false
template_set = "classic"
element_policy = "validate"

[sampling]
strategy = "batch"
size = 5
"#;
        let profile = GrammarProfile::from_toml_str(toml).unwrap();
        assert!(!profile.extended_attributes);
        assert_eq!(profile.template_set, TemplateSet::Classic);
        assert_eq!(profile.reference_tables, ReferenceVersion::Full);
        assert_eq!(profile.element_policy, ElementPolicy::Validate);
        assert_eq!(profile.sampling, Sampling::Batch { size: 5 });
    }

    #[test]
    fn unknown_value_is_a_parse_error() {
        let source = "template_set = \"baroque\"";
        let err = GrammarProfile::from_toml_str(source).unwrap_err();
        assert!(matches!(err, GrammarError::ProfileParse(_)));
    }

    #[test]
    fn zero_batch_size_fails_validation() {
        let profile = GrammarProfile {
            sampling: Sampling::Batch { size: 0 },
            ..GrammarProfile::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(GrammarError::InvalidBatchSize { size: 0 })
        ));
    }

    #[test]
    fn oversized_batch_fails_validation() {
        let source = "[sampling]\nstrategy = \"batch\"\nsize = 1000000000\n";
        let profile = GrammarProfile::from_toml_str(source).unwrap();
        match profile.validate() {
            Err(GrammarError::InvalidBatchSize { size }) => assert_eq!(size, 1_000_000_000),
            other => panic!("expected an invalid batch size, got {other:?}"),
        }

        let largest = GrammarProfile {
            sampling: Sampling::Batch {
                size: MAX_BATCH_SIZE,
            },
            ..GrammarProfile::default()
        };
        largest.validate().unwrap();
    }

    #[test]
    fn every_preset_validates() {
        for preset in ProfilePreset::ALL {
            preset.profile().validate().unwrap();
            assert_eq!(preset.as_str().parse::<ProfilePreset>().unwrap(), preset);
        }
    }

    #[test]
    fn load_reads_file_and_reports_missing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "reference_tables = \"standard\"").unwrap();
        let profile = GrammarProfile::load(file.path()).unwrap();
        assert_eq!(profile.reference_tables, ReferenceVersion::Standard);

        let missing = file.path().with_extension("absent");
        assert!(matches!(
            GrammarProfile::load(&missing),
            Err(GrammarError::Io(_))
        ));
    }
}
