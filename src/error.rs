//! Error types for rule construction, resolution and serialization.

use crate::{Field, Style};
use thiserror::Error;

/// Everything that can go wrong in this crate.
///
/// The first five variants are rule-definition defects and surface when a
/// rule or rule set is built, never during resolution.
#[derive(Error, Debug)]
pub enum Error {
    /// The rule's pattern does not compile.
    #[error("rule '{label}': invalid pattern: {source}")]
    InvalidPattern {
        label: String,
        #[source]
        source: regex::Error,
    },

    /// The pattern names a capture group outside the field vocabulary.
    #[error("rule '{label}': unknown capture group '{group}'")]
    UnknownGroup { label: String, group: String },

    /// A string-keyed default names something that is not a field.
    #[error("rule '{label}': unknown default field '{field}'")]
    UnknownField { label: String, field: String },

    /// A default value cannot be stored in its field.
    #[error("rule '{label}': invalid default for {field}: '{value}'")]
    InvalidDefault { label: String, field: Field, value: String },

    /// A rule set tried to register the same label twice.
    #[error("duplicate rule label '{label}'")]
    DuplicateLabel { label: String },

    /// No rule in the registry matched the input.
    #[error("no rule matches '{input}'")]
    NoMatch { input: String },

    /// A rule captured a port outside `0..=65535`.
    #[error("rule '{rule}' captured invalid port '{value}'")]
    InvalidPort { rule: String, value: String },

    /// A field required by the output style is unset.
    #[error("cannot build {style} URL: missing {field}")]
    MissingField { field: Field, style: Style },

    /// A rule file could not be decoded.
    #[error("invalid rule file: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Whether this error is a rule-definition defect.
    pub fn is_invalid_rule(&self) -> bool {
        matches!(
            self,
            Error::InvalidPattern { .. }
                | Error::UnknownGroup { .. }
                | Error::UnknownField { .. }
                | Error::InvalidDefault { .. }
                | Error::DuplicateLabel { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
