//! Detect, parse and canonicalize version-control repository URLs.
//!
//! A [`Flavor`] pairs a [`RuleRegistry`] with a serialization [`Style`]. Rules
//! are regular expressions whose named groups map onto [`Locator`] fields:
//!
//! ```
//! use vcsurl::Flavor;
//!
//! let flavor = Flavor::combined();
//! let mut url = flavor.parse("git@github.com:vcs-python/libvcs.git").unwrap();
//! assert_eq!(url.matched_rule(), Some("core-git-scp"));
//!
//! url.hostname = Some("gitlab.com".into());
//! assert_eq!(flavor.to_url(&url).unwrap(), "git@gitlab.com:vcs-python/libvcs.git");
//! ```

#[macro_use]
mod macros;
mod api;
mod config;
mod engine;
mod error;
mod locator;
pub mod rules;

pub use api::{Flavor, is_valid, parse};
pub use config::{RuleFile, RuleSpec};
pub use engine::{Attempt, Resolution, Rule, RuleBuilder, RuleRegistry, Style, is_valid_with, required_fields, resolve, resolve_traced, to_url};
pub use error::{Error, Result};
pub use locator::Locator;

use std::fmt;
use std::str::FromStr;

// --- Field vocabulary -------------------------------------------------------

/// A decomposed locator field. Rule patterns may only name groups after these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Scheme,
    User,
    Hostname,
    Port,
    Path,
    Suffix,
    Rev,
}

impl Field {
    pub const ALL: [Field; 7] =
        [Field::Scheme, Field::User, Field::Hostname, Field::Port, Field::Path, Field::Suffix, Field::Rev];

    /// Capture group name used in rule patterns.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Scheme => "scheme",
            Field::User => "user",
            Field::Hostname => "hostname",
            Field::Port => "port",
            Field::Path => "path",
            Field::Suffix => "suffix",
            Field::Rev => "rev",
        }
    }

    pub fn flag(self) -> Fields {
        match self {
            Field::Scheme => Fields::SCHEME,
            Field::User => Fields::USER,
            Field::Hostname => Fields::HOSTNAME,
            Field::Port => Fields::PORT,
            Field::Path => Fields::PATH,
            Field::Suffix => Fields::SUFFIX,
            Field::Rev => Fields::REV,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a name is not part of the field vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldName(pub String);

impl FromStr for Field {
    type Err = UnknownFieldName;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Field::ALL.into_iter().find(|f| f.as_str() == s).ok_or_else(|| UnknownFieldName(s.to_string()))
    }
}

bitflags::bitflags! {
    /// A set of [`Field`]s.
    ///
    /// Used for the groups a rule captures, the fields a locator received from
    /// rule defaults, and the fields a locator needs to be serialized.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Fields: u8 {
        const SCHEME   = 1 << 0;
        const USER     = 1 << 1;
        const HOSTNAME = 1 << 2;
        const PORT     = 1 << 3;
        const PATH     = 1 << 4;
        const SUFFIX   = 1 << 5;
        const REV      = 1 << 6;
    }
}

impl Fields {
    /// Iterate the contained fields in declaration order.
    pub fn fields(self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(move |f| self.contains(f.flag()))
    }
}

impl From<Field> for Fields {
    fn from(field: Field) -> Self {
        field.flag()
    }
}
