//! Declarative rule files.
//!
//! Rules can be added to a flavor without code, from TOML:
//!
//! ```toml
//! [[rule]]
//! label = "gh-prefix"
//! description = "github:org/repo shorthand"
//! pattern = '^github:(?P<path>.+)$'
//! explicit = true
//! weight = 100
//!
//! [rule.defaults]
//! hostname = "github.com"
//! scheme = "https"
//! ```
//!
//! Decoding is pure; reading the file is up to the caller.

use crate::{Error, Field, Result, Rule, RuleRegistry};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A rule as written in a rule file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub pattern: String,
    /// Compile the pattern in free-spacing mode.
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,
    #[serde(default)]
    pub explicit: bool,
    #[serde(default)]
    pub weight: i32,
}

impl RuleSpec {
    /// Compile into a [`Rule`]. Default keys must name fields.
    pub fn build(&self) -> Result<Rule> {
        let mut builder = Rule::builder(&self.label, &self.pattern)
            .description(&self.description)
            .verbose(self.verbose)
            .explicit(self.explicit)
            .weight(self.weight);

        for (name, value) in &self.defaults {
            let field = name
                .parse::<Field>()
                .map_err(|_| Error::UnknownField { label: self.label.clone(), field: name.clone() })?;
            builder = builder.default(field, value);
        }

        builder.build()
    }
}

/// A decoded rule file: a list of `[[rule]]` tables.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleFile {
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleSpec>,
}

impl RuleFile {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Compile every rule, failing on the first invalid one.
    pub fn build(&self) -> Result<Vec<Rule>> {
        self.rules.iter().map(RuleSpec::build).collect()
    }

    /// Compile and register every rule in `registry`. Nothing is registered
    /// unless all rules compile and none collides with an existing label.
    /// Returns the number of rules added.
    pub fn apply(&self, registry: &mut RuleRegistry) -> Result<usize> {
        let rules = self.build()?;
        let mut staged = registry.clone();
        for rule in rules {
            staged.try_register(rule)?;
        }
        let added = staged.len() - registry.len();
        *registry = staged;
        Ok(added)
    }
}
