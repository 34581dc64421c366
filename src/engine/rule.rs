//! Rule compilation.
//!
//! A `Rule` is built once and never changes afterwards. Building compiles the
//! pattern twice:
//!
//! - `search`: the pattern as written, used for permissive detection
//!   (`is_valid`), where a match anywhere in the input counts.
//! - `anchored`: `^(?:pattern)$`, used by the resolver, which only accepts a
//!   rule when it consumes the whole input.
//!
//! ## Invariants
//!
//! - Every named group in the pattern is a [`Field`] name. Anything else is
//!   rejected by [`RuleBuilder::build`], so the resolver never has to decide
//!   what to do with an unknown capture.
//! - Defaults are keyed by [`Field`] and checked for storability (ports must
//!   parse) at build time.

use crate::locator::parse_port;
use crate::{Error, Field, Fields, Result};
use regex::{Regex, RegexBuilder};
use std::collections::BTreeMap;

/// A labelled, prioritized pattern that recognizes one locator syntax.
#[derive(Debug, Clone)]
pub struct Rule {
    label: String,
    description: String,
    pattern: String,
    search: Regex,
    anchored: Regex,
    captures: Fields,
    defaults: BTreeMap<Field, String>,
    explicit: bool,
    weight: i32,
}

impl Rule {
    /// Start building a rule. Nothing is compiled until [`RuleBuilder::build`].
    pub fn builder(label: impl Into<String>, pattern: impl Into<String>) -> RuleBuilder {
        RuleBuilder {
            label: label.into(),
            description: String::new(),
            pattern: pattern.into(),
            defaults: BTreeMap::new(),
            explicit: false,
            weight: 0,
            verbose: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The pattern source as written by the rule author.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Fields the pattern can capture.
    pub fn captures(&self) -> Fields {
        self.captures
    }

    /// Values applied to fields left unset by a match.
    pub fn defaults(&self) -> &BTreeMap<Field, String> {
        &self.defaults
    }

    /// Whether a match proves the input targets this VCS and no other.
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Resolution precedence; higher is tried first.
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Unanchored search, as used for detection.
    pub fn is_match(&self, input: &str) -> bool {
        self.search.is_match(input)
    }

    pub(crate) fn anchored(&self) -> &Regex {
        &self.anchored
    }
}

/// Builder returned by [`Rule::builder`].
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    label: String,
    description: String,
    pattern: String,
    defaults: BTreeMap<Field, String>,
    explicit: bool,
    weight: i32,
    verbose: bool,
}

impl RuleBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set a default. Setting the same field twice keeps the last value.
    pub fn default(mut self, field: Field, value: impl Into<String>) -> Self {
        self.defaults.insert(field, value.into());
        self
    }

    pub fn explicit(mut self, explicit: bool) -> Self {
        self.explicit = explicit;
        self
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Compile in free-spacing mode: whitespace is ignored and `#` starts a
    /// comment that runs to the end of the line.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Compile the pattern and validate groups and defaults.
    pub fn build(self) -> Result<Rule> {
        let search = self.compile(&self.pattern)?;
        // The newline closes a trailing `#` comment in free-spacing mode.
        let anchored_source =
            if self.verbose { format!("^(?:{}\n)$", self.pattern) } else { format!("^(?:{})$", self.pattern) };
        let anchored = self.compile(&anchored_source)?;

        let mut captures = Fields::empty();
        for group in search.capture_names().flatten() {
            let field = group
                .parse::<Field>()
                .map_err(|_| Error::UnknownGroup { label: self.label.clone(), group: group.to_string() })?;
            captures |= field.flag();
        }

        for (field, value) in &self.defaults {
            if *field == Field::Port && parse_port(value).is_none() {
                return Err(Error::InvalidDefault { label: self.label.clone(), field: *field, value: value.clone() });
            }
        }

        Ok(Rule {
            label: self.label,
            description: self.description,
            pattern: self.pattern,
            search,
            anchored,
            captures,
            defaults: self.defaults,
            explicit: self.explicit,
            weight: self.weight,
        })
    }

    fn compile(&self, source: &str) -> Result<Regex> {
        RegexBuilder::new(source)
            .ignore_whitespace(self.verbose)
            .build()
            .map_err(|source| Error::InvalidPattern { label: self.label.clone(), source })
    }
}
