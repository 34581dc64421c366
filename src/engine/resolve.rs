//! Locator resolution.
//!
//! ```text
//! raw ──▶ registry.ordered() ──▶ first anchored match ──▶ captures ──▶ defaults ──▶ Locator
//!                                     │
//!                                     └─ none matched ──▶ Error::NoMatch
//! ```
//!
//! Captured values always win over defaults: a default is only written to a
//! field the match left unset. A failed port conversion discards the whole
//! match, so a locator never carries a partial result.

use super::metrics::{Attempt, Resolution};
use super::registry::RuleRegistry;
use super::rule::Rule;
use crate::{Error, Locator, Result};
use regex::Captures;
use std::time::Instant;
use tracing::{debug, trace};

/// Resolve `raw` against `registry`, returning the locator built from the
/// highest-precedence rule that matches the whole input.
pub fn resolve(raw: &str, registry: &RuleRegistry) -> Result<Locator> {
    for rule in registry.ordered() {
        match rule.anchored().captures(raw) {
            Some(caps) => return populate(raw, rule, &caps),
            None => trace!(rule = rule.label(), weight = rule.weight(), "rule did not match"),
        }
    }

    debug!(input = raw, rules = registry.len(), "no rule matched");
    Err(Error::NoMatch { input: raw.to_string() })
}

/// Same as [`resolve`], recording each rule attempted.
pub fn resolve_traced(raw: &str, registry: &RuleRegistry) -> Resolution {
    let start = Instant::now();
    let mut attempts = Vec::new();
    let mut outcome = None;

    for rule in registry.ordered() {
        let caps = rule.anchored().captures(raw);
        attempts.push(Attempt {
            label: rule.label().to_string(),
            weight: rule.weight(),
            explicit: rule.is_explicit(),
            matched: caps.is_some(),
        });
        if let Some(caps) = caps {
            outcome = Some(populate(raw, rule, &caps));
            break;
        }
    }

    let outcome = outcome.unwrap_or_else(|| Err(Error::NoMatch { input: raw.to_string() }));
    Resolution { input: raw.to_string(), attempts, outcome, elapsed: start.elapsed() }
}

fn populate(raw: &str, rule: &Rule, caps: &Captures<'_>) -> Result<Locator> {
    let mut locator = Locator::new(raw);

    for field in rule.captures().fields() {
        let Some(m) = caps.name(field.as_str()) else {
            continue;
        };
        if !locator.assign(field, m.as_str()) {
            debug!(rule = rule.label(), value = m.as_str(), "captured port out of range");
            return Err(Error::InvalidPort { rule: rule.label().to_string(), value: m.as_str().to_string() });
        }
    }

    for (field, value) in rule.defaults() {
        if !locator.is_set(*field) {
            // Port defaults are validated when the rule is built.
            locator.assign(*field, value);
            locator.mark_defaulted(*field);
        }
    }

    locator.mark_matched(rule.label());
    debug!(input = raw, rule = rule.label(), "resolved locator");
    Ok(locator)
}
