//! Ordered rule registry.
//!
//! Rules are kept in an insertion-ordered map keyed by label. Resolution order is
//! derived on demand by [`RuleRegistry::ordered`]: weight descending, with a
//! stable sort so equal weights keep insertion order.
//!
//! A registry has no internal locking. Share it immutably between threads, or
//! wrap it in a lock when it must be mutated while other threads resolve.

use super::rule::Rule;
use crate::{Error, Result};
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::cmp::Reverse;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: IndexMap<String, Rule>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from rules, failing on the first duplicate label.
    pub fn try_from_rules(rules: impl IntoIterator<Item = Rule>) -> Result<Self> {
        let mut registry = Self::new();
        for rule in rules {
            registry.try_register(rule)?;
        }
        Ok(registry)
    }

    /// Add a rule. A label that is already registered keeps its first rule
    /// and `false` is returned.
    pub fn register(&mut self, rule: Rule) -> bool {
        match self.rules.entry(rule.label().to_string()) {
            Entry::Occupied(_) => {
                debug!(label = rule.label(), "rule already registered, keeping existing");
                false
            }
            Entry::Vacant(slot) => {
                debug!(label = rule.label(), weight = rule.weight(), explicit = rule.is_explicit(), "registered rule");
                slot.insert(rule);
                true
            }
        }
    }

    /// Like [`register`](Self::register), but a label collision is an error.
    pub fn try_register(&mut self, rule: Rule) -> Result<()> {
        if self.contains(rule.label()) {
            return Err(Error::DuplicateLabel { label: rule.label().to_string() });
        }
        self.register(rule);
        Ok(())
    }

    /// Remove a rule by label; absent labels are ignored. The remaining rules
    /// keep their relative order.
    pub fn unregister(&mut self, label: &str) -> Option<Rule> {
        let rule = self.rules.shift_remove(label)?;
        debug!(label, "unregistered rule");
        Some(rule)
    }

    /// Register every rule, first registration winning on collisions.
    pub fn extend(&mut self, rules: impl IntoIterator<Item = Rule>) {
        for rule in rules {
            self.register(rule);
        }
    }

    /// Builder-style [`extend`](Self::extend).
    pub fn with(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.extend(rules);
        self
    }

    /// Builder-style [`unregister`](Self::unregister).
    pub fn without(mut self, label: &str) -> Self {
        self.unregister(label);
        self
    }

    pub fn get(&self, label: &str) -> Option<&Rule> {
        self.rules.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.rules.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in insertion order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Rule> {
        self.rules.values()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Rules in resolution order.
    pub fn ordered(&self) -> Vec<&Rule> {
        let mut ordered: Vec<&Rule> = self.rules.values().collect();
        ordered.sort_by_key(|r| Reverse(r.weight()));
        ordered
    }
}

impl<'a> IntoIterator for &'a RuleRegistry {
    type Item = &'a Rule;
    type IntoIter = indexmap::map::Values<'a, String, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Rule> for RuleRegistry {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new().with(iter)
    }
}
