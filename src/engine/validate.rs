//! Detection.
//!
//! Validation is looser than resolution: a rule counts if its
//! pattern matches *anywhere* in the input. Order and weight are irrelevant
//! here, only whether any candidate rule matches.

use super::registry::RuleRegistry;

/// Whether any rule in `registry` matches `raw`.
///
/// With `explicit` set, only rules whose explicitness equals it are tried:
/// `Some(true)` answers "is this unambiguously this VCS?", `Some(false)`
/// restricts to syntaxes shared with other tools.
pub fn is_valid_with(raw: &str, registry: &RuleRegistry, explicit: Option<bool>) -> bool {
    registry.iter().filter(|rule| explicit.is_none_or(|want| rule.is_explicit() == want)).any(|rule| rule.is_match(raw))
}
