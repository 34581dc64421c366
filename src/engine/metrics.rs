//! Resolution traces.
//!
//! [`resolve`](super::resolve) returns only the outcome. When a caller wants to
//! see *why* an input resolved the way it did (the CLI report, rule authors
//! tuning weights), [`resolve_traced`](super::resolve_traced) records every
//! rule it tried, in evaluation order, plus the elapsed time.

use crate::{Locator, Result};
use std::time::Duration;

/// One rule evaluation during a traced resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub label: String,
    pub weight: i32,
    pub explicit: bool,
    /// Whether the anchored pattern matched.
    pub matched: bool,
}

/// Outcome of [`resolve_traced`](super::resolve_traced).
#[derive(Debug)]
pub struct Resolution {
    pub input: String,
    /// Rules tried, in order. Evaluation stops after the first match.
    pub attempts: Vec<Attempt>,
    pub outcome: Result<Locator>,
    pub elapsed: Duration,
}

impl Resolution {
    /// The attempt that matched, if any.
    pub fn winner(&self) -> Option<&Attempt> {
        self.attempts.iter().find(|a| a.matched)
    }

    pub fn locator(&self) -> Option<&Locator> {
        self.outcome.as_ref().ok()
    }
}
