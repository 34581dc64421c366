//! Built-in rule sets.
//!
//! - [`git`]: syntaxes `git(1)` itself accepts.
//! - [`pip`]: pip requirement URLs (`git+https://…@rev`).
//! - [`npm`]: npm dependency URLs (`git+ssh://…#committish`, `github:org/repo`).
//!
//! The pattern fragments below are public so new rules can be assembled the
//! same way the built-ins are. They are written for free-spacing mode
//! ([`RuleBuilder::verbose`](crate::RuleBuilder::verbose)).

use crate::{Result, Rule};

pub mod git;
pub mod npm;
pub mod pip;

#[cfg(test)]
mod tests;

/// Optional user, e.g. `git@`.
pub const RE_USER: &str = r"
    (?:(?P<user>[^/:@]+)@)?
";

/// Optional user with an optional password. The password is matched but not
/// captured.
pub const RE_USER_PASSWORD: &str = r"
    (?:(?P<user>[^/:@]+)(?::[^/:@]*)?@)?
";

/// Host, optional port, then a `/`-separated path.
///
/// The path is required. It is lazy so an anchored match hands a trailing
/// `.git` to [`RE_SUFFIX`] while still allowing dots inside the path.
pub const RE_PATH: &str = r"
    (?P<hostname>[^/:@]+)
    (?::(?P<port>\d{1,5}))?
    /
    (?P<path>\w[^:@\#]*?)
";

/// Like [`RE_PATH`], but the path may also follow a `:`
/// (`ssh://git@github.com:npm/cli`). A port is only taken when a separator
/// follows it.
pub const RE_LOOSE_PATH: &str = r"
    (?P<hostname>[^/:@]+)
    (?::(?P<port>\d{1,5}))?
    [:/]
    (?P<path>\w[^:@\#]*?)
";

/// scp-style `host:path`. The path must start with a word character so
/// Windows paths like `C:/foo` are not mistaken for a host.
pub const RE_SCP: &str = r"
    (?P<hostname>[^/:@]+)
    :
    (?P<path>\w[^:@\#]*?)
";

/// Conventional repository suffix; callers add their own quantifier.
pub const RE_SUFFIX: &str = r"(?P<suffix>\.git)";

/// pip revision: `@branch`, `@tag`, `@sha`, `@refs/pull/1/head`.
pub const RE_PIP_REV: &str = r"
    (?:@(?P<rev>.+))?
";

/// npm commit-ish: `#v1.0.27`, `#semver:^5.0`.
pub const RE_NPM_REV: &str = r"
    (?:\#(?P<rev>.+))?
";

/// Unwrap a built-in rule set. The patterns are constants, so a failure here
/// is a bug in this crate.
fn compile(set: &str, rules: Vec<Result<Rule>>) -> Vec<Rule> {
    rules
        .into_iter()
        .map(|rule| rule.unwrap_or_else(|err| panic!("built-in {set} rule does not compile: {err}")))
        .collect()
}
