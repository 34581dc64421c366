//! npm-style git URLs.
//!
//! ```text
//! <protocol>://[<user>[:<password>]@]<hostname>[:<port>][:][/]<path>[#<commit-ish> | #semver:<semver>]
//!
//! ssh://git@github.com:npm/cli.git#v1.0.27
//! git+ssh://git@github.com:npm/cli#semver:^5.0
//! git+https://isaacs@github.com/npm/cli.git
//! git://github.com/npm/cli.git#v1.0.27
//! github:npm/cli#v1.0.27
//! ```
//!
//! Passwords are matched so the URL is recognized, but never captured.
//! `#semver:<range>` is kept verbatim in `rev`.
//!
//! The host shorthands carry weight 10: without it `github:npm/cli` is also an
//! scp-style address (host `github`) and `core-git-scp` would claim it first.
//!
//! See <https://docs.npmjs.com/cli/v8/configuring-npm/package-json#git-urls-as-dependencies>.

use super::{RE_LOOSE_PATH, RE_NPM_REV, RE_SUFFIX, RE_USER_PASSWORD, compile};
use crate::Rule;
use once_cell::sync::Lazy;

const SHORTHAND_WEIGHT: i32 = 10;

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(
        "npm",
        vec![
            rule! {
                label: "npm-git-url",
                description: "npm git+<protocol>:// or git:// URL",
                pattern: format!(
                    r"
                    (?P<scheme>git\+(?:ssh|https?|file)|git)
                    ://
                    {RE_USER_PASSWORD}
                    {RE_LOOSE_PATH}
                    {RE_SUFFIX}?
                    {RE_NPM_REV}
                    "
                ),
                explicit: true,
            },
            rule! {
                label: "npm-url",
                description: "npm ssh:// or http(s):// URL with optional commit-ish",
                pattern: format!(
                    r"
                    ^(?P<scheme>ssh|https?)
                    ://
                    {RE_USER_PASSWORD}
                    {RE_LOOSE_PATH}
                    {RE_SUFFIX}?
                    {RE_NPM_REV}
                    "
                ),
            },
            shorthand("npm-github", "github", "github.com"),
            shorthand("npm-gitlab", "gitlab", "gitlab.com"),
            shorthand("npm-bitbucket", "bitbucket", "bitbucket.org"),
        ],
    )
});

fn shorthand(label: &'static str, prefix: &'static str, hostname: &'static str) -> crate::Result<Rule> {
    rule! {
        label: label,
        description: format!("{prefix}:<org>/<repo> shorthand for https://{hostname}"),
        pattern: format!(
            r"
            ^{prefix}:
            (?P<path>\w[^:@\#]*?)
            {RE_SUFFIX}?
            {RE_NPM_REV}
            "
        ),
        defaults: { Scheme => "https", Hostname => hostname },
        explicit: true,
        weight: SHORTHAND_WEIGHT,
    }
}

/// npm rules: `npm-git-url`, `npm-url`, `npm-github`, `npm-gitlab`,
/// `npm-bitbucket`.
pub fn rules() -> Vec<Rule> {
    RULES.clone()
}
