//! Patterns understood by `git(1)`.
//!
//! See <https://git-scm.com/docs/git-clone#URLS>. Only `git://` is exclusive
//! to git; http(s), ssh and scp-style addresses are shared with other tools.

use super::{RE_PATH, RE_SCP, RE_SUFFIX, RE_USER, compile};
use crate::Rule;
use once_cell::sync::Lazy;

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(
        "git",
        vec![
            // e.g. https://github.com/vcs-python/libvcs.git
            rule! {
                label: "core-git-https",
                description: "http(s) URL with optional .git suffix",
                pattern: format!(
                    r"
                    ^(?P<scheme>https?)
                    ://
                    {RE_USER}
                    {RE_PATH}
                    {RE_SUFFIX}?
                    "
                ),
            },
            rule! {
                label: "core-git-ssh",
                description: "ssh:// URL, optionally with user and port",
                pattern: format!(
                    r"
                    ^(?P<scheme>ssh)
                    ://
                    {RE_USER}
                    {RE_PATH}
                    {RE_SUFFIX}?
                    "
                ),
            },
            rule! {
                label: "core-git-protocol",
                description: "git:// daemon URL",
                pattern: format!(
                    r"
                    ^(?P<scheme>git)
                    ://
                    {RE_USER}
                    {RE_PATH}
                    {RE_SUFFIX}?
                    "
                ),
                explicit: true,
            },
            // e.g. git@github.com:vcs-python/libvcs.git
            rule! {
                label: "core-git-scp",
                description: "scp(1) / ssh(1) style address",
                pattern: format!(
                    r"
                    ^{RE_USER}
                    {RE_SCP}
                    {RE_SUFFIX}?
                    "
                ),
                defaults: { User => "git" },
            },
        ],
    )
});

/// `git(1)` rules: `core-git-https`, `core-git-ssh`, `core-git-protocol`,
/// `core-git-scp`.
pub fn rules() -> Vec<Rule> {
    RULES.clone()
}
