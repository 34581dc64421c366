//! pip-style git URLs.
//!
//! ```text
//! MyProject @ git+ssh://git.example.com/MyProject
//! MyProject @ git+file:///home/user/projects/MyProject
//! MyProject @ git+https://git.example.com/MyProject.git@v1.0
//! MyProject @ git+https://git.example.com/MyProject.git@refs/pull/123/head
//! ```
//!
//! The `git+` prefix names the VCS, so every rule here is explicit. Patterns
//! are not start-anchored: detection accepts a full requirement line.
//!
//! See <https://pip.pypa.io/en/stable/topics/vcs-support/>.

use super::{RE_PATH, RE_PIP_REV, RE_SCP, RE_SUFFIX, RE_USER, compile};
use crate::Rule;
use once_cell::sync::Lazy;

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(
        "pip",
        vec![
            rule! {
                label: "pip-url",
                description: "pip-style git URL",
                pattern: format!(
                    r"
                    (?P<scheme>git\+(?:ssh|https?|file))
                    ://
                    {RE_USER}
                    {RE_PATH}
                    {RE_SUFFIX}?
                    {RE_PIP_REV}
                    "
                ),
                explicit: true,
            },
            // e.g. git+ssh://git@github.com:org/repo.git@main
            rule! {
                label: "pip-scp-url",
                description: "pip-style git+ssh URL with an scp-style path",
                pattern: format!(
                    r"
                    (?P<scheme>git\+ssh)
                    ://
                    {RE_USER}
                    {RE_SCP}
                    {RE_SUFFIX}?
                    {RE_PIP_REV}
                    "
                ),
                explicit: true,
            },
            // file:// has no host (RFC 8089), the path follows directly.
            rule! {
                label: "pip-file-url",
                description: "pip-style git+file:// URL",
                pattern: format!(
                    r"
                    (?P<scheme>git\+file)
                    ://
                    (?P<path>[^@]*)
                    {RE_PIP_REV}
                    "
                ),
                explicit: true,
            },
        ],
    )
});

/// pip rules: `pip-url`, `pip-scp-url`, `pip-file-url`.
pub fn rules() -> Vec<Rule> {
    RULES.clone()
}
