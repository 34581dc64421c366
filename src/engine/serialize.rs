//! Locator serialization.
//!
//! The output shape is recomputed from the locator's current fields on every
//! call:
//!
//! ```text
//! scheme set, hostname set ──▶ {scheme}://{hostname}/{path}{suffix}
//! scheme *file, no hostname ─▶ {scheme}://{path}
//! no scheme ─────────────────▶ {user|git}@{hostname}:{path}{suffix}
//!
//! Style::Pip appends @{rev}, Style::Npm appends #{rev}
//! ```
//!
//! Suffixes are emitted only when present; nothing is synthesized. Ports are
//! not part of either canonical shape.

use crate::{Error, Field, Fields, Locator, Result};
use std::fmt;

/// How a locator is written back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Plain `git(1)` URLs.
    Git,
    /// pip requirement URLs: revision after `@`.
    #[default]
    Pip,
    /// npm dependency URLs: commit-ish after `#`.
    Npm,
}

impl Style {
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Git => "git",
            Style::Pip => "pip",
            Style::Npm => "npm",
        }
    }

    fn rev_separator(self) -> Option<char> {
        match self {
            Style::Git => None,
            Style::Pip => Some('@'),
            Style::Npm => Some('#'),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields `locator` must have set before it can be written out.
///
/// A `*file` scheme without a host only needs a path; every other shape needs
/// both host and path.
pub fn required_fields(locator: &Locator) -> Fields {
    match (locator.scheme.as_deref(), &locator.hostname) {
        (Some(scheme), None) if is_file_scheme(scheme) => Fields::PATH,
        _ => Fields::HOSTNAME | Fields::PATH,
    }
}

/// Build a canonical URL from `locator` in `style`.
pub fn to_url(locator: &Locator, style: Style) -> Result<String> {
    let missing = required_fields(locator).difference(locator.present());
    if let Some(field) = missing.fields().next() {
        return Err(Error::MissingField { field, style });
    }

    let path = locator.path.as_deref().unwrap_or_default();
    let mut url = match (locator.scheme.as_deref(), locator.hostname.as_deref()) {
        (Some(scheme), Some(hostname)) => format!("{scheme}://{hostname}/{path}"),
        (None, Some(hostname)) => {
            let user = locator.user.as_deref().unwrap_or("git");
            format!("{user}@{hostname}:{path}")
        }
        // Only file schemes get here without a host.
        (Some(scheme), None) => format!("{scheme}://{path}"),
        (None, None) => return Err(Error::MissingField { field: Field::Hostname, style }),
    };

    if let Some(suffix) = locator.suffix.as_deref() {
        url.push_str(suffix);
    }

    if let (Some(sep), Some(rev)) = (style.rev_separator(), locator.rev.as_deref()) {
        if !rev.is_empty() {
            url.push(sep);
            url.push_str(rev);
        }
    }

    Ok(url)
}

fn is_file_scheme(scheme: &str) -> bool {
    scheme == "file" || scheme.ends_with("+file")
}
