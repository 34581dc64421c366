use crate::{Field, Fields};

/// A repository location decomposed into fields.
///
/// Produced by the resolver from a single matching rule. Fields stay public so
/// callers can re-target a locator (change `hostname`, `path`, ...) before
/// serializing it again; nothing is re-validated after such edits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Locator {
    raw: String,
    pub scheme: Option<String>,
    pub user: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub suffix: Option<String>,
    /// Commit-ish: branch, tag, sha or ref.
    pub rev: Option<String>,
    matched_rule: Option<String>,
    defaulted: Fields,
}

impl Locator {
    /// An empty locator for `raw`, with no fields and no matched rule.
    pub fn new(raw: impl Into<String>) -> Self {
        Locator { raw: raw.into(), ..Locator::default() }
    }

    /// The input this locator was built from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Label of the rule that produced this locator.
    pub fn matched_rule(&self) -> Option<&str> {
        self.matched_rule.as_deref()
    }

    /// Fields that were filled from rule defaults rather than captured.
    pub fn defaulted(&self) -> Fields {
        self.defaulted
    }

    /// Fields currently set.
    pub fn present(&self) -> Fields {
        Field::ALL.into_iter().filter(|f| self.is_set(*f)).fold(Fields::empty(), |acc, f| acc | f.flag())
    }

    pub fn is_set(&self, field: Field) -> bool {
        match field {
            Field::Port => self.port.is_some(),
            other => self.text(other).is_some(),
        }
    }

    /// String view of any field; the port is formatted in decimal.
    pub fn get(&self, field: Field) -> Option<String> {
        match field {
            Field::Port => self.port.map(|p| p.to_string()),
            other => self.text(other).map(str::to_string),
        }
    }

    fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Scheme => self.scheme.as_deref(),
            Field::User => self.user.as_deref(),
            Field::Hostname => self.hostname.as_deref(),
            Field::Path => self.path.as_deref(),
            Field::Suffix => self.suffix.as_deref(),
            Field::Rev => self.rev.as_deref(),
            Field::Port => None,
        }
    }

    /// Store a textual value. Returns `false` when `field` is the port and
    /// `value` is not a valid port number.
    pub(crate) fn assign(&mut self, field: Field, value: &str) -> bool {
        let slot = match field {
            Field::Port => {
                return match parse_port(value) {
                    Some(port) => {
                        self.port = Some(port);
                        true
                    }
                    None => false,
                };
            }
            Field::Scheme => &mut self.scheme,
            Field::User => &mut self.user,
            Field::Hostname => &mut self.hostname,
            Field::Path => &mut self.path,
            Field::Suffix => &mut self.suffix,
            Field::Rev => &mut self.rev,
        };
        *slot = Some(value.to_string());
        true
    }

    pub(crate) fn mark_matched(&mut self, label: &str) {
        self.matched_rule = Some(label.to_string());
    }

    pub(crate) fn mark_defaulted(&mut self, field: Field) {
        self.defaulted |= field.flag();
    }
}

pub(crate) fn parse_port(value: &str) -> Option<u16> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
