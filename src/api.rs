use crate::engine::{self, Resolution, RuleRegistry, Style};
use crate::{Locator, Result, rules};
use once_cell::sync::Lazy;

static DEFAULT_FLAVOR: Lazy<Flavor> = Lazy::new(Flavor::combined);

/// A parser flavor: the rules it recognizes and how it writes URLs back out.
///
/// Flavors are plain values. Derive a new one by cloning a built-in and
/// editing its registry:
///
/// ```
/// use vcsurl::{Field, Flavor, Rule};
///
/// let mut flavor = Flavor::combined();
/// flavor.registry_mut().register(
///     Rule::builder("gh-prefix", r"^github:(?P<path>.+)$")
///         .default(Field::Scheme, "https")
///         .default(Field::Hostname, "github.com")
///         .explicit(true)
///         .weight(100)
///         .build()
///         .unwrap(),
/// );
///
/// let url = flavor.parse("github:vcs-python/libvcs").unwrap();
/// assert_eq!(flavor.to_url(&url).unwrap(), "https://github.com/vcs-python/libvcs");
/// ```
#[derive(Debug, Clone)]
pub struct Flavor {
    name: String,
    registry: RuleRegistry,
    style: Style,
}

impl Flavor {
    pub fn new(name: impl Into<String>, registry: RuleRegistry, style: Style) -> Self {
        Flavor { name: name.into(), registry, style }
    }

    /// Strict `git(1)` syntax only.
    pub fn git() -> Self {
        Self::new("git", rules::git::rules().into_iter().collect(), Style::Git)
    }

    /// pip requirement URLs only.
    pub fn pip() -> Self {
        Self::new("pip", rules::pip::rules().into_iter().collect(), Style::Pip)
    }

    /// `git(1)` plus pip syntax; revisions are written pip-style.
    pub fn combined() -> Self {
        let registry = RuleRegistry::from_iter(rules::git::rules()).with(rules::pip::rules());
        Self::new("combined", registry, Style::Pip)
    }

    /// `git(1)` plus npm syntax; revisions are written npm-style.
    pub fn npm() -> Self {
        let registry = RuleRegistry::from_iter(rules::git::rules()).with(rules::npm::rules());
        Self::new("npm", registry, Style::Npm)
    }

    /// Look up a built-in flavor by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "git" => Some(Self::git()),
            "pip" => Some(Self::pip()),
            "combined" => Some(Self::combined()),
            "npm" => Some(Self::npm()),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut RuleRegistry {
        &mut self.registry
    }

    /// Decompose `raw` using this flavor's rules.
    pub fn parse(&self, raw: &str) -> Result<Locator> {
        engine::resolve(raw, &self.registry)
    }

    /// [`parse`](Self::parse) with a per-rule trace.
    pub fn resolve_traced(&self, raw: &str) -> Resolution {
        engine::resolve_traced(raw, &self.registry)
    }

    /// Whether any rule recognizes `raw`, optionally only explicit (or only
    /// non-explicit) rules.
    pub fn is_valid(&self, raw: &str, explicit: Option<bool>) -> bool {
        engine::is_valid_with(raw, &self.registry, explicit)
    }

    /// Whether `raw` unambiguously targets this VCS.
    pub fn is_explicit(&self, raw: &str) -> bool {
        self.is_valid(raw, Some(true))
    }

    /// Write `locator` back out in this flavor's style.
    pub fn to_url(&self, locator: &Locator) -> Result<String> {
        engine::to_url(locator, self.style)
    }
}

impl Default for Flavor {
    fn default() -> Self {
        Self::combined()
    }
}

/// Parse `raw` with the combined (`git(1)` + pip) flavor.
///
/// # Example
/// ```
/// let url = vcsurl::parse("git+https://github.com/vcs-python/libvcs.git@v0.10.0").unwrap();
/// assert_eq!(url.rev.as_deref(), Some("v0.10.0"));
/// assert_eq!(url.matched_rule(), Some("pip-url"));
/// ```
pub fn parse(raw: &str) -> Result<Locator> {
    DEFAULT_FLAVOR.parse(raw)
}

/// Validate `raw` with the combined (`git(1)` + pip) flavor.
pub fn is_valid(raw: &str, explicit: Option<bool>) -> bool {
    DEFAULT_FLAVOR.is_valid(raw, explicit)
}
