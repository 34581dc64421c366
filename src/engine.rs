//! Matching, detection and serialization engine.
//!
//! ## How the parts work together
//!
//! ```text
//! Rule::builder(..).build()        (rule.rs)
//!        │  compile search + anchored regex, check groups/defaults
//!        v
//! RuleRegistry                     (registry.rs)
//!        │  insertion order, label-unique, ordered() by weight
//!        ├───────────────────────────────┐
//!        v                               v
//! resolve / resolve_traced         is_valid_with
//!   (resolve.rs, metrics.rs)         (validate.rs)
//!        │  first anchored match        any unanchored match,
//!        │  captures + defaults         optional explicit filter
//!        v
//!     Locator ── caller edits fields ──▶ to_url(style)  (serialize.rs)
//! ```
//!
//! Every function here is pure: no I/O, no global state. The only state is
//! the registry the caller passes in.
//!
//! ## Extending
//!
//! - A new syntax is a new [`Rule`]; register it in a registry or a flavor.
//! - To make a specific rule beat a loose one that also matches (for example
//!   a `github:` shorthand vs. the scp-style rule), give it a higher weight,
//!   or unregister the loose rule.
//! - A new output convention is a new [`Style`] variant.

#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/registry.rs"]
mod registry;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/rule.rs"]
mod rule;
#[path = "engine/serialize.rs"]
mod serialize;
#[path = "engine/validate.rs"]
mod validate;

pub use metrics::{Attempt, Resolution};
pub use registry::RuleRegistry;
pub use resolve::{resolve, resolve_traced};
pub use rule::{Rule, RuleBuilder};
pub use serialize::{Style, required_fields, to_url};
pub use validate::is_valid_with;
