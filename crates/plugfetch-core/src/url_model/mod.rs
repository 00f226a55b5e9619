//! URL modeling: acceptance rules and local name derivation.
//!
//! [`normalize`] turns an untrusted source string into a [`CanonicalUrl`]
//! (or a [`Rejected`] reason); [`local_name`] derives the deterministic,
//! filesystem-safe directory name the artifact is installed under.

mod naming;
mod normalize;
mod sanitize;

pub use naming::{local_name, local_name_from_str};
pub use normalize::{normalize, CanonicalUrl, Rejected};
pub use sanitize::sanitize_component;

/// Basename of a local name (`github.com/o/repo` → `repo`).
pub fn basename(local_name: &str) -> &str {
    local_name.rsplit('/').next().unwrap_or(local_name)
}
