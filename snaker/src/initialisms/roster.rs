//! Declarative initialism configuration.

use super::InitialismSet;
use crate::InitialismError;

/// Declarative description of an [`InitialismSet`].
///
/// With the `serde` feature enabled, `InitialismSet` deserializes through a
/// `Roster`, so code generators can keep their initialisms in a config file:
///
/// ```toml
/// defaults = true
/// tokens = ["OAUTH", "SKU"]
/// pairs = [["SKUS", "SKUs"]]
/// ```
///
/// # Example
///
/// ```
/// use snaker::{InitialismSet, Roster};
///
/// let set = InitialismSet::try_from(
///     Roster::new().with_defaults().tokens(&["SKU"]).pairs(&[("SKUS", "SKUs")]),
/// )?;
/// assert_eq!(set.snake_to_camel("sku_ids"), "SKUIDs");
/// assert_eq!(set.snake_to_camel("skus"), "SKUs");
/// # Ok::<(), snaker::InitialismError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[non_exhaustive]
pub struct Roster {
    /// Start from the built-in roster instead of an empty set.
    pub defaults: bool,
    /// Tokens rendered as their upper-case spelling.
    pub tokens: Vec<String>,
    /// `(upper, rendered)` overrides, applied after `tokens`.
    pub pairs: Vec<(String, String)>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Include the built-in initialisms and plurals.
    #[must_use]
    pub const fn with_defaults(mut self) -> Self {
        self.defaults = true;
        self
    }

    /// Append tokens.
    #[must_use]
    pub fn tokens(mut self, tokens: &[&str]) -> Self {
        self.tokens.extend(tokens.iter().map(|s| (*s).to_string()));
        self
    }

    /// Append `(upper, rendered)` overrides.
    #[must_use]
    pub fn pairs(mut self, pairs: &[(&str, &str)]) -> Self {
        self.pairs.extend(
            pairs
                .iter()
                .map(|(upper, rendered)| ((*upper).to_string(), (*rendered).to_string())),
        );
        self
    }
}

impl TryFrom<Roster> for InitialismSet {
    type Error = InitialismError;

    fn try_from(roster: Roster) -> Result<Self, Self::Error> {
        let base = if roster.defaults {
            Self::common()
        } else {
            Self::default()
        };
        base.with_tokens(roster.tokens)?
            .with_canonical_pairs(roster.pairs)
    }
}
