//! Initialism registry and longest-match lookup.
//!
//! An [`InitialismSet`] maps upper-case tokens ("HTTP", "IDS") to the exact
//! spelling emitted in CamelCase output ("HTTP", "IDs"). The case scanner
//! asks it for the longest registered token at each position.
//!
//! # Example
//!
//! ```
//! use snaker::InitialismSet;
//!
//! let set = InitialismSet::new(["ID", "HTTP"])?
//!     .with_canonical_pairs([("IDS", "IDs")])?;
//!
//! assert!(set.is_registered("http"));
//! assert_eq!(set.camel_to_snake("UserIDs"), "user_ids");
//! assert_eq!(set.snake_to_camel("user_ids"), "UserIDs");
//! # Ok::<(), snaker::InitialismError>(())
//! ```

mod common;
mod roster;

pub use common::{common_initialisms, common_plurals};
pub use roster::Roster;

use crate::InitialismError;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Shortest token that can be registered; single letters are ordinary
/// capitalization.
const MIN_INITIALISM_LEN: usize = 2;

static DEFAULT_SET: LazyLock<InitialismSet> = LazyLock::new(InitialismSet::common);

/// Registry of known initialisms.
///
/// Lookups take `&self` and registration takes `&mut self`, so a set shared
/// between threads is read-only for as long as it is shared. Populate it
/// first, then hand out references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Roster"))]
pub struct InitialismSet {
    /// Lookup key -> rendered form.
    tokens: BTreeMap<String, String>,
    /// Length in chars of the longest key. Never decreases.
    max_len: usize,
}

impl InitialismSet {
    /// Create a set containing `tokens`, each rendered as its upper-case
    /// spelling.
    ///
    /// # Errors
    ///
    /// Returns [`InitialismError::InvalidToken`] if any token is shorter than
    /// two characters.
    pub fn new<I, S>(tokens: I) -> Result<Self, InitialismError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::default().with_tokens(tokens)
    }

    /// Create a fresh set holding the built-in roster and its plurals.
    ///
    /// Use this as a starting point for a customized set; for the shared
    /// read-only instance see [`default_set`](Self::default_set).
    #[must_use]
    pub fn common() -> Self {
        let mut set = Self::default();
        for token in common_initialisms() {
            set.insert_token(token);
        }
        for token in common_plurals() {
            set.insert_pair(&format!("{token}S"), &format!("{token}s"));
        }
        set
    }

    /// The process-wide default set, built on first use.
    ///
    /// This is the set used by the crate-level conversion functions.
    #[must_use]
    pub fn default_set() -> &'static Self {
        &DEFAULT_SET
    }

    /// Builder form of [`add_tokens`](Self::add_tokens).
    pub fn with_tokens<I, S>(mut self, tokens: I) -> Result<Self, InitialismError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_tokens(tokens)?;
        Ok(self)
    }

    /// Builder form of [`add_canonical_pairs`](Self::add_canonical_pairs).
    pub fn with_canonical_pairs<I, U, R>(mut self, pairs: I) -> Result<Self, InitialismError>
    where
        I: IntoIterator<Item = (U, R)>,
        U: AsRef<str>,
        R: AsRef<str>,
    {
        self.add_canonical_pairs(pairs)?;
        Ok(self)
    }

    /// Register tokens, each rendered as its upper-case spelling.
    ///
    /// Re-registering a token resets its rendered form to the upper-case
    /// spelling.
    ///
    /// # Errors
    ///
    /// Returns [`InitialismError::InvalidToken`] if any token is shorter than
    /// two characters. Nothing is registered in that case.
    pub fn add_tokens<I, S>(&mut self, tokens: I) -> Result<(), InitialismError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens
            .into_iter()
            .map(|token| {
                let upper = token.as_ref().to_uppercase();
                if upper.chars().count() < MIN_INITIALISM_LEN {
                    return Err(InitialismError::invalid_token(&upper));
                }
                Ok(upper)
            })
            .collect::<Result<Vec<_>, _>>()?;

        for token in &tokens {
            self.insert_token(token);
        }
        Ok(())
    }

    /// Register `(upper, rendered)` pairs, such as `("IDS", "IDs")`.
    ///
    /// `rendered` becomes the output spelling for `upper`, and is itself
    /// registered as a lookup key so mixed-case input ("UserIDs") is
    /// recognized while scanning.
    ///
    /// # Errors
    ///
    /// Returns [`InitialismError::InvalidPair`] if the members differ when
    /// upper-cased, or [`InitialismError::InvalidToken`] if the pair is
    /// shorter than two characters. Nothing is registered in either case.
    pub fn add_canonical_pairs<I, U, R>(&mut self, pairs: I) -> Result<(), InitialismError>
    where
        I: IntoIterator<Item = (U, R)>,
        U: AsRef<str>,
        R: AsRef<str>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(upper, rendered)| {
                let (upper, rendered) = (upper.as_ref(), rendered.as_ref());
                let key = upper.to_uppercase();
                if key != rendered.to_uppercase() {
                    return Err(InitialismError::invalid_pair(upper, rendered));
                }
                if key.chars().count() < MIN_INITIALISM_LEN {
                    return Err(InitialismError::invalid_token(&key));
                }
                Ok((key, rendered.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (key, rendered) in &pairs {
            self.insert_pair(key, rendered);
        }
        Ok(())
    }

    /// Whether `s` (in any case) is a registered initialism.
    #[inline]
    #[must_use]
    pub fn is_registered(&self, s: &str) -> bool {
        self.tokens.contains_key(&s.to_uppercase())
    }

    /// Rendered form of `s` (in any case), if registered.
    ///
    /// ```
    /// let set = snaker::InitialismSet::default_set();
    /// assert_eq!(set.get("ids"), Some("IDs"));
    /// assert_eq!(set.get("http"), Some("HTTP"));
    /// assert_eq!(set.get("name"), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, s: &str) -> Option<&str> {
        self.tokens.get(&s.to_uppercase()).map(String::as_str)
    }

    /// Longest registered initialism at the start of `runes`.
    ///
    /// Keys are compared exactly against the input, so "Id" does not match
    /// "ID" while "IDs" matches the registered plural. The lookahead window
    /// is the run of letters at the front of `runes` (capped at
    /// [`max_len`](Self::max_len)) plus one trailing character, which lets
    /// keys like "UTF8" match.
    ///
    /// ```
    /// let set = snaker::InitialismSet::default_set();
    /// let runes: Vec<char> = "HTTPSServer".chars().collect();
    /// assert_eq!(set.peek(&runes), Some("HTTPS"));
    /// ```
    #[must_use]
    pub fn peek(&self, runes: &[char]) -> Option<&str> {
        self.longest_match(runes).map(|(_, rendered)| rendered)
    }

    /// Like [`peek`](Self::peek), also returning the number of runes matched.
    pub(crate) fn longest_match(&self, runes: &[char]) -> Option<(usize, &str)> {
        if runes.len() < MIN_INITIALISM_LEN {
            return None;
        }

        let letters = runes
            .iter()
            .take(self.max_len)
            .take_while(|c| c.is_alphabetic())
            .count();
        if letters < MIN_INITIALISM_LEN {
            return None;
        }

        let longest = self.max_len.min(letters + 1).min(runes.len());
        (MIN_INITIALISM_LEN..=longest).rev().find_map(|len| {
            let key: String = runes.iter().take(len).collect();
            self.tokens.get(&key).map(|rendered| (len, rendered.as_str()))
        })
    }

    /// Length in characters of the longest registered key.
    #[inline]
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Number of lookup keys, including rendered plural spellings.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no initialisms are registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over `(key, rendered)` entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens
            .iter()
            .map(|(key, rendered)| (key.as_str(), rendered.as_str()))
    }

    fn insert_token(&mut self, token: &str) {
        self.insert(token.to_string(), token.to_string());
    }

    fn insert_pair(&mut self, key: &str, rendered: &str) {
        self.insert(key.to_string(), rendered.to_string());
        self.insert(rendered.to_string(), rendered.to_string());
    }

    fn insert(&mut self, key: String, rendered: String) {
        self.max_len = self.max_len.max(key.chars().count());
        self.tokens.insert(key, rendered);
    }
}
