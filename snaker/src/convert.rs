//! CamelCase <-> snake_case conversion.
//!
//! [`InitialismSet::camel_to_snake`] scans the input once, left to right,
//! deciding at every rune whether a word boundary falls in front of it and
//! whether a registered initialism starts there. The outcome for runs of
//! capitals depends on what preceded them:
//!
//! | Input         | Output             |
//! |---------------|--------------------|
//! | `HTTPWriter`  | `http_writer`      |
//! | `uHTTPWriter` | `u_http_writer`    |
//! | `UHTTPWriter` | `u_h_t_t_p_writer` |
//! | `XMLHTTPACL`  | `xml_http_acl`     |
//!
//! An initialism is only taken where the previous rune was not upper-case,
//! or where the previous token was itself an initialism. A capital that
//! merely continues an unrecognized run is emitted as a single letter.

use crate::trace::trace;
use crate::{InitialismSet, to_identifier};

/// What the scanner remembers about the previous step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ScanState {
    /// First rune of the previous token was upper-case.
    was_upper: bool,
    /// First rune of the previous token was a letter.
    was_letter: bool,
    /// Previous token was a matched initialism.
    was_initialism: bool,
}

impl ScanState {
    /// Whether an underscore goes in front of a rune with this classification.
    const fn needs_separator(self, is_upper: bool, is_letter: bool) -> bool {
        (self.was_letter && is_upper) || (self.was_initialism && is_letter)
    }

    /// Whether an initialism may start at the current position.
    const fn accepts_initialism(self) -> bool {
        !self.was_upper || self.was_initialism
    }

    /// State after emitting a token of `len` runes that starts with a rune of
    /// this classification.
    const fn after(is_upper: bool, is_letter: bool, len: usize) -> Self {
        Self {
            was_upper: is_upper,
            was_letter: is_letter,
            was_initialism: len > 1,
        }
    }
}

impl InitialismSet {
    /// Convert `name` from CamelCase ("AnIdentifier") to snake_case
    /// ("an_identifier").
    ///
    /// Non-letters are kept in place; the whole result is lower-cased.
    ///
    /// ```
    /// let set = snaker::InitialismSet::default_set();
    /// assert_eq!(set.camel_to_snake("XMLHTTPACL"), "xml_http_acl");
    /// assert_eq!(set.camel_to_snake("_Something-IDs_"), "_something-ids_");
    /// ```
    #[must_use]
    pub fn camel_to_snake(&self, name: &str) -> String {
        let runes: Vec<char> = name.chars().collect();
        let mut out = String::with_capacity(name.len() + name.len() / 2);
        let mut state = ScanState::default();
        let mut pos = 0;

        while let Some(rest @ [c, ..]) = runes.get(pos..) {
            let (is_upper, is_letter) = (c.is_uppercase(), c.is_alphabetic());

            if state.needs_separator(is_upper, is_letter) {
                trace!("scan", "boundary before", pos);
                out.push('_');
            }

            let len = match self.longest_match(rest) {
                Some((len, rendered)) if state.accepts_initialism() => {
                    trace!("scan", "initialism", rendered);
                    out.push_str(rendered);
                    len
                },
                _ => {
                    out.push(*c);
                    1
                },
            };

            state = ScanState::after(is_upper, is_letter, len);
            pos += len;
        }

        out.to_lowercase()
    }

    /// Convert `name` from snake_case to CamelCase.
    ///
    /// Registered initialisms are emitted in their rendered form; other words
    /// are capitalized. Empty segments are skipped.
    ///
    /// ```
    /// let set = snaker::InitialismSet::default_set();
    /// assert_eq!(set.snake_to_camel("something_ids"), "SomethingIDs");
    /// assert_eq!(set.snake_to_camel("_a_c_l_"), "ACL");
    /// ```
    #[must_use]
    pub fn snake_to_camel(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        for word in name.split('_').filter(|word| !word.is_empty()) {
            match self.get(word) {
                Some(rendered) => out.push_str(rendered),
                None => push_capitalized(&mut out, word),
            }
        }
        out
    }

    /// Convert `name` to snake_case and clean it with [`to_identifier`].
    #[must_use]
    pub fn camel_to_snake_identifier(&self, name: &str) -> String {
        to_identifier(&self.camel_to_snake(name))
    }

    /// Clean `name` with [`to_identifier`] and convert it to CamelCase.
    ///
    /// ```
    /// let set = snaker::InitialismSet::default_set();
    /// assert_eq!(set.snake_to_camel_identifier("__2__xml___thing---"), "XMLThing");
    /// ```
    #[must_use]
    pub fn snake_to_camel_identifier(&self, name: &str) -> String {
        self.snake_to_camel(&to_identifier(name))
    }

    /// Normalize any mix of cases and separators to a CamelCase identifier.
    ///
    /// ```
    /// let set = snaker::InitialismSet::default_set();
    /// assert_eq!(
    ///     set.force_camel_identifier("APoorly_named_httpMethod"),
    ///     "APoorlyNamedHTTPMethod"
    /// );
    /// ```
    #[must_use]
    pub fn force_camel_identifier(&self, name: &str) -> String {
        self.snake_to_camel_identifier(&self.camel_to_snake(name))
    }

    /// Like [`force_camel_identifier`](Self::force_camel_identifier), with
    /// the whole leading word lower-cased.
    ///
    /// ```
    /// let set = snaker::InitialismSet::default_set();
    /// assert_eq!(set.force_lower_camel_identifier("XmlHttpACL"), "xmlHTTPACL");
    /// assert_eq!(set.force_lower_camel_identifier("IDsOfUsers"), "idsOfUsers");
    /// ```
    #[must_use]
    pub fn force_lower_camel_identifier(&self, name: &str) -> String {
        let snake = self.camel_to_snake_identifier(name);
        let (first, rest) = snake.split_once('_').unwrap_or((snake.as_str(), ""));

        let mut out = first.to_lowercase();
        out.push_str(&self.snake_to_camel(rest));
        out
    }
}

/// Push `word` with its first character upper-cased and the rest lower-cased.
fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}
