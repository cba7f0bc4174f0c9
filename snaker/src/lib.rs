// =============================================================================
// CRATE-LEVEL QUALITY LINTS (following Tokio/Serde standards)
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
#![allow(clippy::doc_markdown)] // snake_case / CamelCase appear throughout the docs
#![allow(clippy::missing_errors_doc)] // # Errors sections - doc-heavy
#![allow(clippy::return_self_not_must_use)] // Builder pattern methods return Self by design

//! # snaker - CamelCase / snake_case conversion with initialisms
//!
//! Converts identifiers between CamelCase and snake_case while keeping
//! multi-letter initialisms ("HTTP", "ID", "UUID") intact instead of
//! splitting them letter by letter. Built for code generators that turn
//! database columns or API fields into idiomatic names.
//!
//! ## Quick Start
//!
//! ```
//! assert_eq!(snaker::camel_to_snake("AnIdentifier"), "an_identifier");
//! assert_eq!(snaker::camel_to_snake("XMLHTTPACL"), "xml_http_acl");
//! assert_eq!(snaker::snake_to_camel("an_identifier"), "AnIdentifier");
//! assert_eq!(snaker::snake_to_camel("user_ids"), "UserIDs");
//!
//! assert_eq!(
//!     snaker::force_camel_identifier("APoorly_named_httpMethod"),
//!     "APoorlyNamedHTTPMethod"
//! );
//! assert_eq!(
//!     snaker::force_lower_camel_identifier("APoorly_named_httpMethod"),
//!     "aPoorlyNamedHTTPMethod"
//! );
//! ```
//!
//! ## Custom Initialisms
//!
//! The free functions use [`InitialismSet::default_set`]. Build your own set
//! to recognize other initialisms:
//!
//! ```
//! use snaker::InitialismSet;
//!
//! let set = InitialismSet::common()
//!     .with_tokens(["GPU", "SKU"])?
//!     .with_canonical_pairs([("GPUS", "GPUs")])?;
//!
//! assert_eq!(set.camel_to_snake("GPUInfo"), "gpu_info");
//! assert_eq!(set.snake_to_camel("sku_gpus"), "SKUGPUs");
//! # Ok::<(), snaker::InitialismError>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: deserialize an [`InitialismSet`] from a [`Roster`] document
//! - `scan-trace`: print scanner decisions to stderr

mod convert;
mod error;
mod identifier;
mod initialisms;
mod trace;

pub use error::InitialismError;
pub use identifier::{is_identifier_char, to_identifier};
pub use initialisms::{InitialismSet, Roster, common_initialisms, common_plurals};

/// Convert `name` from CamelCase ("AnIdentifier") to snake_case
/// ("an_identifier") using the default initialisms.
///
/// See [`InitialismSet::camel_to_snake`].
#[must_use]
pub fn camel_to_snake(name: &str) -> String {
    InitialismSet::default_set().camel_to_snake(name)
}

/// Convert `name` from CamelCase to a snake_case identifier using the
/// default initialisms.
///
/// See [`InitialismSet::camel_to_snake_identifier`].
#[must_use]
pub fn camel_to_snake_identifier(name: &str) -> String {
    InitialismSet::default_set().camel_to_snake_identifier(name)
}

/// Convert `name` from snake_case to CamelCase using the default
/// initialisms.
///
/// See [`InitialismSet::snake_to_camel`].
#[must_use]
pub fn snake_to_camel(name: &str) -> String {
    InitialismSet::default_set().snake_to_camel(name)
}

/// Convert `name` to a CamelCase identifier using the default initialisms.
///
/// See [`InitialismSet::snake_to_camel_identifier`].
#[must_use]
pub fn snake_to_camel_identifier(name: &str) -> String {
    InitialismSet::default_set().snake_to_camel_identifier(name)
}

/// Force `name` to a CamelCase identifier ("AnIdentifier") using the default
/// initialisms.
#[must_use]
pub fn force_camel_identifier(name: &str) -> String {
    InitialismSet::default_set().force_camel_identifier(name)
}

/// Force `name` to a lower camelCase identifier ("anIdentifier") using the
/// default initialisms.
#[must_use]
pub fn force_lower_camel_identifier(name: &str) -> String {
    InitialismSet::default_set().force_lower_camel_identifier(name)
}

/// Whether `s` is one of the default initialisms.
///
/// ```
/// assert!(snaker::is_initialism("Http"));
/// assert!(snaker::is_initialism("IDS"));
/// assert!(!snaker::is_initialism("name"));
/// ```
#[must_use]
pub fn is_initialism(s: &str) -> bool {
    InitialismSet::default_set().is_registered(s)
}

// ============================================================================
// API Contract Tests (compile-time assertions)
// ============================================================================
