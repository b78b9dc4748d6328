#![warn(missing_docs)]
//! Glob-style pattern matching for access control decisions.
//!
//! Matches resource names, index names, and role permissions against
//! configured patterns. A raw pattern string is one of:
//! - an exact literal — no metacharacters, plain string equality
//! - a glob — `*` matches zero or more characters, `?` exactly one
//! - an anchored regular expression — written `/.../`, required to match
//!   the entire candidate, never a substring
//! - a case-insensitive variant of any of the above
//!
//! The per-call entry point is [`matches`]; [`Wildcard`] is the compiled
//! form that pays classification (and regex compilation) once and is then
//! reusable and shareable across any number of match calls. The
//! [`combine`] functions answer aggregate questions over many patterns and
//! candidates, and the [`setops`] functions prune a caller-owned set of
//! names in place.
//!
//! Everything fails closed: absent inputs never match, and an empty
//! pattern collection compiles to [`Wildcard::NONE`] — an empty filter
//! authorizes nothing rather than everything.
//!
//! ```rust
//! # use std::error::Error;
//! use wildcard_match::{matches, Wildcard};
//!
//! # fn main() -> Result<(), Box<dyn Error>> {
//! assert!(matches("logs-*", "logs-2020.01.01", false));
//! assert!(matches("/logs-[0-9]{4}/", "logs-2020", false));
//!
//! let allowed = Wildcard::case_insensitive_any(["admin-*", "ops"])?;
//! assert!(allowed.matches("Admin-EU"));
//! assert!(!allowed.matches("guest"));
//! # Ok(())
//! # }
//! ```

// Activate most of the clippy::restriction lints that we have come across...
#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::panic)]
#![warn(clippy::pattern_type_mismatch)]
#![warn(clippy::shadow_reuse)]
#![warn(clippy::shadow_same)]
#![warn(clippy::str_to_string)]
// ...except for these ones.
#![allow(clippy::implicit_return)]
// Activate most of the clippy::pedantic lints that we have come across...
#![warn(clippy::explicit_into_iter_loop)]
#![warn(clippy::match_bool)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::panic_in_result_fn)]
#![warn(clippy::unnecessary_wraps)]
#![warn(clippy::unreachable)]
// ...except for these ones.
#![allow(clippy::module_name_repetitions)]

pub mod combine;
pub mod error;
pub mod glob;
pub mod matcher;
pub mod setops;
pub mod wildcard;

pub use combine::{
    all_patterns_matched, get_all_matching_patterns, get_first_matching_pattern, get_match_any,
    match_all, match_any, pattern_match_any,
};
pub use error::Error;
pub use glob::glob_match;
pub use matcher::{contains_wildcard, matches, matches_opt};
pub use setops::{wildcard_remove_from_set, wildcard_retain_in_set};
pub use wildcard::Wildcard;
