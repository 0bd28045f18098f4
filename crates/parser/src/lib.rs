//! Country-specific address parsing.
//!
//! Address grammar is fundamentally locale-specific: the Germanic world puts
//! the building number after the street, the Anglosphere before it, Korea
//! nests administrative districts, and every country phrases PO boxes its own
//! way. This crate therefore ships one parser per country, each an ordered
//! list of regex grammars with named capture groups, over a shared driver
//! that applies every grammar to every supported line combination and keeps
//! every plausible interpretation.
//!
//! ## Ambiguity is preserved
//!
//! `parse` returns the set of all distinct, non-rejected interpretations,
//! never a single best guess. `Sonnwiesen Straße 1 2` legitimately reads as
//! street `Sonnwiesen Straße` with building 1 unit 2, and as street
//! `Sonnwiesen Straße 1` with building 2; which one is right is decided
//! downstream by comparing both against the candidate record.
//!
//! ## Failure semantics
//!
//! No grammar matching is not an error: `parse` returns an empty vec and the
//! caller falls back to whole-line comparison. An interpretation whose
//! captures fail the country's plausibility check (`ridiculous`) is discarded
//! silently, a normal branch distinguishing "matched the regex" from
//! "semantically sound".

mod address;
mod base;
mod components;
mod error;
mod grammar;

pub mod countries;

pub use crate::address::Address;
pub use crate::base::{CountryParser, MAX_LINE_LEN};
pub use crate::components::{Field, ParsedComponents};
pub use crate::error::ParserError;
pub use crate::grammar::Grammar;
