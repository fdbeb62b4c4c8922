//! Place-name resolution engine.
//!
//! Forward resolution turns a free-text (possibly localized) place name into
//! a [`Location`] through a three-pass fallback chain against a Nominatim
//! style search endpoint. Reverse resolution turns coordinates into a
//! [`ReverseAddress`] with a single request. Neither path returns an error
//! to the caller: every failure collapses into a [`Resolution`] variant.

pub mod client;
pub mod dictionary;
pub mod error;
pub mod extract;
pub mod resolution;
mod retry;
pub mod standardize;
pub mod types;

pub use client::{GeocodeClient, GeocodeSettings};
pub use dictionary::{SynonymDictionary, SynonymEntry};
pub use error::GeocodeError;
pub use extract::{parse_coordinate, project, project_reverse};
pub use resolution::{Pass, Resolution};
pub use standardize::{find_canonical_key, standardize, strip_descriptive_suffix};
pub use types::{AddressParts, Candidate, Location, ReverseAddress, ReversePlace};
