//! Place lookup and coordinate parsing for Tiretime onboarding.
//!
//! This crate backs the conversational onboarding collaborator: it resolves
//! free-text place names to coordinates via Nominatim and parses coordinates
//! the subscriber typed directly (decimal or DMS). The core evaluation path
//! never calls into this crate.

mod error;
mod nominatim;
mod parse;

pub use error::GeocodeError;
pub use nominatim::NominatimClient;
pub use parse::parse_coordinates;

pub use alert_core::Location;
