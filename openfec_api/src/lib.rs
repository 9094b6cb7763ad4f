//! Minimal async client for the OpenFEC committee totals endpoint.

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{election_cycle, Query, TotalsQuery};
