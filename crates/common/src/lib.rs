//! Shared test data for the Argus dashboard E2E suites.
//!
//! This crate carries no browser code. It holds the three static inputs every
//! suite consumes:
//!
//! - credential fixtures ([`fixtures`])
//! - the allow-list oracle: closed enums and known-name sets ([`oracle`])
//! - route and DOM selector constants ([`routes`], [`sel`])

pub mod fixtures;
pub mod oracle;
pub mod routes;
pub mod sel;

pub use fixtures::{Account, Credentials, FixtureError};
pub use oracle::{AccessResult, CredentialType, DoorState, LockState, UserRole};
