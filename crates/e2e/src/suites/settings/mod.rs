//! Settings section: account, sites, reports, users.

pub mod access_logs;
pub mod account;
pub mod sites;
pub mod users;
