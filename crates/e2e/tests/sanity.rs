//! Sanity suite entry point.
//!
//! Run with: cargo test --package argus-e2e --test sanity
//! or directly with flags: cargo test -p argus-e2e --test sanity -- --suite doors

fn main() {
    std::process::exit(argus_e2e::entry::run("sanity", argus_e2e::sanity_suites()));
}
