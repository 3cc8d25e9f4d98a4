//! Full regression suite entry point.
//!
//! Run with: cargo test --package argus-e2e --test regression

fn main() {
    std::process::exit(argus_e2e::entry::run(
        "regression",
        argus_e2e::regression_suites(),
    ));
}
