//! Argus dashboard E2E suites.
//!
//! Each module under [`suites`] covers one dashboard page and exports
//! `suite() -> Suite`. The two registries below feed the `sanity` and
//! `regression` test binaries; [`entry`] is the shared CLI/runner glue.

pub mod entry;
pub mod suites;

use argus_harness::Suite;

/// The sanity sweep: one suite per page, structural assertions only.
pub fn sanity_suites() -> Vec<Suite> {
    vec![
        suites::sign_in::suite(),
        suites::dashboard::suite(),
        suites::sidebar::suite(),
        suites::footer::suite(),
        suites::video_wall::suite(),
        suites::devices::all_doors::suite(),
        suites::devices::all_cameras::suite(),
        suites::devices::all_hubs::suite(),
        suites::devices::door_activity::suite(),
        suites::devices::camera_activity::suite(),
        suites::people::suite(),
        suites::settings::account::suite(),
        suites::settings::sites::suite(),
        suites::settings::access_logs::suite(),
        suites::settings::users::suite(),
    ]
}

/// The deeper regression sweep over the highest-traffic pages.
pub fn regression_suites() -> Vec<Suite> {
    vec![
        suites::regression::sign_in::suite(),
        suites::regression::dashboard::suite(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sanity_registry_has_no_duplicate_suite_names() {
        let suites = sanity_suites();
        let names: HashSet<_> = suites.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), suites.len());
    }

    #[test]
    fn every_suite_has_cases_and_a_route() {
        for suite in sanity_suites().iter().chain(regression_suites().iter()) {
            assert!(!suite.cases.is_empty(), "suite {} is empty", suite.name);
            assert!(
                suite.route.starts_with('/'),
                "suite {} route {:?} is not rooted",
                suite.name,
                suite.route
            );
        }
    }

    #[test]
    fn case_names_are_unique_within_each_suite() {
        for suite in sanity_suites().iter().chain(regression_suites().iter()) {
            let names: HashSet<_> = suite.cases.iter().map(|c| c.name).collect();
            assert_eq!(names.len(), suite.cases.len(), "duplicates in {}", suite.name);
        }
    }
}
