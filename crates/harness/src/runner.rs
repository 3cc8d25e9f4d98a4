//! Suite model and sequential runner.
//!
//! A suite is a route, a session policy and a list of linear cases. The
//! runner owns one browser and one session store for the whole run and
//! executes everything in order: clear cached sessions at each suite's
//! start, restore (or establish) the session before each case, visit the
//! suite's route, run the case. A failed case is recorded and the run moves
//! on.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use argus_common::Credentials;

use crate::auth;
use crate::browser::{self, BrowserSession};
use crate::check::Checker;
use crate::config::HarnessConfig;
use crate::error::Result;
use crate::page::Page;
use crate::session::SessionStore;

/// Everything a case body gets to work with.
pub struct TestCtx<'a> {
    pub page: &'a Page,
    pub checker: &'a Checker,
    pub creds: &'a Credentials,
    pub config: &'a HarnessConfig,
}

pub type CaseFn = for<'a> fn(&'a TestCtx<'a>) -> BoxFuture<'a, Result<()>>;

pub struct TestCase {
    pub name: &'static str,
    pub run: CaseFn,
}

impl TestCase {
    pub fn new(name: &'static str, run: CaseFn) -> Self {
        Self { name, run }
    }
}

/// Whether a suite's cases run against a cached authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPolicy {
    /// No session handling; cases start from the suite route as-is.
    Anonymous,
    /// Restore (or establish) the named session slot before each case.
    Authenticated { slot: &'static str },
}

pub struct Suite {
    pub name: &'static str,
    pub route: &'static str,
    pub session: SessionPolicy,
    pub cases: Vec<TestCase>,
}

/// Outcome of a single case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    pub suite: String,
    pub name: String,
    pub passed: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
}

/// Outcome of the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration_ms: u64,
    pub finished_at: DateTime<Utc>,
    pub interactive_logins: u64,
    pub session_restores: u64,
    pub results: Vec<CaseResult>,
}

/// Name filters from the CLI.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub suite: Option<String>,
    pub case: Option<String>,
}

impl Filter {
    fn suite_matches(&self, suite: &Suite) -> bool {
        self.suite
            .as_deref()
            .map(|wanted| suite.name.contains(wanted))
            .unwrap_or(true)
    }

    fn case_matches(&self, case: &TestCase) -> bool {
        self.case
            .as_deref()
            .map(|wanted| case.name.contains(wanted))
            .unwrap_or(true)
    }
}

pub struct SuiteRunner {
    browser: BrowserSession,
    sessions: SessionStore,
    checker: Checker,
    creds: Credentials,
    config: HarnessConfig,
}

impl SuiteRunner {
    /// Load fixtures and launch the browser.
    pub async fn launch(config: HarnessConfig) -> Result<Self> {
        let creds = Credentials::from_env_or(&config.credentials)?;
        let checker = Checker::new(config.validation);
        let browser = BrowserSession::launch(&config).await?;
        Ok(Self {
            browser,
            sessions: SessionStore::new(),
            checker,
            creds,
            config,
        })
    }

    /// Run the given suites sequentially, honoring the filter.
    pub async fn run(&mut self, suites: &[Suite], filter: &Filter) -> Result<RunSummary> {
        let start = Instant::now();
        let mut results = Vec::new();
        let mut passed = 0;
        let mut failed = 0;
        let mut skipped = 0;

        for suite in suites {
            if !filter.suite_matches(suite) {
                skipped += suite.cases.len();
                continue;
            }

            info!("Suite: {}", suite.name);

            // Suite-level clean slate: drop cached sessions and wipe browser
            // storage so this suite is independent of every previous one.
            let Self {
                browser, sessions, ..
            } = self;
            sessions.clear_all(browser.page()).await?;

            for case in &suite.cases {
                if !filter.case_matches(case) {
                    skipped += 1;
                    continue;
                }

                let result = self.run_case(suite, case).await;
                if result.passed {
                    passed += 1;
                    info!("  ✓ {} ({} ms)", result.name, result.duration_ms);
                } else {
                    failed += 1;
                    error!(
                        "  ✗ {} - {}",
                        result.name,
                        result.error.as_deref().unwrap_or("unknown error")
                    );
                }
                results.push(result);
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Results: {} passed, {} failed, {} skipped ({} ms; {} interactive login(s), {} restore(s))",
            passed,
            failed,
            skipped,
            duration_ms,
            self.sessions.interactive_logins(),
            self.sessions.restores()
        );

        Ok(RunSummary {
            total: passed + failed + skipped,
            passed,
            failed,
            skipped,
            duration_ms,
            finished_at: Utc::now(),
            interactive_logins: self.sessions.interactive_logins(),
            session_restores: self.sessions.restores(),
            results,
        })
    }

    async fn run_case(&mut self, suite: &Suite, case: &TestCase) -> CaseResult {
        let start = Instant::now();

        let Self {
            browser,
            sessions,
            checker,
            creds,
            config,
        } = self;
        let page = browser.page();

        let outcome = async {
            if let SessionPolicy::Authenticated { slot } = suite.session {
                let account = creds.valid_user.clone();
                sessions
                    .restore_or_login(page, slot, || auth::login(page, &account))
                    .await?;
            }
            page.goto(suite.route).await?;

            let ctx = TestCtx {
                page,
                checker: &*checker,
                creds: &*creds,
                config: &*config,
            };
            (case.run)(&ctx).await
        }
        .await;

        CaseResult {
            suite: suite.name.to_string(),
            name: case.name.to_string(),
            passed: outcome.is_ok(),
            duration_ms: start.elapsed().as_millis() as u64,
            error: outcome.err().map(|e| e.to_string()),
        }
    }

    /// Write the run summary to `<output_dir>/results.json`.
    pub fn write_results(&self, summary: &RunSummary) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.config.output_dir)?;
        let path = self.config.output_dir.join("results.json");
        std::fs::write(&path, serde_json::to_string_pretty(summary)?)?;
        info!("Results written to {}", path.display());
        Ok(path)
    }

    pub async fn shutdown(self) -> Result<()> {
        self.browser.shutdown().await
    }
}

/// Preflight: report why this environment cannot run browser suites, or
/// `None` when it can.
pub async fn environment_unavailable(config: &HarnessConfig) -> Option<String> {
    if !browser::chromium_available() {
        return Some("no Chromium executable found".to_string());
    }

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
    {
        Ok(client) => client,
        Err(e) => return Some(format!("failed to build HTTP client: {e}")),
    };

    match client.get(&config.base_url).send().await {
        Ok(_) => None,
        Err(e) => Some(format!(
            "dashboard unreachable at {}: {}",
            config.base_url, e
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_case(name: &'static str) -> TestCase {
        TestCase::new(name, |_ctx| Box::pin(async { Ok(()) }))
    }

    fn dummy_suite(name: &'static str, cases: Vec<TestCase>) -> Suite {
        Suite {
            name,
            route: "/dashboard",
            session: SessionPolicy::Anonymous,
            cases,
        }
    }

    #[test]
    fn filter_matches_by_substring() {
        let suite = dummy_suite("devices-all-doors", vec![dummy_case("shows the header")]);
        let all = Filter::default();
        assert!(all.suite_matches(&suite));
        assert!(all.case_matches(&suite.cases[0]));

        let narrowed = Filter {
            suite: Some("doors".to_string()),
            case: Some("header".to_string()),
        };
        assert!(narrowed.suite_matches(&suite));
        assert!(narrowed.case_matches(&suite.cases[0]));

        let misses = Filter {
            suite: Some("cameras".to_string()),
            case: None,
        };
        assert!(!misses.suite_matches(&suite));
    }

    #[test]
    fn run_summary_serializes_round_trip() {
        let summary = RunSummary {
            total: 2,
            passed: 1,
            failed: 1,
            skipped: 0,
            duration_ms: 1234,
            finished_at: Utc::now(),
            interactive_logins: 1,
            session_restores: 1,
            results: vec![CaseResult {
                suite: "sign-in".into(),
                name: "loads the page".into(),
                passed: true,
                duration_ms: 600,
                error: None,
            }],
        };
        let json = serde_json::to_string(&summary).unwrap();
        let back: RunSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total, 2);
        assert_eq!(back.results[0].suite, "sign-in");
    }
}
