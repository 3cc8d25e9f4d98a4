//! Shared entry point for the `sanity` and `regression` test binaries.
//!
//! Both binaries are `harness = false` tests: they parse their own flags,
//! preflight the environment, run the suites sequentially and exit 0/1/2.
//! On machines without Chromium or without reach to the dashboard the run
//! is reported as skipped (exit 0) unless `ARGUS_REQUIRE_ENV=1`.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use argus_harness::runner::{environment_unavailable, Filter};
use argus_harness::{Error, HarnessConfig, Result, Suite, SuiteRunner};

#[derive(Parser, Debug)]
#[command(about = "E2E test runner for the Argus dashboard")]
pub struct Args {
    /// Path to the TOML config file (default: e2e.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Dashboard base URL override
    #[arg(long)]
    pub base_url: Option<String>,

    /// Run only suites whose name contains this string
    #[arg(long)]
    pub suite: Option<String>,

    /// Run only cases whose name contains this string
    #[arg(long)]
    pub case: Option<String>,

    /// Run with a visible browser window
    #[arg(long)]
    pub headed: bool,

    /// Allow-list validation policy: lenient | strict
    #[arg(long)]
    pub validation: Option<String>,

    /// Output directory for the run summary
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// List suites and cases without running anything
    #[arg(long)]
    pub list: bool,

    /// Swallows libtest-style filters `cargo test` may pass through.
    #[arg(hide = true)]
    pub passthrough: Vec<String>,
}

/// Run a set of suites under the standard CLI. Returns the process exit
/// code: 0 success or skip, 1 failed cases, 2 harness error.
pub fn run(binary: &str, suites: Vec<Suite>) -> i32 {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("info".parse().expect("directive")),
        )
        .init();

    let args = Args::parse();

    if args.list {
        for suite in &suites {
            println!("{}", suite.name);
            for case in &suite.cases {
                println!("  {}", case.name);
            }
        }
        return 0;
    }

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create runtime: {e}");
            return 2;
        }
    };

    match rt.block_on(run_suites(binary, args, suites)) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            eprintln!("Error: {e}");
            2
        }
    }
}

async fn run_suites(binary: &str, args: Args, suites: Vec<Suite>) -> Result<bool> {
    let mut config = HarnessConfig::load(args.config.as_deref())?;
    if let Some(url) = args.base_url {
        config.base_url = url;
    }
    if args.headed {
        config.headless = false;
    }
    if let Some(raw) = args.validation {
        config.validation = raw
            .parse()
            .map_err(|e: String| Error::Config(format!("--validation: {e}")))?;
    }
    if let Some(output) = args.output {
        config.output_dir = output;
    }

    if let Some(reason) = environment_unavailable(&config).await {
        if std::env::var("ARGUS_REQUIRE_ENV").as_deref() == Ok("1") {
            return Err(Error::Config(format!(
                "{binary}: environment required but unavailable: {reason}"
            )));
        }
        warn!("Skipping {}: {}", binary, reason);
        return Ok(true);
    }

    info!(
        "Running {} against {} ({} validation)",
        binary, config.base_url, config.validation
    );

    let mut runner = SuiteRunner::launch(config).await?;
    let filter = Filter {
        suite: args.suite,
        case: args.case,
    };
    let summary = runner.run(&suites, &filter).await?;
    runner.write_results(&summary)?;
    runner.shutdown().await?;

    Ok(summary.failed == 0)
}
