//! Argus E2E harness
//!
//! Drives a persistent headless Chromium against the externally-hosted Argus
//! dashboard and gives the suites a small, typed vocabulary to write linear
//! assertion scripts in.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    SuiteRunner (sequential)                │
//! ├────────────────────────────────────────────────────────────┤
//! │  BrowserSession ── one Chromium, one page, whole run       │
//! │  SessionStore ──── slot name -> auth snapshot              │
//! │    ├── restore_or_login(slot, login_fn)                    │
//! │    ├── invalidate(slot)                                    │
//! │    └── clear_all()          (suite-start clean slate)      │
//! │  Page ──────────── goto / probe / type / click             │
//! │  check ─────────── expect_* assertions, retried until      │
//! │                    the WaitPolicy deadline                 │
//! │  Checker ───────── allow-list soft validation (one mode    │
//! │                    per run: lenient | strict)              │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Scheduling is fully single-threaded: one suite at a time, one case at a
//! time, every DOM query polled under an explicit [`wait::WaitPolicy`]. A
//! timeout is the only cancellation and it fails just the current case.

pub mod auth;
pub mod browser;
pub mod check;
pub mod config;
pub mod error;
pub mod page;
pub mod runner;
pub mod session;
pub mod wait;

pub use check::{Checker, ValidationMode};
pub use config::HarnessConfig;
pub use error::{Error, Result};
pub use page::Page;
pub use runner::{SessionPolicy, Suite, SuiteRunner, TestCase, TestCtx};
pub use session::{SessionSnapshot, SessionStore, SessionTransport};
pub use wait::{wait_for, WaitPolicy};
