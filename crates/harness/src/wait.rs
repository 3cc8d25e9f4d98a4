//! Explicit retry-until-deadline polling.
//!
//! Every DOM expectation in the harness goes through [`wait_for`]: probe,
//! sleep, probe again, until the probe yields or the deadline passes. This is
//! the only resilience in the harness — a deadline miss fails the calling
//! case and nothing retries above it.

use std::future::Future;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// How long to keep polling, and how often.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(4000),
            poll_interval: Duration::from_millis(100),
        }
    }
}

impl WaitPolicy {
    pub fn from_millis(timeout_ms: u64, poll_ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms),
            poll_interval: Duration::from_millis(poll_ms),
        }
    }
}

/// Poll `probe` until it yields `Some(T)` or `policy.timeout` elapses.
///
/// A probe returning `Ok(None)` means "not there yet"; probes map their own
/// transient lookup failures to `None`. A probe error is a hard failure and
/// propagates immediately.
pub async fn wait_for<T, F, Fut>(what: &str, policy: WaitPolicy, mut probe: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let start = Instant::now();
    loop {
        if let Some(value) = probe().await? {
            return Ok(value);
        }
        if start.elapsed() >= policy.timeout {
            return Err(Error::Timeout {
                what: what.to_string(),
                waited_ms: start.elapsed().as_millis() as u64,
            });
        }
        tokio::time::sleep(policy.poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_policy() -> WaitPolicy {
        WaitPolicy::from_millis(200, 5)
    }

    #[tokio::test]
    async fn yields_once_the_probe_succeeds() {
        let polls = AtomicU32::new(0);
        let value = wait_for("third poll", fast_policy(), || async {
            let n = polls.fetch_add(1, Ordering::SeqCst);
            Ok(if n >= 2 { Some(n) } else { None })
        })
        .await
        .unwrap();
        assert_eq!(value, 2);
    }

    #[tokio::test]
    async fn deadline_miss_is_a_timeout() {
        let err = wait_for("something that never appears", WaitPolicy::from_millis(30, 5), || async {
            Ok(None::<()>)
        })
        .await
        .unwrap_err();
        match err {
            Error::Timeout { what, waited_ms } => {
                assert_eq!(what, "something that never appears");
                assert!(waited_ms >= 30);
            }
            other => panic!("expected timeout, got {other}"),
        }
    }

    #[tokio::test]
    async fn probe_errors_propagate_immediately() {
        let polls = AtomicU32::new(0);
        let err = wait_for("a failing probe", fast_policy(), || async {
            polls.fetch_add(1, Ordering::SeqCst);
            Err::<Option<()>, _>(Error::Assertion("broken".into()))
        })
        .await
        .unwrap_err();
        assert!(matches!(err, Error::Assertion(_)));
        assert_eq!(polls.load(Ordering::SeqCst), 1);
    }
}
