//! Session caching.
//!
//! Interactive sign-in costs seconds per case; the dashboard's auth state is
//! just cookies plus a handful of `localStorage` keys. [`SessionStore`] keys
//! snapshots of that state by slot name: the first case of a suite logs in
//! through the form and the snapshot is captured, every later case restores
//! the snapshot without touching the form. Suites stay independent of each
//! other because the runner clears the store (and the browser's state)
//! before each suite's first case.
//!
//! The store is pure bookkeeping over a [`SessionTransport`], so its caching
//! contract is unit-testable without a browser.

use std::collections::HashMap;

use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::network::{Cookie, CookieParam, TimeSinceEpoch};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::page::Page;

/// One browser cookie, detached from the CDP types so snapshots are plain
/// data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    /// Unix seconds; `None` for session cookies.
    pub expires: Option<f64>,
    pub http_only: bool,
    pub secure: bool,
}

impl StoredCookie {
    fn from_cdp(cookie: &Cookie) -> Self {
        Self {
            name: cookie.name.clone(),
            value: cookie.value.clone(),
            domain: cookie.domain.clone(),
            path: cookie.path.clone(),
            expires: (!cookie.session).then_some(cookie.expires),
            http_only: cookie.http_only,
            secure: cookie.secure,
        }
    }

    fn to_param(&self) -> Result<CookieParam> {
        let mut builder = CookieParam::builder()
            .name(self.name.clone())
            .value(self.value.clone())
            .domain(self.domain.clone())
            .path(self.path.clone())
            .secure(self.secure)
            .http_only(self.http_only);
        if let Some(expires) = self.expires {
            builder = builder.expires(TimeSinceEpoch::new(expires));
        }
        builder.build().map_err(Error::Session)
    }
}

/// Authentication state captured after a successful interactive login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub cookies: Vec<StoredCookie>,
    pub local_storage: Vec<(String, String)>,
    pub captured_at: DateTime<Utc>,
}

impl SessionSnapshot {
    pub fn new(cookies: Vec<StoredCookie>, local_storage: Vec<(String, String)>) -> Self {
        Self {
            cookies,
            local_storage,
            captured_at: Utc::now(),
        }
    }
}

/// Capture/apply/wipe the browser-persisted state a snapshot consists of.
#[async_trait]
pub trait SessionTransport {
    async fn capture(&self) -> Result<SessionSnapshot>;
    async fn apply(&self, snapshot: &SessionSnapshot) -> Result<()>;
    async fn wipe(&self) -> Result<()>;
}

#[async_trait]
impl SessionTransport for Page {
    async fn capture(&self) -> Result<SessionSnapshot> {
        let cookies = self
            .cookies()
            .await?
            .iter()
            .map(StoredCookie::from_cdp)
            .collect();
        let local_storage = self.local_storage_entries().await?;
        Ok(SessionSnapshot::new(cookies, local_storage))
    }

    async fn apply(&self, snapshot: &SessionSnapshot) -> Result<()> {
        let params = snapshot
            .cookies
            .iter()
            .map(StoredCookie::to_param)
            .collect::<Result<Vec<_>>>()?;
        if !params.is_empty() {
            self.set_cookies(params).await?;
        }
        // Storage writes need a document on the target origin.
        self.goto("/").await?;
        self.seed_local_storage(&snapshot.local_storage).await?;
        Ok(())
    }

    async fn wipe(&self) -> Result<()> {
        self.clear_cookies().await?;
        // Same origin requirement as apply().
        self.goto("/").await?;
        self.clear_storage().await?;
        Ok(())
    }
}

/// Keyed store of authentication snapshots.
#[derive(Debug, Default)]
pub struct SessionStore {
    slots: HashMap<String, SessionSnapshot>,
    interactive_logins: u64,
    restores: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the named session if a snapshot exists, otherwise run `login`
    /// through the interactive form and snapshot the result under `slot`.
    pub async fn restore_or_login<T, F, Fut>(
        &mut self,
        transport: &T,
        slot: &str,
        login: F,
    ) -> Result<()>
    where
        T: SessionTransport + Sync + ?Sized,
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<()>>,
    {
        if let Some(snapshot) = self.slots.get(slot) {
            transport.apply(snapshot).await?;
            self.restores += 1;
            debug!("Restored cached session {:?}", slot);
            return Ok(());
        }

        login().await?;
        self.interactive_logins += 1;
        let snapshot = transport.capture().await?;
        debug!(
            "Captured session {:?} ({} cookie(s), {} storage entr(ies))",
            slot,
            snapshot.cookies.len(),
            snapshot.local_storage.len()
        );
        self.slots.insert(slot.to_string(), snapshot);
        Ok(())
    }

    /// Drop one snapshot. Returns whether the slot existed.
    pub fn invalidate(&mut self, slot: &str) -> bool {
        self.slots.remove(slot).is_some()
    }

    /// Drop every snapshot and wipe the browser's persisted state, so the
    /// next `restore_or_login` goes through the interactive form.
    pub async fn clear_all<T>(&mut self, transport: &T) -> Result<()>
    where
        T: SessionTransport + Sync + ?Sized,
    {
        self.slots.clear();
        transport.wipe().await
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.slots.contains_key(slot)
    }

    /// Times the interactive sign-in form was driven.
    pub fn interactive_logins(&self) -> u64 {
        self.interactive_logins
    }

    /// Times a cached snapshot was restored instead.
    pub fn restores(&self) -> u64 {
        self.restores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Transport that only counts; no browser involved.
    #[derive(Default)]
    struct StubTransport {
        captures: AtomicU64,
        applies: AtomicU64,
        wipes: AtomicU64,
    }

    #[async_trait]
    impl SessionTransport for StubTransport {
        async fn capture(&self) -> Result<SessionSnapshot> {
            self.captures.fetch_add(1, Ordering::SeqCst);
            Ok(SessionSnapshot::new(
                vec![],
                vec![("token".into(), "abc123".into())],
            ))
        }

        async fn apply(&self, snapshot: &SessionSnapshot) -> Result<()> {
            assert_eq!(snapshot.local_storage.len(), 1);
            self.applies.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn wipe(&self) -> Result<()> {
            self.wipes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    async fn fake_login(count: &AtomicU64) -> Result<()> {
        count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    #[tokio::test]
    async fn first_use_logs_in_and_captures() {
        let transport = StubTransport::default();
        let logins = AtomicU64::new(0);
        let mut store = SessionStore::new();

        store
            .restore_or_login(&transport, "user-session", || fake_login(&logins))
            .await
            .unwrap();

        assert_eq!(logins.load(Ordering::SeqCst), 1);
        assert_eq!(transport.captures.load(Ordering::SeqCst), 1);
        assert_eq!(transport.applies.load(Ordering::SeqCst), 0);
        assert!(store.contains("user-session"));
        assert_eq!(store.interactive_logins(), 1);
        assert_eq!(store.restores(), 0);
    }

    #[tokio::test]
    async fn cached_session_serves_later_cases_without_the_form() {
        let transport = StubTransport::default();
        let logins = AtomicU64::new(0);
        let mut store = SessionStore::new();

        for _ in 0..3 {
            store
                .restore_or_login(&transport, "user-session", || fake_login(&logins))
                .await
                .unwrap();
        }

        // One interactive login, two restores: the form was not re-driven.
        assert_eq!(logins.load(Ordering::SeqCst), 1);
        assert_eq!(store.interactive_logins(), 1);
        assert_eq!(store.restores(), 2);
        assert_eq!(transport.applies.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn clear_all_forces_the_interactive_form_again() {
        let transport = StubTransport::default();
        let logins = AtomicU64::new(0);
        let mut store = SessionStore::new();

        store
            .restore_or_login(&transport, "user-session", || fake_login(&logins))
            .await
            .unwrap();
        store.clear_all(&transport).await.unwrap();
        assert!(!store.contains("user-session"));
        assert_eq!(transport.wipes.load(Ordering::SeqCst), 1);

        store
            .restore_or_login(&transport, "user-session", || fake_login(&logins))
            .await
            .unwrap();

        assert_eq!(logins.load(Ordering::SeqCst), 2);
        assert_eq!(store.restores(), 0);
    }

    #[tokio::test]
    async fn invalidate_only_touches_the_named_slot() {
        let transport = StubTransport::default();
        let logins = AtomicU64::new(0);
        let mut store = SessionStore::new();

        store
            .restore_or_login(&transport, "user-session", || fake_login(&logins))
            .await
            .unwrap();
        store
            .restore_or_login(&transport, "admin-session", || fake_login(&logins))
            .await
            .unwrap();

        assert!(store.invalidate("user-session"));
        assert!(!store.invalidate("user-session"));
        assert!(store.contains("admin-session"));
    }

    #[tokio::test]
    async fn failed_login_leaves_the_slot_empty() {
        let transport = StubTransport::default();
        let mut store = SessionStore::new();

        let outcome = store
            .restore_or_login(&transport, "user-session", || async {
                Err(Error::Assertion("wrong password".into()))
            })
            .await;

        assert!(outcome.is_err());
        assert!(!store.contains("user-session"));
        assert_eq!(store.interactive_logins(), 0);
        assert_eq!(transport.captures.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn stored_cookie_keeps_session_cookies_unexpired() {
        let snapshot = SessionSnapshot::new(
            vec![StoredCookie {
                name: "sid".into(),
                value: "v".into(),
                domain: "dash.example.com".into(),
                path: "/".into(),
                expires: None,
                http_only: true,
                secure: true,
            }],
            vec![],
        );
        let param = snapshot.cookies[0].to_param().unwrap();
        assert_eq!(param.name, "sid");
        assert!(param.expires.is_none());
    }
}
