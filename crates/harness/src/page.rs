//! Tab driving: navigation, element probes, input.
//!
//! Structural questions ("does this exist, is it visible, what does it say")
//! are answered by a script injected through CDP so one round trip returns
//! the whole probe. Interactions that must look like a user (typing
//! credentials, clicking buttons) go through real input events instead.

use chromiumoxide::cdp::browser_protocol::network::{
    ClearBrowserCookiesParams, Cookie, CookieParam,
};
use serde::Deserialize;

use argus_common::routes;

use crate::error::{Error, Result};
use crate::wait::{wait_for, WaitPolicy};

/// What a single element probe observed.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementProbe {
    pub exists: bool,
    pub visible: bool,
    pub text: String,
    pub classes: String,
}

pub struct Page {
    inner: chromiumoxide::Page,
    base_url: String,
    policy: WaitPolicy,
}

impl Page {
    pub fn new(inner: chromiumoxide::Page, base_url: String, policy: WaitPolicy) -> Self {
        Self {
            inner,
            base_url,
            policy,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn policy(&self) -> WaitPolicy {
        self.policy
    }

    // Navigation ---------------------------------------------------------

    /// Navigate to a route relative to the base URL.
    pub async fn goto(&self, route: &str) -> Result<()> {
        let url = routes::join(&self.base_url, route);
        if let Err(e) = self.inner.goto(url.as_str()).await {
            return Err(Error::Navigation {
                url,
                reason: e.to_string(),
            });
        }
        Ok(())
    }

    pub async fn current_url(&self) -> Result<String> {
        Ok(self.inner.url().await?.unwrap_or_default())
    }

    // Probes -------------------------------------------------------------

    async fn eval<T: serde::de::DeserializeOwned>(&self, script: String) -> Result<T> {
        Ok(self.inner.evaluate(script).await?.into_value::<T>()?)
    }

    /// Observe the `index`-th match of `selector` (existence, visibility,
    /// text, class attribute) in one round trip.
    pub async fn probe_nth(&self, selector: &str, index: usize) -> Result<ElementProbe> {
        let script = format!(
            r#"(() => {{
                const els = document.querySelectorAll({sel});
                const el = els[{index}];
                if (!el) return {{ exists: false, visible: false, text: "", classes: "" }};
                const rect = el.getBoundingClientRect();
                const style = window.getComputedStyle(el);
                const visible = rect.width > 0 && rect.height > 0
                    && style.visibility !== "hidden" && style.display !== "none";
                return {{
                    exists: true,
                    visible,
                    text: el.textContent || "",
                    classes: el.getAttribute("class") || ""
                }};
            }})()"#,
            sel = js_str(selector),
        );
        self.eval(script).await
    }

    pub async fn probe(&self, selector: &str) -> Result<ElementProbe> {
        self.probe_nth(selector, 0).await
    }

    pub async fn count(&self, selector: &str) -> Result<usize> {
        let script = format!(
            "document.querySelectorAll({sel}).length",
            sel = js_str(selector)
        );
        self.eval(script).await
    }

    pub async fn attr_nth(
        &self,
        selector: &str,
        index: usize,
        name: &str,
    ) -> Result<Option<String>> {
        let script = format!(
            r#"(() => {{
                const el = document.querySelectorAll({sel})[{index}];
                return el ? el.getAttribute({name}) : null;
            }})()"#,
            sel = js_str(selector),
            name = js_str(name),
        );
        self.eval(script).await
    }

    /// Computed CSS value of a property on the first match.
    pub async fn css_value(&self, selector: &str, property: &str) -> Result<Option<String>> {
        let script = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                return el ? window.getComputedStyle(el).getPropertyValue({prop}) : null;
            }})()"#,
            sel = js_str(selector),
            prop = js_str(property),
        );
        self.eval(script).await
    }

    /// Trimmed `textContent` of every match.
    pub async fn texts_of(&self, selector: &str) -> Result<Vec<String>> {
        let script = format!(
            r#"Array.from(document.querySelectorAll({sel})).map(el => (el.textContent || "").trim())"#,
            sel = js_str(selector),
        );
        self.eval(script).await
    }

    // Input --------------------------------------------------------------

    async fn element(&self, selector: &str) -> Result<chromiumoxide::Element> {
        let what = format!("element {selector}");
        wait_for(&what, self.policy, move || async move {
            match self.inner.find_element(selector).await {
                Ok(el) => Ok(Some(el)),
                Err(_) => Ok(None),
            }
        })
        .await
    }

    /// Click the first match with a real (trusted) mouse event.
    pub async fn click(&self, selector: &str) -> Result<()> {
        self.element(selector).await?.click().await?;
        Ok(())
    }

    /// Click the `index`-th match.
    pub async fn click_nth(&self, selector: &str, index: usize) -> Result<()> {
        let what = format!("element {selector}[{index}]");
        let el = wait_for(&what, self.policy, move || async move {
            match self.inner.find_elements(selector).await {
                Ok(els) => Ok(els.into_iter().nth(index)),
                Err(_) => Ok(None),
            }
        })
        .await?;
        el.click().await?;
        Ok(())
    }

    /// Focus the first match and type with real keystrokes.
    pub async fn type_into(&self, selector: &str, text: &str) -> Result<()> {
        let el = self.element(selector).await?;
        el.click().await?;
        el.type_str(text).await?;
        Ok(())
    }

    pub async fn press_enter(&self, selector: &str) -> Result<()> {
        self.element(selector).await?.press_key("Enter").await?;
        Ok(())
    }

    /// Focus the first match, then blur it (drives "touched" form
    /// validation without entering a value).
    pub async fn focus_then_blur(&self, selector: &str) -> Result<()> {
        self.element(selector).await?.click().await?;
        let script = r#"(() => {
            if (document.activeElement) document.activeElement.blur();
            return true;
        })()"#;
        self.eval::<bool>(script.to_string()).await?;
        Ok(())
    }

    /// Press Escape to dismiss any open overlay (menus, dialogs).
    pub async fn dismiss_overlays(&self) -> Result<()> {
        self.element("body").await?.press_key("Escape").await?;
        Ok(())
    }

    /// Click the first match of `selector` whose text contains `needle`.
    ///
    /// Text-scoped clicking has no CSS equivalent, so this one dispatches a
    /// synthetic click from the probe script.
    pub async fn click_containing(&self, selector: &str, needle: &str) -> Result<()> {
        let what = format!("clickable {selector} containing {needle:?}");
        let script = format!(
            r#"(() => {{
                const els = Array.from(document.querySelectorAll({sel}))
                    .filter(e => (e.textContent || "").includes({needle}));
                const el = els[els.length - 1]; // deepest match, not a container
                if (!el) return false;
                el.click();
                return true;
            }})()"#,
            sel = js_str(selector),
            needle = js_str(needle),
        );
        wait_for(&what, self.policy, move || {
            let script = script.clone();
            async move {
                let clicked: bool = self.eval(script).await?;
                Ok(clicked.then_some(()))
            }
        })
        .await
    }

    // Storage and cookies (session plumbing) -----------------------------

    pub async fn cookies(&self) -> Result<Vec<Cookie>> {
        Ok(self.inner.get_cookies().await?)
    }

    pub async fn set_cookies(&self, cookies: Vec<CookieParam>) -> Result<()> {
        self.inner.set_cookies(cookies).await?;
        Ok(())
    }

    pub async fn clear_cookies(&self) -> Result<()> {
        self.inner
            .execute(ClearBrowserCookiesParams::default())
            .await?;
        Ok(())
    }

    /// All `localStorage` entries of the current origin.
    pub async fn local_storage_entries(&self) -> Result<Vec<(String, String)>> {
        self.eval("Object.entries(window.localStorage)".to_string())
            .await
    }

    /// Write `localStorage` entries on the current origin.
    pub async fn seed_local_storage(&self, entries: &[(String, String)]) -> Result<()> {
        let payload = serde_json::to_string(entries)?;
        let script = format!(
            r#"(() => {{
                const entries = {payload};
                for (const [key, value] of entries) window.localStorage.setItem(key, value);
                return entries.length;
            }})()"#,
        );
        self.eval::<usize>(script).await?;
        Ok(())
    }

    /// Clear `localStorage` and `sessionStorage` on the current origin.
    pub async fn clear_storage(&self) -> Result<()> {
        let script = r#"(() => {
            window.localStorage.clear();
            window.sessionStorage.clear();
            return true;
        })()"#;
        self.eval::<bool>(script.to_string()).await?;
        Ok(())
    }
}

/// Quote a Rust string as a JS string literal.
fn js_str(s: &str) -> String {
    serde_json::to_string(s).expect("strings always serialize")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_str_quotes_and_escapes() {
        assert_eq!(js_str("plain"), r#""plain""#);
        assert_eq!(js_str(r#"[data-test-id="x"]"#), r#""[data-test-id=\"x\"]""#);
        assert_eq!(js_str("' OR '1'='1"), r#""' OR '1'='1""#);
    }
}
