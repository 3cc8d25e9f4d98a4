//! Browser lifecycle.
//!
//! One Chromium process per run, one tab reused by every suite. The CDP
//! event handler runs on its own task and the whole thing is torn down with
//! [`BrowserSession::shutdown`]; dropping without shutdown still kills the
//! child process via chromiumoxide.

use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::HarnessConfig;
use crate::error::{Error, Result};
use crate::page::Page;

pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: Page,
}

impl BrowserSession {
    /// Launch Chromium with the configured viewport and open a blank tab.
    pub async fn launch(config: &HarnessConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .window_size(config.viewport.width, config.viewport.height)
            .no_sandbox();
        if !config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder.build().map_err(Error::BrowserLaunch)?;

        info!(
            "Launching {} Chromium ({}x{})",
            if config.headless { "headless" } else { "headed" },
            config.viewport.width,
            config.viewport.height
        );

        let (mut browser, mut handler) = Browser::launch(browser_config).await?;
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let tab = browser.new_page("about:blank").await?;
        let page = Page::new(tab, config.base_url.clone(), config.wait_policy());

        Ok(Self {
            browser,
            handler_task,
            page,
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Close the browser and join the handler task.
    pub async fn shutdown(mut self) -> Result<()> {
        debug!("Closing browser");
        self.browser.close().await?;
        let _ = self.handler_task.await;
        Ok(())
    }
}

/// Whether a Chromium executable can be located on this machine.
///
/// `BrowserConfig` resolution fails when no installed Chrome/Chromium is
/// found, which is exactly the preflight signal the entry binaries need.
pub fn chromium_available() -> bool {
    BrowserConfig::builder().build().is_ok()
}
