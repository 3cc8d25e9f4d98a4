//! Settings > Reports > Access Logs page sanity checks.

use argus_common::routes;
use argus_harness::{Result, SessionPolicy, Suite, TestCase, TestCtx};

use crate::suites::{expect_breadcrumb_trail, expect_page_header, logout_case};

pub fn suite() -> Suite {
    Suite {
        name: "settings-access-logs",
        route: routes::SETTINGS_ACCESS_LOGS,
        session: SessionPolicy::Authenticated {
            slot: "user-session",
        },
        cases: vec![
            TestCase::new("should display the header elements", |ctx| {
                Box::pin(header_elements(ctx))
            }),
            TestCase::new(
                "should display the header elements for each content container",
                |ctx| Box::pin(container_headers(ctx)),
            ),
            logout_case(),
        ],
    }
}

async fn header_elements(ctx: &TestCtx<'_>) -> Result<()> {
    expect_page_header(ctx.page, "Access Logs").await?;
    expect_breadcrumb_trail(
        ctx.page,
        &[
            (routes::SETTINGS_REPORTS, "Reports"),
            (routes::SETTINGS_ACCESS_LOGS, "Access Logs"),
        ],
    )
    .await
}

async fn container_headers(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_exists(".main-content").await?;
    page.expect_text_contains_nth(".main-content mat-card h2", 0, "All Logs")
        .await?;
    page.expect_text_contains(".main-content", "Charts").await?;
    page.expect_text_contains(".main-content", "Access Logs Per Type")
        .await
}
