//! Devices > All Hubs page sanity checks.

use argus_common::{routes, sel};
use argus_harness::{Result, SessionPolicy, Suite, TestCase, TestCtx};

use crate::suites::{
    expect_breadcrumb_trail, expect_devices_nav, expect_page_header, expect_search_and_filter,
    logout_case,
};

pub fn suite() -> Suite {
    Suite {
        name: "devices-all-hubs",
        route: routes::DEVICES_ALL_HUBS,
        session: SessionPolicy::Authenticated {
            slot: "user-session",
        },
        cases: vec![
            TestCase::new("should display all required Header UI elements", |ctx| {
                Box::pin(header_elements(ctx))
            }),
            TestCase::new("should display all required navigation bar elements", |ctx| {
                Box::pin(nav_bar(ctx))
            }),
            TestCase::new(
                "should display all required All Hubs container elements",
                |ctx| Box::pin(container_elements(ctx)),
            ),
            logout_case(),
        ],
    }
}

async fn header_elements(ctx: &TestCtx<'_>) -> Result<()> {
    expect_page_header(ctx.page, "All Hubs").await?;
    expect_breadcrumb_trail(
        ctx.page,
        &[
            (routes::DEVICES, "Devices"),
            (routes::DEVICES_HUBS, "Hubs"),
            (routes::DEVICES_ALL_HUBS, "All Hubs"),
        ],
    )
    .await
}

async fn nav_bar(ctx: &TestCtx<'_>) -> Result<()> {
    expect_devices_nav(ctx.page, routes::DEVICES_HUBS).await
}

async fn container_elements(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(sel::MAT_CARD).await?;
    page.expect_visible(".all-hub-header-wrapper").await?;
    page.expect_text_contains(".all-hub-header-wrapper h2", "All Hubs")
        .await?;
    expect_search_and_filter(page, "Search...").await
}
