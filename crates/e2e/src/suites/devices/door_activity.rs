//! Devices > Door Activity page sanity checks.

use argus_common::{routes, sel};
use argus_harness::{Result, SessionPolicy, Suite, TestCase, TestCtx};

use crate::suites::{
    expect_breadcrumb_trail, expect_devices_nav, expect_page_header, logout_case,
};

pub fn suite() -> Suite {
    Suite {
        name: "devices-door-activity",
        route: routes::DEVICES_DOOR_ACTIVITY,
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
                "should display all required Door Activity container elements",
                |ctx| Box::pin(container_elements(ctx)),
            ),
            logout_case(),
        ],
    }
}

async fn header_elements(ctx: &TestCtx<'_>) -> Result<()> {
    expect_page_header(ctx.page, "Door Activity").await?;
    expect_breadcrumb_trail(
        ctx.page,
        &[
            (routes::DEVICES, "Devices"),
            (routes::DEVICES_DOORS, "Doors"),
            (routes::DEVICES_DOOR_ACTIVITY, "Door Activity"),
        ],
    )
    .await
}

async fn nav_bar(ctx: &TestCtx<'_>) -> Result<()> {
    expect_devices_nav(ctx.page, routes::DEVICES_DOORS).await
}

async fn container_elements(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;

    let activity_tab = sel::nav_btn(routes::DEVICES_DOOR_ACTIVITY);
    page.expect_visible(&activity_tab).await?;
    page.expect_text_contains(&format!("{activity_tab} .mdc-button__label"), "Door Activity")
        .await?;
    page.expect_class_contains(&activity_tab, "active-route")
        .await?;

    let all_doors_tab = sel::nav_btn(routes::DEVICES_ALL_DOORS);
    page.expect_visible(&all_doors_tab).await?;
    page.expect_text_contains(&format!("{all_doors_tab} .mdc-button__label"), "All Doors")
        .await
}
