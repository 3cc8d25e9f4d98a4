//! Devices > Camera Activity page sanity checks.

use argus_common::{routes, sel};
use argus_harness::{Result, SessionPolicy, Suite, TestCase, TestCtx};

use crate::suites::{
    expect_breadcrumb_trail, expect_devices_nav, expect_page_header, logout_case,
};

pub fn suite() -> Suite {
    Suite {
        name: "devices-camera-activity",
        route: routes::DEVICES_CAMERA_ACTIVITY,
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
                "should display all required Cameras Activity container elements",
                |ctx| Box::pin(container_elements(ctx)),
            ),
            logout_case(),
        ],
    }
}

async fn header_elements(ctx: &TestCtx<'_>) -> Result<()> {
    expect_page_header(ctx.page, "Camera Activity").await?;
    expect_breadcrumb_trail(
        ctx.page,
        &[
            (routes::DEVICES, "Devices"),
            (routes::DEVICES_CAMERAS, "Cameras"),
            (routes::DEVICES_CAMERA_ACTIVITY, "Activity"),
        ],
    )
    .await
}

async fn nav_bar(ctx: &TestCtx<'_>) -> Result<()> {
    expect_devices_nav(ctx.page, routes::DEVICES_CAMERAS).await
}

async fn container_elements(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;

    let activity_tab = sel::nav_btn(routes::DEVICES_CAMERA_ACTIVITY);
    page.expect_visible(&activity_tab).await?;
    page.expect_text_contains(
        &format!("{activity_tab} .mdc-button__label"),
        "Camera Activity",
    )
    .await?;
    page.expect_class_contains(&activity_tab, "active-route")
        .await?;

    let all_cameras_tab = sel::nav_btn(routes::DEVICES_ALL_CAMERAS);
    page.expect_visible(&all_cameras_tab).await?;
    page.expect_text_contains(&format!("{all_cameras_tab} .mdc-button__label"), "All Cameras")
        .await?;

    page.expect_visible(".camera-activity-header").await?;
    page.expect_text_contains(".camera-activity-header .title", "Camera Activity")
        .await?;

    // Natural-language search field
    page.expect_visible(".mat-mdc-text-field-wrapper").await?;
    page.expect_attr_eq(
        ".mat-mdc-text-field-wrapper input",
        "placeholder",
        "Show me blue cars last week",
    )
    .await?;
    page.expect_visible(".mat-mdc-text-field-wrapper .mat-icon svg")
        .await?;

    // Date range picker
    page.expect_visible("app-date-range-picker").await?;
    page.expect_text_contains("app-date-range-picker .button-label", "Date & Time")
        .await?;
    page.expect_visible("app-date-range-picker .mat-icon svg")
        .await?;

    // Filter button
    page.expect_visible(sel::FILTER_BUTTON).await?;
    page.expect_text_contains(&format!("{} .label", sel::FILTER_BUTTON), "Filter")
        .await?;
    page.expect_visible(&format!("{} .mat-icon svg", sel::FILTER_BUTTON))
        .await
}
