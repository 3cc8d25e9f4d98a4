//! Dashboard page sanity checks: status cards, door activity/control panel,
//! camera activity panel.

use argus_common::{routes, sel};
use argus_harness::{Result, SessionPolicy, Suite, TestCase, TestCtx};

use super::logout_case;

const STATUS_CARD: &str = "app-dashboard-status-card-component";
const DOOR_PANEL: &str = "app-dashboard-door-activity";
const DOOR_PANEL_TABS: &str = "app-dashboard-door-activity mat-expansion-panel-header button";
const CAMERA_PANEL: &str = "app-expandable-camera-activity";
const ACTIVITY_TABLE: &str = r#"[data-test-id="mat-door-activityList"]"#;
const ACTIVITY_HEADERS: &str = r#"[data-test-id="mat-door-activityList-header"] th"#;
const ACTIVITY_ROWS: &str = r#"[data-test-id="mat-door-activityList-data"]"#;
const CONTROL_TABLE: &str = ".door-control mat-table";
const CONTROL_HEADERS: &str = ".door-control .mat-mdc-header-row th";
const CONTROL_ROWS: &str = ".door-control mat-table .mat-mdc-row";
const CAMERA_LIST: &str = ".camera-activity-list";
const CAMERA_CARDS: &str = ".camera-activity-list app-camera-activity-card";

pub fn suite() -> Suite {
    Suite {
        name: "dashboard",
        route: routes::DASHBOARD,
        session: SessionPolicy::Authenticated {
            slot: "user-session",
        },
        cases: vec![
            TestCase::new("should display the header elements", |ctx| {
                Box::pin(header_elements(ctx))
            }),
            TestCase::new("should display the Status Cards elements", |ctx| {
                Box::pin(status_cards(ctx))
            }),
            TestCase::new(
                "should display the Door Activity container header elements",
                |ctx| Box::pin(door_activity_container_header(ctx)),
            ),
            TestCase::new(
                "should display the Door Activity title and action elements",
                |ctx| Box::pin(door_activity_title_and_actions(ctx)),
            ),
            TestCase::new(
                "should display the Door Activity table and column headers",
                |ctx| Box::pin(door_activity_table(ctx)),
            ),
            TestCase::new("should verify at least one Door Activity row exists", |ctx| {
                Box::pin(door_activity_rows(ctx))
            }),
            TestCase::new(
                "should click on the Door Control button and verify the button is active",
                |ctx| Box::pin(door_control_activates(ctx)),
            ),
            TestCase::new("should display the Door Control title elements", |ctx| {
                Box::pin(door_control_title(ctx))
            }),
            TestCase::new(
                "should display the Door Control table and column headers",
                |ctx| Box::pin(door_control_table(ctx)),
            ),
            TestCase::new("should verify at least one Door Control row exists", |ctx| {
                Box::pin(door_control_rows(ctx))
            }),
            TestCase::new(
                "should display the Camera Activity container header elements",
                |ctx| Box::pin(camera_activity_container_header(ctx)),
            ),
            TestCase::new("should display the Camera Activity grid", |ctx| {
                Box::pin(camera_activity_grid(ctx))
            }),
            TestCase::new("should display 20 Camera Activity card elements", |ctx| {
                Box::pin(camera_activity_cards(ctx))
            }),
            logout_case(),
        ],
    }
}

async fn header_elements(ctx: &TestCtx<'_>) -> Result<()> {
    super::expect_page_header(ctx.page, "Dashboard").await
}

async fn status_cards(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_count(STATUS_CARD, 3).await?;

    let titles = ["Camera Status", "Door Status", "User Activity"];
    for (index, title) in titles.iter().enumerate() {
        page.expect_attr_eq_nth(STATUS_CARD, index, "title", title)
            .await?;
    }

    page.expect_visible("app-camera-icon svg").await?;
    page.expect_visible("app-door-icon svg").await?;
    page.expect_visible("app-user-icon svg").await?;

    page.expect_visible("#chart-cameras").await?;
    page.expect_visible("#chart-doors").await?;
    page.expect_visible("#chart-user-activity").await
}

async fn door_activity_container_header(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(&format!("{DOOR_PANEL} {}", sel::EXPANSION_PANEL_HEADER))
        .await?;
    page.expect_count(DOOR_PANEL_TABS, 2).await?;
    page.expect_text_contains_nth(DOOR_PANEL_TABS, 0, "Door Activity")
        .await?;
    page.expect_class_contains_nth(DOOR_PANEL_TABS, 0, "active")
        .await?;
    page.expect_text_contains_nth(DOOR_PANEL_TABS, 1, "Door Control")
        .await?;
    page.expect_visible(&format!("{DOOR_PANEL} {}", sel::EXPANSION_INDICATOR_ICON))
        .await
}

async fn door_activity_title_and_actions(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_text_eq(
        &format!("{} {}", sel::TITLE_AND_ACTIONS, sel::PANEL_TITLE),
        "Door Activity",
    )
    .await?;
    page.expect_text_eq(
        &format!("{} {}", sel::TITLE_AND_ACTIONS, sel::PANEL_SUBTITLE),
        "(Today)",
    )
    .await?;
    page.expect_text_eq(".filter-button .label", "Filter").await?;
    page.expect_visible(".filter-button mat-icon svg").await?;
    page.expect_text_eq(
        &format!("{} .label", sel::PANEL_HEADER_BUTTON),
        "More Activity",
    )
    .await
}

async fn door_activity_table(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(ACTIVITY_TABLE).await?;

    let expected = [
        "USER",
        "RESULTS",
        "DATE & TIME",
        "DOORS",
        "ZONE",
        "SITES",
        "CREDENTIALS",
        "",
    ];
    page.expect_count(ACTIVITY_HEADERS, expected.len()).await?;
    for (index, header) in expected.iter().enumerate() {
        page.expect_text_eq_nth(ACTIVITY_HEADERS, index, header)
            .await?;
    }
    Ok(())
}

async fn door_activity_rows(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(ACTIVITY_ROWS).await?;
    page.expect_count_at_least(ACTIVITY_ROWS, 1).await
}

async fn door_control_activates(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.click_nth(&format!("{DOOR_PANEL} button"), 1).await?;
    page.expect_class_contains_nth(&format!("{DOOR_PANEL} button"), 1, "active")
        .await
}

async fn door_control_title(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.click_nth(&format!("{DOOR_PANEL} button"), 1).await?;
    page.expect_text_eq(
        &format!("{} {}", sel::TITLE_AND_ACTIONS, sel::PANEL_TITLE),
        "Door Control",
    )
    .await
}

async fn door_control_table(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.click_nth(&format!("{DOOR_PANEL} button"), 1).await?;
    page.expect_visible(CONTROL_TABLE).await?;

    let expected = ["", "DOORS", "VIDEO", "LOCK STATE", "DOOR STATE"];
    page.expect_count(CONTROL_HEADERS, expected.len()).await?;
    for (index, header) in expected.iter().enumerate() {
        page.expect_text_eq_nth(CONTROL_HEADERS, index, header)
            .await?;
    }
    Ok(())
}

async fn door_control_rows(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.click_nth(&format!("{DOOR_PANEL} button"), 1).await?;
    page.expect_visible(CONTROL_ROWS).await?;
    page.expect_count_at_least(CONTROL_ROWS, 1).await
}

async fn camera_activity_container_header(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(&format!("{CAMERA_PANEL} {}", sel::EXPANSION_PANEL_HEADER))
        .await?;
    page.expect_text_eq(
        &format!("{CAMERA_PANEL} {}", sel::PANEL_TITLE),
        "Camera Activity",
    )
    .await?;
    page.expect_text_eq(
        &format!("{CAMERA_PANEL} {}", sel::PANEL_SUBTITLE),
        "(Today)",
    )
    .await?;
    page.expect_text_eq(
        &format!("{CAMERA_PANEL} {} .label", sel::PANEL_HEADER_BUTTON),
        "More Activity",
    )
    .await?;
    page.expect_visible(&format!("{CAMERA_PANEL} .mat-expansion-indicator svg"))
        .await
}

async fn camera_activity_grid(ctx: &TestCtx<'_>) -> Result<()> {
    ctx.page.expect_visible(CAMERA_LIST).await
}

async fn camera_activity_cards(ctx: &TestCtx<'_>) -> Result<()> {
    ctx.page.expect_count(CAMERA_CARDS, 20).await
}
