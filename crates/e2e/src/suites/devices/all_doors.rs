//! Devices > All Doors page sanity checks.

use argus_common::oracle::{self, DoorState, LockState};
use argus_common::{routes, sel};
use argus_harness::{Error, Result, SessionPolicy, Suite, TestCase, TestCtx};

use crate::suites::{
    expect_breadcrumb_trail, expect_devices_nav, expect_page_header, expect_search_and_filter,
    expect_table_headers, logout_case,
};

const DOOR_TABLE: &str = r#"[data-test-id="mat-door-List"]"#;
const CELL_DOOR_NAME: &str = r#"[data-test-id="cell-door-name"]"#;
const CELL_MODEL: &str = r#"[data-test-id="cell-model"]"#;
const CELL_MAC: &str = r#"[data-test-id="cell-mac-address"]"#;
const CELL_SITES: &str = r#"[data-test-id="cell-sites"]"#;
const CELL_ZONES: &str = r#"[data-test-id="cell-zones"]"#;
const CELL_STATUS: &str = r#"[data-test-id="cell-status"]"#;
const CELL_DOOR_STATE: &str = r#"[data-test-id="cell-door-state"]"#;
const CELL_LOCK_STATE: &str = r#"[data-test-id="cell-lock-state"]"#;
const CELL_MENU: &str = r#"[data-test-id="cell-menu-items"]"#;
const ROW_MENU_BUTTON: &str = r#"[data-test-id="cell-menu-items"] button.mat-mdc-button"#;

pub fn suite() -> Suite {
    Suite {
        name: "devices-all-doors",
        route: routes::DEVICES_ALL_DOORS,
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
                "should display all required All Doors container elements",
                |ctx| Box::pin(container_elements(ctx)),
            ),
            TestCase::new("should display All Doors Table and Column Headers", |ctx| {
                Box::pin(table_headers(ctx))
            }),
            TestCase::new("should verify at least one All Doors row exists", |ctx| {
                Box::pin(rows_exist(ctx))
            }),
            TestCase::new("should display All Door table row elements", |ctx| {
                Box::pin(first_row_elements(ctx))
            }),
            TestCase::new("should display the door row menu options", |ctx| {
                Box::pin(row_menu_options(ctx))
            }),
            TestCase::new("should display Door Activity table pagination", |ctx| {
                Box::pin(pagination(ctx))
            }),
            logout_case(),
        ],
    }
}

async fn header_elements(ctx: &TestCtx<'_>) -> Result<()> {
    expect_page_header(ctx.page, "All Doors").await?;
    expect_breadcrumb_trail(
        ctx.page,
        &[
            (routes::DEVICES, "Devices"),
            (routes::DEVICES_DOORS, "Doors"),
            (routes::DEVICES_ALL_DOORS, "All Doors"),
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

    let all_doors_tab = sel::nav_btn(routes::DEVICES_ALL_DOORS);
    page.expect_visible(&all_doors_tab).await?;
    page.expect_text_contains(&format!("{all_doors_tab} .mdc-button__label"), "All Doors")
        .await?;
    page.expect_class_contains(&all_doors_tab, "active-route")
        .await?;

    page.expect_visible(".all-doors-header-wrapper").await?;
    page.expect_text_contains(".all-doors-header-wrapper h2", "All Doors")
        .await?;
    expect_search_and_filter(page, "Search...").await
}

async fn table_headers(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(DOOR_TABLE).await?;
    expect_table_headers(
        page,
        &[
            "",
            "DOOR NAME",
            "MODEL",
            "MAC ADDRESS - SERIAL #",
            "SITES",
            "ZONES",
            "STATUS",
            "DOOR STATE",
            "LOCK STATE",
            "",
        ],
    )
    .await
}

async fn rows_exist(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(sel::TABLE_ROWS).await?;
    page.expect_count_at_least(sel::TABLE_ROWS, 1).await
}

async fn first_row_elements(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;

    // Every column of the first row is populated.
    for cell in [
        CELL_DOOR_NAME,
        CELL_MODEL,
        CELL_MAC,
        CELL_SITES,
        CELL_ZONES,
        CELL_STATUS,
        CELL_DOOR_STATE,
        CELL_LOCK_STATE,
        CELL_MENU,
    ] {
        page.expect_not_empty(cell).await?;
    }

    // Connection status dot is either green or red.
    page.expect_exists(".status-dot").await?;
    page.expect_class_any_nth(".status-dot", 0, &["status-dot-green", "status-dot-red"])
        .await?;

    // Door, site and zone names come from the provisioned environment.
    let door_name = page.text_of(CELL_DOOR_NAME).await?;
    ctx.checker
        .allow_listed(&door_name, oracle::VALID_DEVICE_NAMES, "Device Name")?;
    let site = page.text_of(CELL_SITES).await?;
    ctx.checker
        .allow_listed(&site, oracle::VALID_SITE_NAMES, "Site Name")?;
    let zone = page.text_of(CELL_ZONES).await?;
    ctx.checker
        .allow_listed(&zone, oracle::VALID_ZONE_NAMES, "Zone Name")?;

    // Only one reader model is deployed.
    page.expect_text_eq(CELL_MODEL, oracle::DOOR_MODEL).await?;

    // MAC ADDRESS - SERIAL # format.
    let mac = page.text_of(CELL_MAC).await?;
    if !oracle::MAC_SERIAL_RE.is_match(&mac) {
        return Err(Error::Assertion(format!(
            "MAC/serial cell {mac:?} does not match the expected format"
        )));
    }

    // Door state drifts in the shared environment; lock state is closed.
    let door_state = page.text_of(CELL_DOOR_STATE).await?;
    ctx.checker.parses::<DoorState>(&door_state, "door state")?;
    let lock_state = page.text_of(CELL_LOCK_STATE).await?;
    lock_state
        .parse::<LockState>()
        .map_err(|e| Error::Assertion(e.to_string()))?;

    // 3-dot menu button with its icon.
    page.expect_exists(ROW_MENU_BUTTON).await?;
    page.expect_attr_eq(
        &format!("{ROW_MENU_BUTTON} mat-icon"),
        "data-mat-icon-name",
        "more-vertical",
    )
    .await?;
    page.expect_exists(&format!("{ROW_MENU_BUTTON} mat-icon svg"))
        .await
}

async fn row_menu_options(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.click(ROW_MENU_BUTTON).await?;
    page.expect_visible(sel::MENU_PANEL).await?;

    let expected = [
        "Unlock the Door",
        "Change Name",
        "Change Zone",
        "Resync Device",
        "Door Settings",
        "Delete Device",
    ];
    for (index, name) in expected.iter().enumerate() {
        page.expect_visible_nth(sel::MENU_ITEM, index).await?;
        page.expect_text_contains_nth(sel::MENU_ITEM, index, name)
            .await?;
        page.expect_visible_nth(&format!("{} mat-icon svg", sel::MENU_ITEM), index)
            .await?;
    }

    page.dismiss_overlays().await
}

async fn pagination(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(sel::PAGINATOR).await?;
    page.expect_visible(sel::PAGINATOR_PAGE_SIZE_LABEL).await?;
    page.expect_text_contains(sel::PAGINATOR_PAGE_SIZE_LABEL, "Results")
        .await?;
    page.expect_visible(sel::PAGINATOR_PAGE_SIZE_VALUE).await?;
    page.expect_text_contains(sel::PAGINATOR_PAGE_SIZE_VALUE, "10")
        .await?;
    page.expect_exists(".mat-mdc-select-arrow svg").await?;

    page.expect_exists(sel::PAGINATOR_PREV).await?;
    page.expect_class_contains(sel::PAGINATOR_PREV, "mat-mdc-button-disabled")
        .await?;
    page.expect_exists(&format!("{} svg", sel::PAGINATOR_PREV))
        .await?;

    page.expect_count_at_least(sel::PAGINATOR_PAGE_BUTTONS, 1)
        .await?;
    page.expect_visible_nth(sel::PAGINATOR_PAGE_BUTTONS, 0).await?;
    page.expect_class_contains_nth(sel::PAGINATOR_PAGE_BUTTONS, 0, "custom-paginator-page-disabled")
        .await?;
    page.expect_text_contains_nth(sel::PAGINATOR_PAGE_BUTTONS, 0, "1")
        .await?;

    page.expect_exists(sel::PAGINATOR_NEXT).await?;
    page.expect_exists(&format!("{} svg", sel::PAGINATOR_NEXT))
        .await
}
