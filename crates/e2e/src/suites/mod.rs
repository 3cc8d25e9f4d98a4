//! One module per dashboard page. Shared checks that every authenticated
//! page repeats (header, breadcrumbs, the logout flow) live here.

pub mod dashboard;
pub mod devices;
pub mod footer;
pub mod people;
pub mod regression;
pub mod settings;
pub mod sidebar;
pub mod sign_in;
pub mod video_wall;

use argus_common::{routes, sel};
use argus_harness::{auth, Page, Result, TestCase, TestCtx};

/// Page header: title text plus the actions menu icon.
pub(crate) async fn expect_page_header(page: &Page, title: &str) -> Result<()> {
    page.expect_visible(sel::HEADER).await?;
    page.expect_visible(sel::HEADER_TITLE).await?;
    page.expect_text_contains(sel::HEADER_TITLE, title).await?;
    page.expect_visible(sel::HEADER_ACTIONS).await?;
    page.expect_visible(sel::HEADER_ACTIONS_MENU_ICON).await
}

/// Back button, home icon and a breadcrumb link per `(route, label)` pair,
/// with a separator icon before each link.
pub(crate) async fn expect_breadcrumb_trail(page: &Page, trail: &[(&str, &str)]) -> Result<()> {
    page.expect_visible(sel::BACK_BUTTON).await?;
    page.expect_visible(sel::BACK_BUTTON_ICON).await?;
    page.expect_visible(sel::BREADCRUMB_HOME_ICON).await?;
    for (index, (route, label)) in trail.iter().enumerate() {
        page.expect_visible_nth(sel::BREADCRUMB_SEPARATOR_ICONS, index)
            .await?;
        let link = format!(r#"app-breadcrumbs a[href="{route}"]"#);
        page.expect_visible(&link).await?;
        page.expect_text_contains(&link, label).await?;
    }
    Ok(())
}

/// The Cameras / Doors / Hubs navigation bar shown on every devices page,
/// with `active_route` highlighted and the Add Device button present.
pub(crate) async fn expect_devices_nav(page: &Page, active_route: &str) -> Result<()> {
    for (route, label) in [
        (routes::DEVICES_CAMERAS, "Cameras"),
        (routes::DEVICES_DOORS, "Doors"),
        (routes::DEVICES_HUBS, "Hubs"),
    ] {
        let btn = sel::nav_btn(route);
        page.expect_visible(&btn).await?;
        page.expect_text_contains(&format!("{btn} .mdc-button__label"), label)
            .await?;
    }
    page.expect_class_contains(&sel::nav_btn(active_route), "active-route")
        .await?;
    page.expect_text_contains(sel::ADD_DEVICE_BUTTON, "Add Device")
        .await?;
    page.expect_visible(&format!("{} mat-icon svg", sel::ADD_DEVICE_BUTTON))
        .await
}

/// Search bar with the given placeholder, next to the filter button.
pub(crate) async fn expect_search_and_filter(page: &Page, placeholder: &str) -> Result<()> {
    page.expect_visible(sel::SEARCH_BAR).await?;
    page.expect_visible(sel::SEARCH_INPUT).await?;
    page.expect_attr_eq(sel::SEARCH_INPUT, "placeholder", placeholder)
        .await?;
    page.expect_visible(&format!("{} .mat-icon svg", sel::SEARCH_BAR))
        .await?;
    page.expect_visible(sel::FILTER_BUTTON).await?;
    page.expect_text_contains(&format!("{} .label", sel::FILTER_BUTTON), "Filter")
        .await?;
    page.expect_visible(&format!("{} .mat-icon svg", sel::FILTER_BUTTON))
        .await
}

/// Column headers of the first table on the page, in order. Empty strings
/// assert deliberately blank header cells.
pub(crate) async fn expect_table_headers(page: &Page, expected: &[&str]) -> Result<()> {
    page.expect_count(sel::TABLE_HEADER_CELLS, expected.len())
        .await?;
    for (index, header) in expected.iter().enumerate() {
        page.expect_text_eq_nth(sel::TABLE_HEADER_CELLS, index, header)
            .await?;
    }
    Ok(())
}

async fn logs_out(ctx: &TestCtx<'_>) -> Result<()> {
    auth::logout(ctx.page).await
}

/// Final case of every authenticated suite.
pub(crate) fn logout_case() -> TestCase {
    TestCase::new("should log out when the Log out option is clicked", |ctx| {
        Box::pin(logs_out(ctx))
    })
}
