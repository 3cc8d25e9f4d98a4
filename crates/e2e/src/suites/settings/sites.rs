//! Settings > Sites page sanity checks.

use argus_common::{oracle, routes, sel};
use argus_harness::{Result, SessionPolicy, Suite, TestCase, TestCtx};

use crate::suites::{expect_page_header, expect_table_headers, logout_case};

const SITE_BANNER_TEXT: &str =
    "This is the location name and time zone for the facility, building, office, or residence.";
const ADD_BUTTONS: &str = ".site-card .add-btn-container button";
const FIRST_ROW_CELLS: &str = "tr.mat-mdc-row td.mat-mdc-cell";

pub fn suite() -> Suite {
    Suite {
        name: "settings-sites",
        route: routes::SETTINGS_SITES,
        session: SessionPolicy::Authenticated {
            slot: "user-session",
        },
        cases: vec![
            TestCase::new("should display all required Header UI elements", |ctx| {
                Box::pin(header_elements(ctx))
            }),
            TestCase::new("should display the site card container elements", |ctx| {
                Box::pin(site_card(ctx))
            }),
            TestCase::new(
                "should display the All Sites container header elements",
                |ctx| Box::pin(all_sites_header(ctx)),
            ),
            TestCase::new("should display the All Sites table and column headers", |ctx| {
                Box::pin(table_headers(ctx))
            }),
            TestCase::new("should verify at least one All Sites row exists", |ctx| {
                Box::pin(rows_exist(ctx))
            }),
            TestCase::new("should display the All Sites table row elements", |ctx| {
                Box::pin(first_row_elements(ctx))
            }),
            logout_case(),
        ],
    }
}

async fn header_elements(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    expect_page_header(page, "Sites").await?;
    page.expect_visible(sel::BACK_BUTTON).await?;
    page.expect_visible(sel::BREADCRUMB_HOME_ICON).await?;
    page.expect_visible(".breadcrumb > a").await?;
    page.expect_text_contains(".breadcrumb > a", "Sites").await
}

async fn site_card(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(".site-card .site-banner > span").await?;
    page.expect_text_contains(".site-card .site-banner > span", SITE_BANNER_TEXT)
        .await?;

    page.expect_visible_nth(ADD_BUTTONS, 0).await?;
    page.expect_visible_nth(&format!("{ADD_BUTTONS} .mat-icon > svg"), 0)
        .await?;
    page.expect_text_contains_nth(ADD_BUTTONS, 0, "Add Site")
        .await?;

    page.expect_visible_nth(ADD_BUTTONS, 1).await?;
    page.expect_visible_nth(&format!("{ADD_BUTTONS} .mat-icon > svg"), 1)
        .await?;
    page.expect_text_contains_nth(ADD_BUTTONS, 1, "Add Zone")
        .await
}

async fn all_sites_header(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(".sitelist-list-container .sitelist-header-wrapper h2")
        .await?;
    page.expect_text_contains(".sitelist-list-container .sitelist-header-wrapper h2", "All Sites")
        .await?;
    page.expect_visible(sel::SEARCH_BAR).await?;
    page.expect_visible(sel::SEARCH_INPUT).await?;
    page.expect_attr_eq(sel::SEARCH_INPUT, "placeholder", "Search by Site Name")
        .await?;
    page.expect_visible(&format!("{} .mat-icon svg", sel::SEARCH_BAR))
        .await
}

async fn table_headers(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible("mat-table").await?;
    expect_table_headers(
        page,
        &[
            "SITE NAME",
            "DESCRIPTION",
            "TIME Zone",
            "TOTAL ZONES",
            "TOTAL DEVICES",
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

    // Site name, time zone and the zone/device totals are populated; the
    // description column may legitimately be blank, so it is only observed.
    page.expect_not_empty_nth(FIRST_ROW_CELLS, 0).await?;
    let description = page.text_of_nth(FIRST_ROW_CELLS, 1).await?;
    tracing::info!(
        "Site description cell: {:?}",
        if description.is_empty() {
            "empty"
        } else {
            description.as_str()
        }
    );
    page.expect_not_empty_nth(FIRST_ROW_CELLS, 2).await?;
    page.expect_not_empty_nth(FIRST_ROW_CELLS, 3).await?;
    page.expect_not_empty_nth(FIRST_ROW_CELLS, 4).await?;

    let site_name = page.text_of_nth(FIRST_ROW_CELLS, 0).await?;
    ctx.checker
        .allow_listed(&site_name, oracle::VALID_SITE_NAMES, "Site Name")
}
