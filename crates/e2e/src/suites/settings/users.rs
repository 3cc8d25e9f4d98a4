//! Settings > Users > Standard Users page sanity checks.

use argus_common::{routes, sel};
use argus_harness::{Result, SessionPolicy, Suite, TestCase, TestCtx};

use crate::suites::{expect_page_header, logout_case};

pub fn suite() -> Suite {
    Suite {
        name: "settings-standard-users",
        route: routes::SETTINGS_STANDARD_USERS,
        session: SessionPolicy::Authenticated {
            slot: "user-session",
        },
        cases: vec![
            TestCase::new("should display the header elements", |ctx| {
                Box::pin(header_elements(ctx))
            }),
            TestCase::new("should display the navigation bar elements", |ctx| {
                Box::pin(nav_bar(ctx))
            }),
            TestCase::new(
                "should display the Standard Users container header elements",
                |ctx| Box::pin(container_header(ctx)),
            ),
            logout_case(),
        ],
    }
}

async fn header_elements(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    expect_page_header(page, "Users").await?;
    page.expect_visible(sel::BACK_BUTTON).await?;
    page.expect_visible(sel::BREADCRUMB_HOME_ICON).await?;

    let users_link = r#"app-breadcrumbs a[href="/settings/users"]"#;
    page.expect_visible(users_link).await?;
    page.expect_text_contains(users_link, "Users").await?;

    let standard_link =
        r#"app-breadcrumbs .last-breadcrumb-item a[href="/settings/users/standard-users"]"#;
    page.expect_visible(standard_link).await?;
    page.expect_text_contains(standard_link, "Standard Users")
        .await
}

async fn nav_bar(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(sel::NAV_BAR).await?;

    let standard_tab = sel::nav_btn(routes::SETTINGS_STANDARD_USERS);
    page.expect_visible(&standard_tab).await?;
    page.expect_text_contains(&format!("{standard_tab} .mdc-button__label"), "Standard Users")
        .await?;
    page.expect_class_contains(&standard_tab, "active-route")
        .await?;

    let guest_tab = sel::nav_btn("/settings/users/guest-users");
    page.expect_visible(&guest_tab).await?;
    page.expect_text_contains(&format!("{guest_tab} .mdc-button__label"), "Guest Users")
        .await?;

    page.expect_text_contains(".add-button", "Add User").await?;
    page.expect_visible(".add-button app-argus-icon .argus-icon .mat-icon svg")
        .await
}

async fn container_header(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(&format!("{} .users-header-wrapper", sel::MAT_CARD))
        .await?;
    page.expect_text_contains(&format!("{} h2", sel::MAT_CARD), "Standard Users")
        .await
}
