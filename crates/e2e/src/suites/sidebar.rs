//! Sidebar sanity checks: layout, navigation links, account menu.

use argus_common::{routes, sel};
use argus_harness::{Error, Result, SessionPolicy, Suite, TestCase, TestCtx};

use super::logout_case;

/// Width of the sidebar when expanded.
const EXPANDED_WIDTH: &str = "288px";

pub fn suite() -> Suite {
    Suite {
        name: "sidebar",
        route: routes::DASHBOARD,
        session: SessionPolicy::Authenticated {
            slot: "user-session",
        },
        cases: vec![
            TestCase::new("should display expanded by default", |ctx| {
                Box::pin(expanded_by_default(ctx))
            }),
            TestCase::new(
                "when expanded, it should display all required UI elements",
                |ctx| Box::pin(required_elements(ctx)),
            ),
            TestCase::new(
                "when expanded, it should navigate to the appropriate pages when each router link is clicked",
                |ctx| Box::pin(router_links_navigate(ctx)),
            ),
            TestCase::new(
                "when expanded, it should open the user account menu and verify each option exists",
                |ctx| Box::pin(account_menu_options(ctx)),
            ),
            logout_case(),
        ],
    }
}

async fn expanded_by_default(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(sel::SIDEBAR).await?;
    let width = page.css_value(sel::SIDEBAR, "width").await?;
    if width.as_deref() != Some(EXPANDED_WIDTH) {
        return Err(Error::Assertion(format!(
            "sidebar width is {width:?}, expected {EXPANDED_WIDTH:?}"
        )));
    }
    Ok(())
}

async fn required_elements(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(sel::SIDEBAR).await?;

    page.expect_visible(sel::SIDEBAR_LOGO).await?;
    page.expect_visible(&format!("{} .argus-icon", sel::SIDEBAR_LOGO))
        .await?;

    // Selected route highlight
    page.expect_visible(".bg-argus-blue-970").await?;
    page.expect_visible(sel::SIDEBAR_SELECTED_ITEM).await?;
    page.expect_text_contains(".bg-argus-blue-970", "Dashboard")
        .await?;

    page.expect_visible(sel::SIDEBAR_TOGGLER).await?;
    page.expect_visible(&format!("{} .mat-icon", sel::SIDEBAR_TOGGLER))
        .await?;

    for (route, label) in [
        (routes::DASHBOARD, "Dashboard"),
        (routes::DEVICES, "Devices"),
        (routes::PEOPLE, "People"),
        (routes::VIDEO_WALL, "Video Wall"),
    ] {
        let link = sel::href(route);
        page.expect_visible(&link).await?;
        page.expect_text_contains(&link, label).await?;
        page.expect_visible(&format!(
            "{link} > app-argus-icon .argus-icon .mat-icon svg"
        ))
        .await?;
    }

    page.expect_visible(sel::SIDEBAR_USER_NAME).await?;
    page.expect_text_contains(sel::SIDEBAR_USER_NAME, "Hal NineThousand")
        .await?;
    page.expect_visible(sel::SIDEBAR_USER_DETAILS).await?;
    page.expect_text_contains(sel::SIDEBAR_USER_DETAILS, "Clovis")
        .await?;
    page.expect_visible(sel::ACCOUNT_MENU_TRIGGER).await
}

async fn router_links_navigate(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;

    page.click(&sel::href(routes::DEVICES)).await?;
    page.expect_url_contains(routes::DEVICES_ALL_CAMERAS).await?;

    page.click(&sel::href(routes::PEOPLE)).await?;
    page.expect_url_contains(routes::PEOPLE_ACTIVITY).await?;

    page.click(&sel::href(routes::VIDEO_WALL)).await?;
    page.expect_url_contains(routes::VIDEO_WALL).await?;

    page.click(&sel::href(routes::DASHBOARD)).await?;
    page.expect_url_contains(routes::DASHBOARD).await
}

async fn account_menu_options(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.click(sel::ACCOUNT_MENU_TRIGGER).await?;
    page.expect_visible(sel::ACCOUNT_MENU_CONTENT).await?;

    // Profile Settings
    page.expect_visible(".mat-mdc-menu-item.ng-star-inserted")
        .await?;
    page.expect_text_contains(".mat-mdc-menu-item.ng-star-inserted", "Profile Settings")
        .await?;

    // Legal accordion with the two policy documents
    page.expect_visible("#mat-expansion-panel-header-0").await?;
    page.expect_text_contains("#mat-expansion-panel-header-0", "Legal")
        .await?;
    page.click("#mat-expansion-panel-header-0").await?;
    page.expect_visible("#cdk-accordion-child-0 > .mat-expansion-panel-body")
        .await?;
    page.expect_text_contains_nth(".argus-legal-list > *", 0, "Main Services Agreement")
        .await?;
    page.expect_text_contains_nth(".argus-legal-list > *", 1, "Biometric Privacy Consent")
        .await?;

    // Help
    page.expect_visible_nth(&format!("{} > *", sel::ACCOUNT_MENU_CONTENT), 2)
        .await?;
    page.expect_text_contains_nth(&format!("{} > *", sel::ACCOUNT_MENU_CONTENT), 2, "Help")
        .await?;

    // Switch Account accordion with the tenant entry
    page.expect_visible("#mat-expansion-panel-header-1").await?;
    page.expect_text_contains("#mat-expansion-panel-header-1", "Switch Account")
        .await?;
    page.click("#mat-expansion-panel-header-1").await?;
    page.expect_visible("#cdk-accordion-child-1 > .mat-expansion-panel-body")
        .await?;
    page.expect_text_contains(".argus-account-list", "Clovis")
        .await?;
    page.expect_text_contains(".argus-account-list", "10000015")
        .await?;

    // Log out entry
    page.expect_visible(sel::ACCOUNT_MENU_LOGOUT_ITEM).await?;
    page.expect_text_contains(sel::ACCOUNT_MENU_LOGOUT_ITEM, "Log out")
        .await?;

    page.dismiss_overlays().await
}
