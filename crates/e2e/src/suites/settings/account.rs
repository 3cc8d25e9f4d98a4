//! Settings > Account page sanity checks.

use argus_common::{routes, sel};
use argus_harness::{Result, SessionPolicy, Suite, TestCase, TestCtx};

use crate::suites::{expect_page_header, logout_case};

pub fn suite() -> Suite {
    Suite {
        name: "settings-account",
        route: routes::SETTINGS_ACCOUNT,
        session: SessionPolicy::Authenticated {
            slot: "user-session",
        },
        cases: vec![
            TestCase::new("should display all required Header UI elements", |ctx| {
                Box::pin(header_elements(ctx))
            }),
            TestCase::new(
                "should display all required Account Information container elements",
                |ctx| Box::pin(titled_card(ctx, "app-account-information", "Account Information")),
            ),
            TestCase::new(
                "should display all required Analytics Settings container elements",
                |ctx| Box::pin(titled_card(ctx, "app-analytics-settings", "Analytics Settings")),
            ),
            TestCase::new(
                "should display all required Company Address container elements",
                |ctx| Box::pin(titled_card_by_title(ctx, "Company Address")),
            ),
            TestCase::new(
                "should display all required Shipping Address container elements",
                |ctx| Box::pin(titled_card_by_title(ctx, "Shipping Address")),
            ),
            logout_case(),
        ],
    }
}

async fn header_elements(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    expect_page_header(page, "Account").await?;
    page.expect_visible(sel::BACK_BUTTON).await?;
    page.expect_visible(sel::BACK_BUTTON_ICON).await?;
    page.expect_visible(sel::BREADCRUMB_HOME_ICON).await?;
    page.expect_visible(".breadcrumb > a").await?;
    page.expect_text_contains(".breadcrumb > a", "Account").await
}

/// A titled form card hosted by a named component.
async fn titled_card(ctx: &TestCtx<'_>, component: &str, title: &str) -> Result<()> {
    let card = format!("{component} > app-titled-form-card > .titled-form-card");
    let title_sel = format!("{card} .card-header > .title-wrapper > .title");
    ctx.page.expect_visible(&title_sel).await?;
    ctx.page.expect_text_contains(&title_sel, title).await
}

/// A titled form card addressed by its `title` attribute.
async fn titled_card_by_title(ctx: &TestCtx<'_>, title: &str) -> Result<()> {
    let card = format!(r#"[title="{title}"] > .titled-form-card"#);
    let title_sel = format!("{card} .card-header > .title-wrapper > .title");
    ctx.page.expect_visible(&title_sel).await?;
    ctx.page.expect_text_contains(&title_sel, title).await
}
