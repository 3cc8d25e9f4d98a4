//! People > Activity page sanity checks.

use argus_common::{routes, sel};
use argus_harness::{Result, SessionPolicy, Suite, TestCase, TestCtx};

use super::{expect_breadcrumb_trail, expect_page_header, logout_case};

pub fn suite() -> Suite {
    Suite {
        name: "people-activity",
        route: routes::PEOPLE_ACTIVITY,
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
            logout_case(),
        ],
    }
}

async fn header_elements(ctx: &TestCtx<'_>) -> Result<()> {
    expect_page_header(ctx.page, "Activity").await?;
    expect_breadcrumb_trail(
        ctx.page,
        &[
            (routes::PEOPLE, "People"),
            (routes::PEOPLE_ACTIVITY, "Activity"),
        ],
    )
    .await
}

async fn nav_bar(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(sel::NAV_BAR).await?;

    for (route, label) in [
        (routes::PEOPLE_ACTIVITY, "Activity"),
        (routes::PEOPLE_UNKNOWN, "Unknown People"),
        (routes::PEOPLE_KNOWN, "Known People"),
        (routes::PEOPLE_OF_INTEREST, "People of Interest"),
    ] {
        let btn = sel::nav_btn(route);
        page.expect_visible(&btn).await?;
        page.expect_text_contains(&format!("{btn} .mdc-button__label"), label)
            .await?;
    }

    page.expect_class_contains(&sel::nav_btn(routes::PEOPLE_ACTIVITY), "active-route")
        .await
}
