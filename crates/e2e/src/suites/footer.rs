//! Footer sanity checks.

use argus_common::{routes, sel};
use argus_harness::{Result, SessionPolicy, Suite, TestCase, TestCtx};

use super::logout_case;

const COPYRIGHT: &str = "© 2025 Argus Security. All rights reserved.";

pub fn suite() -> Suite {
    Suite {
        name: "footer",
        route: routes::DASHBOARD,
        session: SessionPolicy::Authenticated {
            slot: "user-session",
        },
        cases: vec![
            TestCase::new(
                "should display both parts of the logo in the footer, including SVGs",
                |ctx| Box::pin(logo_parts(ctx)),
            ),
            TestCase::new("should display the correct copyright text", |ctx| {
                Box::pin(copyright_text(ctx))
            }),
            logout_case(),
        ],
    }
}

async fn logo_parts(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(sel::FOOTER_LOGO_A).await?;
    page.expect_visible(sel::FOOTER_LOGO_B).await
}

async fn copyright_text(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_exists(sel::FOOTER_COPYRIGHT).await?;
    page.expect_text_eq(sel::FOOTER_COPYRIGHT, COPYRIGHT).await
}
