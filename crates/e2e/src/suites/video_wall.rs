//! Video Wall page sanity checks.
//!
//! The page is still thin; for now the suite pins the chrome and the logout
//! flow so route regressions are caught.

use argus_common::{routes, sel};
use argus_harness::{Result, SessionPolicy, Suite, TestCase, TestCtx};

use super::logout_case;

pub fn suite() -> Suite {
    Suite {
        name: "video-wall",
        route: routes::VIDEO_WALL,
        session: SessionPolicy::Authenticated {
            slot: "user-session",
        },
        cases: vec![
            TestCase::new("should display the page header", |ctx| {
                Box::pin(header_exists(ctx))
            }),
            logout_case(),
        ],
    }
}

async fn header_exists(ctx: &TestCtx<'_>) -> Result<()> {
    ctx.page.expect_exists(sel::HEADER).await
}
