//! Sign In page sanity checks.

use argus_common::{routes, sel};
use argus_harness::{auth, Result, SessionPolicy, Suite, TestCase, TestCtx};

pub fn suite() -> Suite {
    Suite {
        name: "sign-in",
        route: routes::SIGN_IN,
        session: SessionPolicy::Anonymous,
        cases: vec![
            TestCase::new("should load the sign-in page successfully", |ctx| {
                Box::pin(loads(ctx))
            }),
            TestCase::new("should display all required UI elements", |ctx| {
                Box::pin(required_elements(ctx))
            }),
            TestCase::new("should not allow login with invalid credentials", |ctx| {
                Box::pin(rejects_invalid_credentials(ctx))
            }),
            TestCase::new("should allow login with valid credentials", |ctx| {
                Box::pin(accepts_valid_credentials(ctx))
            }),
        ],
    }
}

async fn loads(ctx: &TestCtx<'_>) -> Result<()> {
    ctx.page.expect_url_contains(routes::SIGN_IN).await
}

async fn required_elements(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_text_contains(sel::LOGIN_HEADER_TEXT, "Sign In")
        .await?;
    page.expect_text_contains(&format!("{} > :nth-child(1)", sel::LOGIN_FORM), "Email")
        .await?;
    page.expect_visible(sel::LOGIN_EMAIL).await?;
    page.expect_text_contains(&format!("{} > :nth-child(3)", sel::LOGIN_FORM), "Password")
        .await?;
    page.expect_visible(sel::LOGIN_PASSWORD).await?;
    page.expect_visible(sel::LOGIN_SUBMIT_TOUCH_TARGET).await?;
    page.expect_text_contains(sel::LOGIN_SUBMIT_LABEL, "Sign In")
        .await?;
    page.expect_text_contains(sel::LOGIN_FOOTER, "Forgot Password?")
        .await?;
    page.expect_text_contains(sel::LOGIN_FOOTER, "Need an account?")
        .await?;
    page.expect_text_contains(sel::LOGIN_FOOTER, "Sign Up").await
}

async fn rejects_invalid_credentials(ctx: &TestCtx<'_>) -> Result<()> {
    auth::login_expect_rejected(
        ctx.page,
        &ctx.creds.invalid_user,
        auth::USER_NOT_FOUND_MESSAGE,
    )
    .await
}

async fn accepts_valid_credentials(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    auth::login(page, &ctx.creds.valid_user).await?;
    page.expect_url_not_contains("/auth/signin").await?;
    page.expect_url_contains(routes::DASHBOARD).await?;
    auth::logout(page).await
}
