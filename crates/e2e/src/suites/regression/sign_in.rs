//! Sign In page full regression: field validation, input sanitization,
//! keyboard submit, auth round trips, footer links.

use argus_common::{routes, sel, Account};
use argus_harness::{auth, Result, SessionPolicy, Suite, TestCase, TestCtx};

const FOOTER_COPYRIGHT: &str = "Copyright © Argus Security 2025 | Version 1.0.15";
const FOOTER_LINKS: &str = ".login-footer a, .login-footer button, .login-footer span";
const SQL_INJECTION: &str = "' OR '1'='1";

pub fn suite() -> Suite {
    Suite {
        name: "regression-sign-in",
        route: routes::SIGN_IN,
        session: SessionPolicy::Anonymous,
        cases: vec![
            TestCase::new("should load the sign-in page successfully", |ctx| {
                Box::pin(loads(ctx))
            }),
            TestCase::new("should display the UI elements", |ctx| {
                Box::pin(ui_elements(ctx))
            }),
            TestCase::new("should display validation errors when fields are empty", |ctx| {
                Box::pin(empty_field_errors(ctx))
            }),
            TestCase::new(
                "should display validation errors for invalid email format",
                |ctx| Box::pin(invalid_email_format(ctx)),
            ),
            TestCase::new("should mask password input", |ctx| {
                Box::pin(password_masked(ctx))
            }),
            TestCase::new("should not allow login with invalid credentials", |ctx| {
                Box::pin(rejects_invalid_credentials(ctx))
            }),
            TestCase::new("should not allow SQL injection", |ctx| {
                Box::pin(rejects_sql_injection(ctx))
            }),
            TestCase::new("should allow login with valid credentials", |ctx| {
                Box::pin(accepts_valid_credentials(ctx))
            }),
            TestCase::new("should submit the form when pressing Enter", |ctx| {
                Box::pin(enter_submits(ctx))
            }),
            TestCase::new(
                "should navigate to Forgot Password page when clicking on link",
                |ctx| Box::pin(forgot_password_link(ctx)),
            ),
            TestCase::new("should navigate to Sign Up page when clicking on link", |ctx| {
                Box::pin(sign_up_link(ctx))
            }),
        ],
    }
}

async fn loads(ctx: &TestCtx<'_>) -> Result<()> {
    ctx.page.expect_url_contains(routes::SIGN_IN).await
}

async fn ui_elements(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(sel::LOGIN_BG).await?;
    page.expect_text_contains(sel::LOGIN_HEADER_TEXT, "Sign In")
        .await?;

    page.expect_visible(&format!("{} .label", sel::LOGIN_FORM))
        .await?;
    page.expect_text_contains(sel::LOGIN_FORM, "Email").await?;
    page.expect_visible(sel::LOGIN_EMAIL).await?;
    page.expect_text_contains(sel::LOGIN_FORM, "Password").await?;
    page.expect_visible(sel::LOGIN_PASSWORD).await?;

    page.expect_visible(sel::LOGIN_SUBMIT_TOUCH_TARGET).await?;
    page.expect_text_contains(sel::LOGIN_SUBMIT_LABEL, "Sign In")
        .await?;

    page.expect_text_contains(sel::LOGIN_FOOTER, "Forgot Password?")
        .await?;
    page.expect_text_contains(sel::LOGIN_FOOTER, "Need an account?")
        .await?;
    page.expect_text_contains(sel::LOGIN_FOOTER, "Sign Up").await?;

    page.expect_visible(".footer").await?;
    page.expect_text_contains(".footer", FOOTER_COPYRIGHT).await
}

async fn empty_field_errors(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.focus_then_blur(sel::LOGIN_EMAIL).await?;
    page.expect_text_contains(sel::FORM_FIELD_ERROR, "Required")
        .await?;
    page.focus_then_blur(sel::LOGIN_PASSWORD).await?;
    page.expect_count_at_least(sel::FORM_FIELD_ERROR, 2).await
}

async fn invalid_email_format(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.type_into(sel::LOGIN_EMAIL, "invalid-email").await?;
    page.focus_then_blur(sel::LOGIN_EMAIL).await?;
    page.expect_text_contains(sel::FORM_FIELD_ERROR, "Please enter a valid email address")
        .await
}

async fn password_masked(ctx: &TestCtx<'_>) -> Result<()> {
    ctx.page
        .expect_attr_eq(sel::LOGIN_PASSWORD, "type", "password")
        .await
}

async fn rejects_invalid_credentials(ctx: &TestCtx<'_>) -> Result<()> {
    auth::login_expect_rejected(
        ctx.page,
        &ctx.creds.invalid_user,
        auth::USER_NOT_FOUND_MESSAGE,
    )
    .await
}

/// Injection-shaped input must be caught by email validation at the
/// boundary and never reach the server as a query.
async fn rejects_sql_injection(ctx: &TestCtx<'_>) -> Result<()> {
    let probe = Account {
        email: SQL_INJECTION.to_string(),
        password: SQL_INJECTION.to_string(),
    };
    auth::login_expect_rejected(ctx.page, &probe, auth::INVALID_EMAIL_MESSAGE).await
}

async fn accepts_valid_credentials(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    auth::login(page, &ctx.creds.valid_user).await?;
    page.expect_url_not_contains("/auth/signin").await?;
    page.expect_url_contains(routes::DASHBOARD).await?;
    auth::logout(page).await
}

async fn enter_submits(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.type_into(sel::LOGIN_EMAIL, &ctx.creds.valid_user.email)
        .await?;
    page.type_into(sel::LOGIN_PASSWORD, &ctx.creds.valid_user.password)
        .await?;
    page.press_enter(sel::LOGIN_PASSWORD).await?;
    page.expect_url_not_contains("/auth/signin").await?;
    page.expect_url_contains(routes::DASHBOARD).await?;
    auth::logout(page).await
}

async fn forgot_password_link(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.click_containing(FOOTER_LINKS, "Forgot Password?").await?;
    page.expect_url_contains(routes::FORGOT_PASSWORD).await
}

async fn sign_up_link(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.click_containing(FOOTER_LINKS, "Sign Up").await?;
    page.expect_url_contains(routes::SIGN_UP).await
}
