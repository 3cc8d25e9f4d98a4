//! Sign-in and sign-out commands.
//!
//! The two UI flows every suite depends on. Both block until the dashboard
//! confirms the transition (URL change or error snack); a deadline miss is
//! surfaced to the caller, never retried here.

use argus_common::{routes, sel, Account};

use crate::error::Result;
use crate::page::Page;

/// Prefix of the snack-bar message shown for an unregistered account. The
/// dashboard appends an explanation sentence; the prefix is the contract.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found.";

/// Snack-bar message shown when the email fails input validation, including
/// for injection-shaped input.
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email";

/// Drive the sign-in form and block until the authenticated landing route
/// is reached.
pub async fn login(page: &Page, account: &Account) -> Result<()> {
    page.goto(routes::SIGN_IN).await?;
    page.type_into(sel::LOGIN_EMAIL, &account.email).await?;
    page.type_into(sel::LOGIN_PASSWORD, &account.password).await?;
    page.click(sel::LOGIN_SUBMIT_LABEL).await?;
    page.expect_url_contains(routes::DASHBOARD).await
}

/// Drive the sign-in form with credentials the dashboard must reject and
/// block until the expected error message is surfaced. The page must stay
/// on the sign-in route.
pub async fn login_expect_rejected(
    page: &Page,
    account: &Account,
    expected_message: &str,
) -> Result<()> {
    page.goto(routes::SIGN_IN).await?;
    page.type_into(sel::LOGIN_EMAIL, &account.email).await?;
    page.type_into(sel::LOGIN_PASSWORD, &account.password).await?;
    page.click(sel::LOGIN_SUBMIT_LABEL).await?;
    page.expect_text_contains(sel::SNACK_MESSAGE, expected_message)
        .await?;
    page.expect_url_contains(routes::SIGN_IN).await
}

/// Reverse the authenticated state through the account menu and confirm the
/// dialog; blocks until the sign-in route is reached again.
pub async fn logout(page: &Page) -> Result<()> {
    page.click(sel::ACCOUNT_MENU_TRIGGER).await?;
    page.click(sel::ACCOUNT_MENU_LOGOUT_ITEM).await?;
    page.expect_visible(sel::DIALOG_ACTIONS).await?;
    page.click_containing(sel::DIALOG_ACTION_BUTTONS, "Logout")
        .await?;
    page.expect_url_contains(routes::SIGN_IN).await
}
