//! Devices > All Cameras page sanity checks.

use argus_common::{oracle, routes, sel};
use argus_harness::{Error, Result, SessionPolicy, Suite, TestCase, TestCtx};

use crate::suites::{
    expect_breadcrumb_trail, expect_devices_nav, expect_page_header, expect_search_and_filter,
    logout_case,
};

const THUMBNAILS: &str = r#"[data-test-id="allcameras-thumbnails"]"#;
const THUMBNAIL_CARDS: &str = r#"[data-test-id="allcameras-thumbnails"] mat-card"#;
const CONNECTION_STATUS: &str =
    r#"[data-test-id="allcameras-thumbnails"] mat-card span.connection-status"#;
const CAMERA_TITLES: &str = r#"[data-test-id="allcameras-thumbnails"] mat-card .camera-title"#;
const CARD_MENU_BUTTONS: &str =
    r#"[data-test-id="allcameras-thumbnails"] mat-card button.menu-button"#;

pub fn suite() -> Suite {
    Suite {
        name: "devices-all-cameras",
        route: routes::DEVICES_ALL_CAMERAS,
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
            TestCase::new(
                "should display all required All Cameras container elements",
                |ctx| Box::pin(container_elements(ctx)),
            ),
            TestCase::new("should display 10 required camera thumbnail cards", |ctx| {
                Box::pin(thumbnail_cards(ctx))
            }),
            TestCase::new(
                "should display the camera connection status in each camera thumbnail card header",
                |ctx| Box::pin(connection_status_per_card(ctx)),
            ),
            TestCase::new(
                "should display the camera's name in each camera thumbnail card header",
                |ctx| Box::pin(camera_name_per_card(ctx)),
            ),
            TestCase::new(
                "should have a 3-dot menu button with correct icon in each camera thumbnail card header",
                |ctx| Box::pin(menu_button_per_card(ctx)),
            ),
            logout_case(),
        ],
    }
}

async fn header_elements(ctx: &TestCtx<'_>) -> Result<()> {
    expect_page_header(ctx.page, "All Cameras").await?;
    expect_breadcrumb_trail(
        ctx.page,
        &[
            (routes::DEVICES, "Devices"),
            (routes::DEVICES_CAMERAS, "Cameras"),
            (routes::DEVICES_ALL_CAMERAS, "All"),
        ],
    )
    .await
}

async fn nav_bar(ctx: &TestCtx<'_>) -> Result<()> {
    expect_devices_nav(ctx.page, routes::DEVICES_CAMERAS).await
}

async fn container_elements(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;

    let activity_tab = sel::nav_btn(routes::DEVICES_CAMERA_ACTIVITY);
    page.expect_visible(&activity_tab).await?;
    page.expect_text_contains(
        &format!("{activity_tab} .mdc-button__label"),
        "Camera Activity",
    )
    .await?;

    let all_cameras_tab = sel::nav_btn(routes::DEVICES_ALL_CAMERAS);
    page.expect_visible(&all_cameras_tab).await?;
    page.expect_text_contains(&format!("{all_cameras_tab} .mdc-button__label"), "All Cameras")
        .await?;
    page.expect_class_contains(&all_cameras_tab, "active-route")
        .await?;

    page.expect_visible(".all-camera-header-wrapper").await?;
    page.expect_text_contains(".all-camera-header-wrapper h2", "All Cameras")
        .await?;
    expect_search_and_filter(page, "Search...").await?;

    for toggle in [".grid-button", ".list-button"] {
        page.expect_visible(toggle).await?;
        page.expect_visible(&format!("{toggle} .mat-icon svg")).await?;
    }
    Ok(())
}

async fn thumbnail_cards(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(THUMBNAILS).await?;
    page.expect_count(THUMBNAIL_CARDS, 10).await
}

async fn connection_status_per_card(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    let cards = page.count(THUMBNAIL_CARDS).await?;
    page.expect_count(CONNECTION_STATUS, cards).await?;
    for index in 0..cards {
        page.expect_class_any_nth(
            CONNECTION_STATUS,
            index,
            &["connected-camera", "disconnected-camera"],
        )
        .await?;
    }
    Ok(())
}

async fn camera_name_per_card(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_exists(CAMERA_TITLES).await?;
    for name in page.texts_of(CAMERA_TITLES).await? {
        if name.is_empty() {
            return Err(Error::Assertion(
                "camera thumbnail card has an empty title".to_string(),
            ));
        }
        ctx.checker
            .allow_listed(&name, oracle::VALID_CAMERA_NAMES, "Camera Name")?;
    }
    Ok(())
}

async fn menu_button_per_card(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    let cards = page.count(THUMBNAIL_CARDS).await?;
    page.expect_count(CARD_MENU_BUTTONS, cards).await?;
    for index in 0..cards {
        page.expect_attr_eq_nth(
            &format!("{CARD_MENU_BUTTONS} mat-icon"),
            index,
            "data-mat-icon-name",
            "more-vertical",
        )
        .await?;
        page.expect_exists(&format!("{CARD_MENU_BUTTONS} mat-icon svg"))
            .await?;
    }
    Ok(())
}
