//! Dashboard full regression: first-row activity data against the oracle,
//! per-card camera activity checks, card menus.

use argus_common::oracle::{self, AccessResult, CredentialType};
use argus_common::{routes, sel};
use argus_harness::{Error, Result, SessionPolicy, Suite, TestCase, TestCtx};

use crate::suites::logout_case;

const ACTIVITY_ROWS: &str = r#"[data-test-id="mat-door-activityList-data"]"#;
const FIRST_ROW: &str = r#"[data-test-id="mat-door-activityList-data"]:first-of-type"#;
const CAMERA_CARDS: &str = ".camera-activity-list app-camera-activity-card";
const CARD_MENU_BUTTON: &str = ".camera-activity-list app-camera-activity-card button.menu-button";

pub fn suite() -> Suite {
    Suite {
        name: "regression-dashboard",
        route: routes::DASHBOARD,
        session: SessionPolicy::Authenticated {
            slot: "user-session",
        },
        cases: vec![
            TestCase::new(
                "should display all required Door Activity Table Rows UI elements",
                |ctx| Box::pin(door_activity_first_row(ctx)),
            ),
            TestCase::new("should display 20 required Camera Activity Cards UI elements", |ctx| {
                Box::pin(camera_cards_present(ctx))
            }),
            TestCase::new(
                "should have a 3-dot menu button with correct icon in each Camera Activity Card header",
                |ctx| Box::pin(camera_card_menu_buttons(ctx)),
            ),
            TestCase::new(
                "should display 'Play Event' and 'Camera History' options with icons in the first Camera Activity Card menu",
                |ctx| Box::pin(first_card_menu_options(ctx)),
            ),
            TestCase::new("should display an image in each Camera Activity Card", |ctx| {
                Box::pin(camera_card_images(ctx))
            }),
            TestCase::new(
                "should display a site name and camera name in each Camera Activity Card footer",
                |ctx| Box::pin(camera_card_footers(ctx)),
            ),
            logout_case(),
        ],
    }
}

async fn door_activity_first_row(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.expect_visible(ACTIVITY_ROWS).await?;

    // Every required column of the first row is populated.
    for column in [
        ".mat-column-fullName",
        ".mat-column-accessResult",
        ".mat-column-time",
        ".mat-column-deviceName",
        ".mat-column-zoneName",
        ".mat-column-siteName",
    ] {
        page.expect_not_empty(&format!("{FIRST_ROW} {column}")).await?;
    }
    page.expect_exists(&format!("{FIRST_ROW} .mat-column-hasVideo button"))
        .await?;

    // Access result belongs to the closed oracle set.
    let access_result = page
        .text_of(&format!("{FIRST_ROW} .mat-column-accessResult"))
        .await?;
    let access_result = access_result
        .parse::<AccessResult>()
        .map_err(|e| Error::Assertion(e.to_string()))?;

    // Device, zone and site names come from the provisioned environment.
    let device = page
        .text_of(&format!("{FIRST_ROW} .mat-column-deviceName"))
        .await?;
    ctx.checker
        .allow_listed(&device, oracle::VALID_DEVICE_NAMES, "Device Name")?;
    let zone = page
        .text_of(&format!("{FIRST_ROW} .mat-column-zoneName"))
        .await?;
    ctx.checker
        .allow_listed(&zone, oracle::VALID_ZONE_NAMES, "Zone Name")?;
    let site = page
        .text_of(&format!("{FIRST_ROW} .mat-column-siteName"))
        .await?;
    ctx.checker
        .allow_listed(&site, oracle::VALID_SITE_NAMES, "Site Name")?;

    // Doorbell events carry no credential; everything else must show a
    // known credential type.
    let credential = page
        .text_of(&format!("{FIRST_ROW} .mat-column-workFlow"))
        .await?;
    if access_result == AccessResult::Doorbell {
        if !credential.is_empty() {
            return Err(Error::Assertion(format!(
                "doorbell event unexpectedly carries credential {credential:?}"
            )));
        }
    } else {
        credential
            .parse::<CredentialType>()
            .map_err(|e| Error::Assertion(e.to_string()))?;
    }
    Ok(())
}

async fn camera_cards_present(ctx: &TestCtx<'_>) -> Result<()> {
    ctx.page.expect_count(CAMERA_CARDS, 20).await
}

async fn camera_card_menu_buttons(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    let cards = page.count(CAMERA_CARDS).await?;
    page.expect_count(CARD_MENU_BUTTON, cards).await?;
    for index in 0..cards {
        page.expect_attr_eq_nth(
            &format!("{CARD_MENU_BUTTON} mat-icon"),
            index,
            "data-mat-icon-name",
            "more-vertical",
        )
        .await?;
    }
    Ok(())
}

async fn first_card_menu_options(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    page.click(CARD_MENU_BUTTON).await?;
    page.expect_visible(sel::MENU_PANEL).await?;

    for (index, name) in ["Play Event", "Camera History"].iter().enumerate() {
        page.expect_visible_nth(sel::MENU_ITEM, index).await?;
        page.expect_text_contains_nth(sel::MENU_ITEM, index, name)
            .await?;
        page.expect_visible_nth(
            &format!("{} .mat-mdc-menu-item-text mat-icon", sel::MENU_ITEM),
            index,
        )
        .await?;
    }

    page.dismiss_overlays().await
}

async fn camera_card_images(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;
    let cards = page.count(CAMERA_CARDS).await?;
    page.expect_count(&format!("{CAMERA_CARDS} img.camera-activity-image"), cards)
        .await
}

async fn camera_card_footers(ctx: &TestCtx<'_>) -> Result<()> {
    let page = ctx.page;

    let sites = page.texts_of(&format!("{CAMERA_CARDS} .site-name")).await?;
    if sites.is_empty() {
        return Err(Error::Assertion(
            "no site names found in camera activity card footers".to_string(),
        ));
    }
    for site in &sites {
        if site.is_empty() {
            return Err(Error::Assertion(
                "camera activity card has an empty site name".to_string(),
            ));
        }
        ctx.checker
            .allow_listed(site, oracle::VALID_SITE_NAMES, "Site Name")?;
    }

    let cameras = page
        .texts_of(&format!("{CAMERA_CARDS} .camera-name"))
        .await?;
    for camera in &cameras {
        if camera.is_empty() {
            return Err(Error::Assertion(
                "camera activity card has an empty camera name".to_string(),
            ));
        }
        ctx.checker
            .allow_listed(camera, oracle::VALID_CAMERA_NAMES, "Camera Name")?;
    }
    Ok(())
}
