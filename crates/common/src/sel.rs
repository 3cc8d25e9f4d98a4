//! CSS selectors for the dashboard's DOM.
//!
//! The dashboard is an Angular Material application; most hooks are either
//! `data-test-id` attributes, Material's generated `mat-mdc-*` classes, or
//! the app's own `argus-*` utility classes. Selectors used by more than one
//! suite live here so a markup change is a one-line fix.

// Page chrome -----------------------------------------------------------

pub const HEADER: &str = ".argus-header";
pub const HEADER_TITLE: &str = ".argus-header-title";
pub const HEADER_ACTIONS: &str = ".argus-header-actions";
pub const HEADER_ACTIONS_MENU_ICON: &str =
    ".argus-header-actions .mat-mdc-menu-trigger > .mat-icon > svg";
pub const BACK_BUTTON: &str = ".back-button";
pub const BACK_BUTTON_ICON: &str = ".back-button mat-icon > svg";
pub const BREADCRUMB_HOME_ICON: &str = ".breadcrumb-home-icon mat-icon > svg";
pub const BREADCRUMB_SEPARATOR_ICONS: &str = "app-breadcrumbs mat-icon.icon";

pub const FOOTER: &str = "app-footer";
pub const FOOTER_LOGO_A: &str = "app-footer .icon-wrapper-a mat-icon svg";
pub const FOOTER_LOGO_B: &str = "app-footer .icon-wrapper-b mat-icon svg";
pub const FOOTER_COPYRIGHT: &str = "app-footer .copyrights";

// Sidebar ---------------------------------------------------------------

pub const SIDEBAR: &str = ".sidebar";
pub const SIDEBAR_LOGO: &str = ".sidebar-logo";
pub const SIDEBAR_TOGGLER: &str = ".sidebar-toggler";
pub const SIDEBAR_SELECTED_ITEM: &str = ".sidebar-selected-item";
pub const SIDEBAR_USER_NAME: &str = ".argus-user-name";
pub const SIDEBAR_USER_DETAILS: &str = ".argus-user-details > .mat-mdc-tooltip-trigger";

// Account menu / dialogs ------------------------------------------------

pub const ACCOUNT_MENU_TRIGGER: &str =
    ".argus-user-account-icon > .mat-mdc-menu-trigger > .mat-icon";
pub const ACCOUNT_MENU_CONTENT: &str = ".mat-mdc-menu-content";
pub const ACCOUNT_MENU_LOGOUT_ITEM: &str = ".mat-mdc-menu-content > :nth-child(7)";
pub const DIALOG_ACTIONS: &str = ".mat-mdc-dialog-actions";
pub const DIALOG_ACTION_BUTTONS: &str = ".mat-mdc-dialog-actions button";
pub const MENU_PANEL: &str = ".mat-mdc-menu-panel";
pub const MENU_ITEM: &str = "button.mat-mdc-menu-item";

// Sign-in form ----------------------------------------------------------

pub const LOGIN_BG: &str = "app-base > .login-bg";
pub const MAT_CARD: &str = ".mat-mdc-card";
pub const LOGIN_HEADER_TEXT: &str = ".header-text";
pub const LOGIN_FORM: &str = ".login-form";
pub const LOGIN_EMAIL: &str = r#"[formcontrolname="loginEmail"]"#;
pub const LOGIN_PASSWORD: &str = r#"[formcontrolname="loginPassword"]"#;
pub const LOGIN_SUBMIT_LABEL: &str = ".mdc-button__label";
pub const LOGIN_SUBMIT_TOUCH_TARGET: &str = ".mat-mdc-button-touch-target";
pub const LOGIN_FOOTER: &str = ".login-footer";
pub const SNACK_MESSAGE: &str = ".snack-message > span";
pub const FORM_FIELD_ERROR: &str = "mat-error";

// Tables and lists ------------------------------------------------------

pub const TABLE_HEADER_CELLS: &str = "tr[mat-header-row] th";
pub const TABLE_ROWS: &str = "tr.mat-mdc-row";
pub const PAGINATOR: &str = ".mat-mdc-paginator-container";
pub const PAGINATOR_PAGE_SIZE_LABEL: &str = ".mat-mdc-paginator-page-size-label";
pub const PAGINATOR_PAGE_SIZE_VALUE: &str = ".mat-mdc-select-min-line";
pub const PAGINATOR_PREV: &str = ".mat-mdc-paginator-navigation-previous";
pub const PAGINATOR_NEXT: &str = ".mat-mdc-paginator-navigation-next";
pub const PAGINATOR_PAGE_BUTTONS: &str = "button.custom-paginator-page";

// Shared page furniture -------------------------------------------------

pub const NAV_BAR: &str = ".navigation-bar";
pub const NAV_BUTTONS: &str = ".navigation-buttons";
pub const SEARCH_BAR: &str = ".search-bar";
pub const SEARCH_INPUT: &str = ".search-input";
pub const FILTER_BUTTON: &str = "app-filter-button";
pub const ADD_DEVICE_BUTTON: &str = ".add-device-btn";
pub const TITLE_AND_ACTIONS: &str = ".title-and-actions";
pub const PANEL_TITLE: &str = r#"[data-test-id="panelTitle"]"#;
pub const PANEL_SUBTITLE: &str = r#"[data-test-id="panelSubTitle"]"#;
pub const PANEL_HEADER_BUTTON: &str = r#"[data-test-id="panelHeaderButton"]"#;
pub const EXPANSION_PANEL_HEADER: &str = "mat-expansion-panel-header";
pub const EXPANSION_INDICATOR_ICON: &str =
    "mat-expansion-panel-header .mat-expansion-indicator svg";

/// Build an `[href="..."]` anchor selector for a route.
pub fn href(route: &str) -> String {
    format!(r#"[href="{route}"]"#)
}

/// The nav-bar button inside an `[href="..."]` anchor.
pub fn nav_btn(route: &str) -> String {
    format!(r#"[href="{route}"] .nav-btn"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_builders_quote_the_route() {
        assert_eq!(href("/devices"), r#"[href="/devices"]"#);
        assert_eq!(
            nav_btn("/devices/doors"),
            r#"[href="/devices/doors"] .nav-btn"#
        );
    }
}
