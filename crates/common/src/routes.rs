//! Dashboard routes, relative to the configured base URL.

pub const SIGN_IN: &str = "/auth/sign-in";
pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
pub const SIGN_UP: &str = "/auth/sign-up";

pub const DASHBOARD: &str = "/dashboard";
pub const VIDEO_WALL: &str = "/video-wall";

pub const DEVICES: &str = "/devices";
pub const DEVICES_CAMERAS: &str = "/devices/cameras";
pub const DEVICES_CAMERA_ACTIVITY: &str = "/devices/cameras/activity";
pub const DEVICES_ALL_CAMERAS: &str = "/devices/cameras/all-cameras";
pub const DEVICES_DOORS: &str = "/devices/doors";
pub const DEVICES_DOOR_ACTIVITY: &str = "/devices/doors/door-activity";
pub const DEVICES_ALL_DOORS: &str = "/devices/doors/all-doors";
pub const DEVICES_HUBS: &str = "/devices/hubs";
pub const DEVICES_ALL_HUBS: &str = "/devices/hubs/all-hubs";

pub const PEOPLE: &str = "/people";
pub const PEOPLE_ACTIVITY: &str = "/people/activity";
pub const PEOPLE_UNKNOWN: &str = "/people/unknown-people";
pub const PEOPLE_KNOWN: &str = "/people/known-people";
pub const PEOPLE_OF_INTEREST: &str = "/people/people-of-interest";

pub const SETTINGS_ACCOUNT: &str = "/settings/account";
pub const SETTINGS_SITES: &str = "/settings/sites";
pub const SETTINGS_REPORTS: &str = "/settings/reports";
pub const SETTINGS_ACCESS_LOGS: &str = "/settings/reports/access-logs";
pub const SETTINGS_STANDARD_USERS: &str = "/settings/users/standard-users";

/// Join a route onto a base URL without doubling the slash.
pub fn join(base: &str, route: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_handles_trailing_slash() {
        assert_eq!(
            join("https://dash.example.com/", DASHBOARD),
            "https://dash.example.com/dashboard"
        );
        assert_eq!(
            join("https://dash.example.com", SIGN_IN),
            "https://dash.example.com/auth/sign-in"
        );
    }
}
