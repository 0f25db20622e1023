//! Client-side route paths

pub const REGISTER_ROUTE: &str = "/register";
pub const LOGIN_ROUTE: &str = "/login";
/// Home of a signed-in user
pub const USER_ROUTE: &str = "/user";

/// Follow the "already have an account?" link. Pure navigation, no backend call.
pub fn follow_login_link(navigate: impl FnOnce(&'static str)) {
    navigate(LOGIN_ROUTE)
}

/// Follow the "no account yet?" link on the login page
pub fn follow_register_link(navigate: impl FnOnce(&'static str)) {
    navigate(REGISTER_ROUTE)
}
