//! Application pages module
//!
//! - Register page (student sign-up)
//! - Login page
//! - User home page
//! - Not found page

mod login;
mod not_found;
mod register;
mod user;

pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use user::UserPage;
