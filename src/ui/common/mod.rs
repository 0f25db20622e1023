//! Common UI components shared by the pages

pub mod form;
pub mod message;
pub mod spinner;

pub use form::FormField;
pub use message::StatusBanner;
pub use spinner::LoadingSpinner;
