pub mod common;
mod context;
pub mod pages;

pub use context::{BackendContext, provide_backend, use_backend};
