//! Shared application plumbing

pub mod error;

pub use error::{AppError, AppResponse, AppResult};
