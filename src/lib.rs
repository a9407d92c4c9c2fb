//! EMS Server — employee records service
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── api/        # HTTP routes and handlers
//! ├── common/     # unified error handling
//! ├── config.rs   # environment configuration
//! ├── db/         # pool setup, models, repositories
//! ├── service/    # business rules
//! └── state.rs    # shared application state
//! ```

pub mod api;
pub mod common;
pub mod config;
pub mod db;
pub mod service;
pub mod state;

// Re-export public types
pub use common::{AppError, AppResult};
pub use config::Config;
pub use state::AppState;
