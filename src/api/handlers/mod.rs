//! HTTP request handlers for API endpoints.

pub mod health;
pub mod shorten;

pub use health::health_handler;
pub use shorten::{
    get_record_handler, missing_code_handler, shorten_handler, unmatched_path_handler,
};
