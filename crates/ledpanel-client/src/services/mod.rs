//! Services talking to the outside world.

mod api;

pub use api::{ApiClient, ApiError};
