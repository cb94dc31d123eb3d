//! Page components.

mod animations;
mod not_found;

pub use animations::AnimationsPage;
pub use not_found::NotFoundPage;
