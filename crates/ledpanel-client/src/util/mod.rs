mod action;

pub use action::device_action;
