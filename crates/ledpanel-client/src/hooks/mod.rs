mod use_device_data;
mod use_localstorage;
mod use_settings;

pub use use_device_data::*;
pub use use_localstorage::use_localstorage;
pub use use_settings::use_panel_settings;
