pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod form_utils;
pub mod icons;
pub mod list_state;
pub mod list_utils;
pub mod modal;
pub mod mounted;
pub mod polling;
pub mod settings;
pub mod theme;
