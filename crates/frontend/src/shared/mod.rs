pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod debounce;
pub mod dialogs;
pub mod error;
pub mod icons;
pub mod list;
pub mod modal;
