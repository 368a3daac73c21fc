pub mod list;
pub mod products_modal;
