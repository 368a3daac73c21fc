pub mod error;
pub mod page;
pub mod serde_utils;
