pub mod api;
pub mod context;
pub mod events;
pub mod session;
pub mod storage;
