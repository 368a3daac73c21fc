pub mod badge;
pub mod checkbox;

pub use badge::{Badge, Tone};
pub use checkbox::Checkbox;
