pub mod header;
pub mod nav_dropdown;

pub use header::Header;
pub use nav_dropdown::NavDropdown;
