pub mod number_format;
pub mod sortable_header_cell;

pub use number_format::*;
pub use sortable_header_cell::SortableHeaderCell;
