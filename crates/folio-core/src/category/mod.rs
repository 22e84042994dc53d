mod filter;
mod table;

pub use filter::{filter_by_category, ALL_SLUG};
pub use table::{CategoryConfig, CategoryTable};
