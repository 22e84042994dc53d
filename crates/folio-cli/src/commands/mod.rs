pub mod articles;
pub mod categories;
pub mod config;
pub mod read_time;
