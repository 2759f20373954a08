//! DataTable Component
//!
//! A reusable table with a header row and keyed body rows.

pub mod column;
pub mod data_table;

pub use column::{Column, ColumnWidth};
pub use data_table::DataTable;
