//! Cart Feature
//!
//! The cart line-item table, its pure intent and row logic, and the page
//! that owns the cart while the table is on screen.

pub mod intent;
pub mod model;
pub mod page;
pub mod table;

pub use intent::{CartHandlers, CartIntent, QuantityChangeHandler, RemoveHandler};
pub use table::CartItemsTable;
