//! Cart GUI Client Library
//!
//! A native GPUI client that renders a shopping cart as a line-item table:
//! thumbnail, unit price, quantity stepper, subtotal and a remove action.
//! The table reports changes upward and never owns the cart.

rust_i18n::i18n!("locales", fallback = "pt-BR");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod state;
pub mod theme;
pub mod utils;
