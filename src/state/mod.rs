//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state.

pub mod cart_state;
pub mod config_state;
