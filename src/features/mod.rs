//! Features - Vertical Feature Slices
//!
//! Each feature contains its page, view, and local logic.

pub mod cart;
