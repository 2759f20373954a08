//! Layout Components
//!
//! Header and other window chrome.

pub mod header;
