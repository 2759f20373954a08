//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::cart_item::CartItem;
use crate::state::{cart_state::CartState, config_state::ConfigState};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Application configuration state
    pub config: Entity<ConfigState>,
    /// Cart lines, owned by the host
    pub cart: Entity<CartState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities
    pub fn init(config: ConfigState, items: Vec<CartItem>, cx: &mut App) -> Self {
        Self {
            config: cx.new(|_| config),
            cart: cx.new(|_| CartState::new(items)),
        }
    }
}
