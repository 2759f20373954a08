//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use gpui_component::Root;

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::domain::cart_item::{self, CartItem};
use crate::domain::config::AppConfig;
use crate::i18n::t;
use crate::state::config_state::ConfigState;
use crate::utils::config_store;

actions!(cart_gui, [Quit]);

/// Load configuration, falling back to defaults on any error
pub fn load_config_state() -> ConfigState {
    let path = match config_store::config_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!("Config path unavailable: {e}");
            return ConfigState::new(AppConfig::default(), None);
        }
    };

    match config_store::load_config(&path) {
        Ok(config) => ConfigState::new(config, Some(path)),
        Err(e) => {
            tracing::error!("Failed to load {}: {e}; using defaults", path.display());
            ConfigState::new(AppConfig::default(), Some(path))
        }
    }
}

/// Load the cart snapshot named by the config, or the sample cart
pub fn load_cart(config: &AppConfig) -> Vec<CartItem> {
    let Some(path) = config.cart.path.as_deref() else {
        tracing::info!("No cart snapshot configured, using sample cart");
        return cart_item::sample_items();
    };

    match cart_item::load_items(path) {
        Ok(items) => {
            tracing::info!("Loaded {} cart lines from {}", items.len(), path.display());
            items
        }
        Err(e) => {
            tracing::error!("Failed to load cart snapshot: {e}; using sample cart");
            cart_item::sample_items()
        }
    }
}

/// Run the Cart GUI application
pub fn run_app() {
    let config_state = load_config_state();
    let items = load_cart(&config_state.config);

    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);

        cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let window_config = config_state.config.window.clone();
        let title = t(config_state.config.locale, "app.title");

        let entities = AppEntities::init(config_state, items, cx);
        cx.set_global(entities.clone());

        let bounds = Bounds::centered(
            None,
            gpui::size(px(window_config.width), px(window_config.height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(gpui::size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(title)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let workspace = cx.new(|cx| Workspace::new(entities.clone(), window, cx));
            cx.new(|cx| Root::new(workspace, window, cx))
        });

        match opened {
            Ok(_) => cx.activate(true),
            Err(e) => {
                tracing::error!("Failed to open main window: {e}");
                cx.quit();
            }
        }
    });
}
