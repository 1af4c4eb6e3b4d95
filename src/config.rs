use shared::DashboardConfig;
use wasm_bindgen::JsValue;

/// Global object the hosting page may define before loading the app.
pub const CONFIG_GLOBAL: &str = "TELEMETRY_DASHBOARD_CONFIG";

/// Reads the page-injected config, falling back to defaults.
pub fn load_or_default() -> DashboardConfig {
    let Some(window) = web_sys::window() else {
        log::warn!("No window available - using default config");
        return DashboardConfig::default();
    };

    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if value.is_undefined() || value.is_null() {
        log::warn!("window.{CONFIG_GLOBAL} not set - using default config");
        return DashboardConfig::default();
    }

    match serde_wasm_bindgen::from_value::<DashboardConfig>(value) {
        Ok(config) => {
            log::info!("Loaded config from window.{CONFIG_GLOBAL}: {config:?}");
            config
        }
        Err(e) => {
            log::warn!("Failed to parse window.{CONFIG_GLOBAL}: {e} - using default config");
            DashboardConfig::default()
        }
    }
}
