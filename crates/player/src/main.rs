//! Stepform Player - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stepform_player::application::api::Api;
use stepform_player::infrastructure::{platform::create_platform, ApiAdapter};
use stepform_player::ports::outbound::RawApiPort;
use stepform_player::runner::{self, config, RunnerDeps};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Loaded before the subscriber so RUST_LOG can come from .env
        let dotenv = dotenvy::dotenv();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "stepform_player=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();

        if let Err(e) = dotenv {
            if !e.not_found() {
                tracing::warn!("Ignoring unreadable .env: {}", e);
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Stepform Player");

    let config = load_config();
    tracing::info!(
        api = %config.api_base_url,
        shell = ?config.shell,
        "Loaded configuration"
    );

    // HTTP
    let raw_api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(
        &config.api_base_url,
        config.request_timeout_ms,
    ));
    let api = Api::new(raw_api);

    runner::run(RunnerDeps {
        platform: create_platform(),
        api,
        config,
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> config::RunnerConfig {
    config::RunnerConfig::from_env()
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> config::RunnerConfig {
    let mut cfg = config::RunnerConfig::from_lookup(|key| match key {
        config::ENV_API_URL => option_env!("STEPFORM_API_URL").map(str::to_string),
        _ => None,
    });

    // Shell kind follows the viewport on web
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0);

    cfg.shell = if width < 768.0 {
        config::ShellKind::Mobile
    } else {
        config::ShellKind::Desktop
    };
    cfg
}
