use std::sync::Arc;

use crate::application::api::Api;
use crate::ports::outbound::PlatformPort;
use crate::state::Platform;

/// Configuration types for the player runner.
pub mod config {
    use std::str::FromStr;

    use crate::infrastructure::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS};

    pub const ENV_API_URL: &str = "STEPFORM_API_URL";
    pub const ENV_REQUEST_TIMEOUT_MS: &str = "STEPFORM_REQUEST_TIMEOUT_MS";
    pub const ENV_SHELL: &str = "STEPFORM_SHELL";

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub enum ShellKind {
        #[default]
        Desktop,
        Mobile,
    }

    impl FromStr for ShellKind {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "desktop" => Ok(Self::Desktop),
                "mobile" => Ok(Self::Mobile),
                other => Err(format!("unknown shell kind: {other}")),
            }
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct RunnerConfig {
        pub shell: ShellKind,
        /// Base URL the `/submit` and `/posts` paths are joined onto
        pub api_base_url: String,
        pub request_timeout_ms: u64,
    }

    impl Default for RunnerConfig {
        fn default() -> Self {
            Self {
                shell: ShellKind::default(),
                api_base_url: DEFAULT_API_BASE_URL.to_string(),
                request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            }
        }
    }

    impl RunnerConfig {
        /// Load configuration from environment variables
        pub fn from_env() -> Self {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// Build from any key lookup. Unset keys use defaults; invalid ones
        /// are logged and also use defaults.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let defaults = Self::default();

            let api_base_url = lookup(ENV_API_URL)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.api_base_url);

            let request_timeout_ms = match lookup(ENV_REQUEST_TIMEOUT_MS) {
                None => defaults.request_timeout_ms,
                Some(raw) => match raw.trim().parse::<u64>() {
                    Ok(ms) if ms > 0 => ms,
                    _ => {
                        tracing::warn!(
                            value = %raw,
                            "Invalid {}, using default",
                            ENV_REQUEST_TIMEOUT_MS
                        );
                        defaults.request_timeout_ms
                    }
                },
            };

            let shell = match lookup(ENV_SHELL) {
                None => defaults.shell,
                Some(raw) => raw.parse().unwrap_or_else(|e: String| {
                    tracing::warn!("{}, using desktop", e);
                    defaults.shell
                }),
            };

            Self {
                shell,
                api_base_url,
                request_timeout_ms,
            }
        }
    }
}

use config::RunnerConfig;

pub struct RunnerDeps {
    pub platform: Platform,
    pub api: Api,
    pub config: RunnerConfig,
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps {
        platform,
        api,
        config,
    } = deps;

    // Wrap Platform in Arc<dyn PlatformPort> for UI layer abstraction
    let platform_port: Arc<dyn PlatformPort> = Arc::new(platform);

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let head = format!("<style>{}</style>", crate::ui::APP_CSS);
        let window = dioxus_desktop::WindowBuilder::new().with_title("Stepform");
        let cfg = dioxus_desktop::Config::new()
            .with_window(window)
            .with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    // Convert runner's ShellKind to the UI's ShellKind for context
    let ui_shell = match config.shell {
        config::ShellKind::Desktop => crate::ui::ShellKind::Desktop,
        config::ShellKind::Mobile => crate::ui::ShellKind::Mobile,
    };

    builder
        .with_context(platform_port)
        .with_context(ui_shell)
        .with_context(crate::ui::presentation::Services::new(api))
        .launch(crate::ui::app);
}
