use tracing_subscriber::EnvFilter;

use crate::utils::config::{AppConfig, RunningEnvironment};

/// Installs the global tracing subscriber. `RUST_LOG` wins when set;
/// otherwise the default verbosity follows the running environment.
pub fn initialize(config: &AppConfig) {
	let default_directive = match config.environment {
		RunningEnvironment::Development => "api=trace,info",
		RunningEnvironment::Production => "api=info,warn",
	};

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new(default_directive)),
		)
		.init();
}
