use std::{
	env,
	fmt::{Display, Formatter},
	net::SocketAddr,
};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Reads the runtime configuration: a `config/{dev,prod}` file picked by
/// the running environment, overridden by `APP_`-prefixed environment
/// variables. Every key has a default, so the service starts bare.
#[instrument]
pub fn parse_config() -> AppConfig {
	trace!("Reading config data...");

	let env = if cfg!(debug_assertions) {
		"dev".to_string()
	} else {
		env::var("APP_ENV").unwrap_or_else(|_| "prod".into())
	};

	match env.as_ref() {
		"prod" | "production" => Config::builder()
			.add_source(File::with_name("config/prod").required(false))
			.set_default("environment", "production")
			.expect("unable to set environment to production"),
		"dev" | "development" => Config::builder()
			.add_source(File::with_name("config/dev").required(false))
			.set_default("environment", "development")
			.expect("unable to set environment to development"),
		_ => {
			panic!("Unknown running environment found!");
		}
	}
	.set_default("bindAddr", "127.0.0.1:3000")
	.expect("unable to set default bind address")
	.set_default("passwordPepper", "secret123")
	.expect("unable to set default password pepper")
	.add_source(Environment::with_prefix("APP").separator("_"))
	.build()
	.expect("unable to merge with environment variables")
	.try_deserialize()
	.expect("unable to parse settings")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
	pub bind_addr: SocketAddr,
	/// Mixed into every argon2 hash as the keyed secret
	pub password_pepper: String,
	pub environment: RunningEnvironment,
	#[serde(default)]
	pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunningEnvironment {
	Development,
	Production,
}

impl Display for RunningEnvironment {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			formatter,
			"{}",
			match self {
				RunningEnvironment::Development => "Development",
				RunningEnvironment::Production => "Production",
			}
		)
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfig {
	/// Path of the database file. Created on first start if missing
	#[serde(default = "default_database_file")]
	pub file: String,
	#[serde(default = "default_connection_limit")]
	pub connection_limit: u32,
}

impl Default for DatabaseConfig {
	fn default() -> Self {
		Self {
			file: default_database_file(),
			connection_limit: default_connection_limit(),
		}
	}
}

fn default_database_file() -> String {
	"complaints.db".to_string()
}

fn default_connection_limit() -> u32 {
	10
}
