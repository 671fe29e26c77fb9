use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	#[serde(default = "default_backend")]
	pub backend: String,
	pub postgres: Option<Postgres>,
	/// Directory entries loaded into the memory backend at startup.
	#[serde(default)]
	pub users: Vec<SeedUser>,
}
impl Storage {
	/// Resolved backend kind. Only meaningful after [`crate::validate`] accepted the config.
	pub fn backend_kind(&self) -> Backend {
		match self.backend.as_str() {
			"memory" => Backend::Memory,
			_ => Backend::Postgres,
		}
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Backend {
	Postgres,
	Memory,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SeedUser {
	pub id: Uuid,
	pub username: String,
	#[serde(default)]
	pub roles: Vec<String>,
	#[serde(default = "default_active")]
	pub active: bool,
}

#[derive(Debug, Deserialize)]
pub struct Security {
	pub bind_localhost_only: bool,
}
impl Default for Security {
	fn default() -> Self {
		Self { bind_localhost_only: true }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_active() -> bool {
	true
}

fn default_backend() -> String {
	"postgres".to_string()
}
