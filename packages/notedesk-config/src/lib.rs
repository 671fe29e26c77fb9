mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Backend, Config, Postgres, Security, SeedUser, Service, Storage};

use std::{collections::HashSet, fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);
	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if !matches!(cfg.storage.backend.as_str(), "postgres" | "memory") {
		return Err(Error::Validation {
			message: "storage.backend must be one of postgres or memory.".to_string(),
		});
	}
	if cfg.storage.backend_kind() == Backend::Postgres {
		let Some(postgres) = cfg.storage.postgres.as_ref() else {
			return Err(Error::Validation {
				message: "storage.postgres is required when storage.backend is postgres."
					.to_string(),
			});
		};

		if postgres.dsn.trim().is_empty() {
			return Err(Error::Validation {
				message: "storage.postgres.dsn must be non-empty.".to_string(),
			});
		}
		if postgres.pool_max_conns == 0 {
			return Err(Error::Validation {
				message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
			});
		}
	}

	let mut seen = HashSet::with_capacity(cfg.storage.users.len());

	for user in &cfg.storage.users {
		if user.username.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("storage.users entry {} must have a non-empty username.", user.id),
			});
		}
		if !seen.insert(user.id) {
			return Err(Error::Validation {
				message: format!("storage.users contains duplicate id {}.", user.id),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.storage.backend = cfg.storage.backend.trim().to_ascii_lowercase();

	if let Some(postgres) = cfg.storage.postgres.as_mut() {
		postgres.dsn = postgres.dsn.trim().to_string();
	}
}
