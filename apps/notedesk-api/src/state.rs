use std::sync::Arc;

use color_eyre::eyre;

use notedesk_config::{Backend, Config, SeedUser};
use notedesk_domain::role::RoleSet;
use notedesk_service::{MemoryBackend, NotesService, User};
use notedesk_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<NotesService>,
}
impl AppState {
	pub async fn new(config: &Config) -> color_eyre::Result<Self> {
		let service = match config.storage.backend_kind() {
			Backend::Postgres => {
				let postgres = config.storage.postgres.as_ref().ok_or_else(|| {
					eyre::eyre!("storage.postgres is required when storage.backend is postgres.")
				})?;
				let db = Db::connect(postgres).await?;

				db.ensure_schema().await?;

				if !config.storage.users.is_empty() {
					tracing::warn!(
						count = config.storage.users.len(),
						"Ignoring storage.users; the postgres backend reads users from the database."
					);
				}

				NotesService::with_postgres(db)
			},
			Backend::Memory => {
				let backend = MemoryBackend::with_users(config.storage.users.iter().map(seed_user));

				NotesService::with_memory(Arc::new(backend))
			},
		};

		Ok(Self::from_service(service))
	}

	pub fn from_service(service: NotesService) -> Self {
		Self { service: Arc::new(service) }
	}
}

fn seed_user(seed: &SeedUser) -> User {
	User {
		id: seed.id,
		username: seed.username.clone(),
		active: seed.active,
		roles: RoleSet::from_names(&seed.roles),
	}
}
