pub mod create;
pub mod delete;
pub mod list;
pub mod memory;
pub mod model;
pub mod postgres;
pub mod time_serde;
pub mod update;

mod error;

pub use create::CreateNoteRequest;
pub use delete::DeleteNoteRequest;
pub use error::{Error, Result};
pub use memory::MemoryBackend;
pub use model::{Note, NoteAck, NoteDraft, User};
pub use postgres::PgBackend;
pub use update::UpdateNoteRequest;

use std::{future::Future, pin::Pin, sync::Arc};

use uuid::Uuid;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub const FIELDS_REQUIRED: &str = "All fields are required";

/// Resolves acting users to their active flag and roles.
pub trait UserDirectory
where
	Self: Send + Sync,
{
	fn find_user<'a>(&'a self, user_id: Uuid) -> BoxFuture<'a, Result<Option<User>>>;
}

/// Persistence for notes. Listing order is ascending ticket.
pub trait NoteStore
where
	Self: Send + Sync,
{
	fn list_notes<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Note>>>;

	fn list_notes_by_owner<'a>(&'a self, owner_id: Uuid) -> BoxFuture<'a, Result<Vec<Note>>>;

	fn find_note<'a>(&'a self, ticket: i64) -> BoxFuture<'a, Result<Option<Note>>>;

	/// Stores a draft and returns it with its newly assigned ticket.
	fn insert_note<'a>(&'a self, draft: NoteDraft) -> BoxFuture<'a, Result<Note>>;

	/// Overwrites the note with the same ticket. Fails with [`Error::NotFound`] if it is gone.
	fn update_note<'a>(&'a self, note: &'a Note) -> BoxFuture<'a, Result<()>>;

	/// Returns whether a note was removed.
	fn delete_note<'a>(&'a self, ticket: i64) -> BoxFuture<'a, Result<bool>>;
}

#[derive(Clone)]
pub struct NotesService {
	pub users: Arc<dyn UserDirectory>,
	pub notes: Arc<dyn NoteStore>,
}
impl NotesService {
	pub fn new(users: Arc<dyn UserDirectory>, notes: Arc<dyn NoteStore>) -> Self {
		Self { users, notes }
	}

	pub fn with_postgres(db: notedesk_storage::db::Db) -> Self {
		let backend = Arc::new(PgBackend::new(db));

		Self::new(backend.clone(), backend)
	}

	pub fn with_memory(backend: Arc<MemoryBackend>) -> Self {
		Self::new(backend.clone(), backend)
	}
}

/// Keeps the value only when it is present and not blank. The value itself is not trimmed.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
	value.filter(|value| !value.trim().is_empty())
}

pub(crate) fn missing_fields(checks: &[(&str, bool)]) -> Error {
	let fields = checks
		.iter()
		.filter(|(_, present)| !present)
		.map(|(name, _)| name.to_string())
		.collect();

	Error::InvalidData { message: FIELDS_REQUIRED.to_string(), fields }
}
