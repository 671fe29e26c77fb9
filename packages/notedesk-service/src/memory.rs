use std::{
	collections::{BTreeMap, HashMap},
	sync::{Mutex, MutexGuard, RwLock},
};

use uuid::Uuid;

use crate::{BoxFuture, Error, Note, NoteDraft, NoteStore, Result, User, UserDirectory};

pub const FIRST_TICKET: i64 = 500;

/// In-process user directory and note store.
///
/// Each call takes its lock once, so every individual write is atomic. Nothing is persisted.
pub struct MemoryBackend {
	users: RwLock<HashMap<Uuid, User>>,
	notes: Mutex<NoteTable>,
}
impl MemoryBackend {
	pub fn new() -> Self {
		Self {
			users: RwLock::new(HashMap::new()),
			notes: Mutex::new(NoteTable { next_ticket: FIRST_TICKET, rows: BTreeMap::new() }),
		}
	}

	pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
		let backend = Self::new();

		for user in users {
			backend.insert_user(user);
		}

		backend
	}

	/// Adds or replaces a directory entry.
	pub fn insert_user(&self, user: User) {
		let mut users = self.users.write().unwrap_or_else(|err| err.into_inner());

		users.insert(user.id, user);
	}

	pub fn note_count(&self) -> usize {
		self.lock_notes().rows.len()
	}

	fn lock_notes(&self) -> MutexGuard<'_, NoteTable> {
		self.notes.lock().unwrap_or_else(|err| err.into_inner())
	}
}
impl Default for MemoryBackend {
	fn default() -> Self {
		Self::new()
	}
}
impl UserDirectory for MemoryBackend {
	fn find_user<'a>(&'a self, user_id: Uuid) -> BoxFuture<'a, Result<Option<User>>> {
		let user = self.users.read().unwrap_or_else(|err| err.into_inner()).get(&user_id).cloned();

		Box::pin(async move { Ok(user) })
	}
}
impl NoteStore for MemoryBackend {
	fn list_notes<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Note>>> {
		let notes = self.lock_notes().rows.values().cloned().collect();

		Box::pin(async move { Ok(notes) })
	}

	fn list_notes_by_owner<'a>(&'a self, owner_id: Uuid) -> BoxFuture<'a, Result<Vec<Note>>> {
		let notes = self
			.lock_notes()
			.rows
			.values()
			.filter(|note| note.owner_id == owner_id)
			.cloned()
			.collect();

		Box::pin(async move { Ok(notes) })
	}

	fn find_note<'a>(&'a self, ticket: i64) -> BoxFuture<'a, Result<Option<Note>>> {
		let note = self.lock_notes().rows.get(&ticket).cloned();

		Box::pin(async move { Ok(note) })
	}

	fn insert_note<'a>(&'a self, draft: NoteDraft) -> BoxFuture<'a, Result<Note>> {
		let mut table = self.lock_notes();
		let ticket = table.next_ticket;
		let note = Note {
			id: draft.id,
			ticket,
			owner_id: draft.owner_id,
			title: draft.title,
			text: draft.text,
			completed: draft.completed,
			created_at: draft.created_at,
			updated_at: draft.created_at,
		};

		table.next_ticket += 1;
		table.rows.insert(ticket, note.clone());

		Box::pin(async move { Ok(note) })
	}

	fn update_note<'a>(&'a self, note: &'a Note) -> BoxFuture<'a, Result<()>> {
		let result = match self.lock_notes().rows.get_mut(&note.ticket) {
			Some(stored) => {
				*stored = note.clone();

				Ok(())
			},
			None => Err(Error::not_found(format!("Ticket {} does not exist.", note.ticket))),
		};

		Box::pin(async move { result })
	}

	fn delete_note<'a>(&'a self, ticket: i64) -> BoxFuture<'a, Result<bool>> {
		let removed = self.lock_notes().rows.remove(&ticket).is_some();

		Box::pin(async move { Ok(removed) })
	}
}

struct NoteTable {
	next_ticket: i64,
	rows: BTreeMap<i64, Note>,
}
