use uuid::Uuid;

use notedesk_storage::{db::Db, models::NewNote, notes, users};

use crate::{BoxFuture, Note, NoteDraft, NoteStore, Result, User, UserDirectory};

/// User directory and note store backed by the Postgres `users` and `notes` tables.
#[derive(Clone)]
pub struct PgBackend {
	db: Db,
}
impl PgBackend {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}
impl UserDirectory for PgBackend {
	fn find_user<'a>(&'a self, user_id: Uuid) -> BoxFuture<'a, Result<Option<User>>> {
		Box::pin(async move {
			let row = users::find_user(&self.db.pool, user_id).await?;

			Ok(row.map(User::from))
		})
	}
}
impl NoteStore for PgBackend {
	fn list_notes<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Note>>> {
		Box::pin(async move {
			let rows = notes::list_notes(&self.db.pool).await?;

			Ok(rows.into_iter().map(Note::from).collect())
		})
	}

	fn list_notes_by_owner<'a>(&'a self, owner_id: Uuid) -> BoxFuture<'a, Result<Vec<Note>>> {
		Box::pin(async move {
			let rows = notes::list_notes_by_owner(&self.db.pool, owner_id).await?;

			Ok(rows.into_iter().map(Note::from).collect())
		})
	}

	fn find_note<'a>(&'a self, ticket: i64) -> BoxFuture<'a, Result<Option<Note>>> {
		Box::pin(async move {
			let row = notes::find_note_by_ticket(&self.db.pool, ticket).await?;

			Ok(row.map(Note::from))
		})
	}

	fn insert_note<'a>(&'a self, draft: NoteDraft) -> BoxFuture<'a, Result<Note>> {
		Box::pin(async move {
			let new_note = NewNote {
				note_id: draft.id,
				user_id: draft.owner_id,
				title: &draft.title,
				text: &draft.text,
				completed: draft.completed,
				now: draft.created_at,
			};
			let row = notes::insert_note(&self.db.pool, &new_note).await?;

			Ok(Note::from(row))
		})
	}

	fn update_note<'a>(&'a self, note: &'a Note) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move {
			notes::update_note(&self.db.pool, &note.clone().into()).await?;

			Ok(())
		})
	}

	fn delete_note<'a>(&'a self, ticket: i64) -> BoxFuture<'a, Result<bool>> {
		Box::pin(async move { Ok(notes::delete_note_by_ticket(&self.db.pool, ticket).await?) })
	}
}
