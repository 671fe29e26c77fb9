use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{
	Error, Result,
	models::{NewNote, NoteRow},
};

const NOTE_COLUMNS: &str = "note_id, ticket, user_id, title, text, completed, created_at, updated_at";

pub async fn list_notes<'e, E>(executor: E) -> Result<Vec<NoteRow>>
where
	E: PgExecutor<'e>,
{
	let sql = format!("SELECT {NOTE_COLUMNS} FROM notes ORDER BY ticket");
	let rows = sqlx::query_as::<_, NoteRow>(&sql).fetch_all(executor).await?;

	Ok(rows)
}

pub async fn list_notes_by_owner<'e, E>(executor: E, user_id: Uuid) -> Result<Vec<NoteRow>>
where
	E: PgExecutor<'e>,
{
	let sql = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE user_id = $1 ORDER BY ticket");
	let rows = sqlx::query_as::<_, NoteRow>(&sql).bind(user_id).fetch_all(executor).await?;

	Ok(rows)
}

pub async fn find_note_by_ticket<'e, E>(executor: E, ticket: i64) -> Result<Option<NoteRow>>
where
	E: PgExecutor<'e>,
{
	let sql = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE ticket = $1");
	let row = sqlx::query_as::<_, NoteRow>(&sql).bind(ticket).fetch_optional(executor).await?;

	Ok(row)
}

/// Inserts a note and returns the stored row, including the ticket drawn from `note_ticket_seq`.
pub async fn insert_note<'e, E>(executor: E, note: &NewNote<'_>) -> Result<NoteRow>
where
	E: PgExecutor<'e>,
{
	let sql = format!(
		"\
INSERT INTO notes (note_id, user_id, title, text, completed, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5, $6, $6)
RETURNING {NOTE_COLUMNS}"
	);
	let row = sqlx::query_as::<_, NoteRow>(&sql)
		.bind(note.note_id)
		.bind(note.user_id)
		.bind(note.title)
		.bind(note.text)
		.bind(note.completed)
		.bind(note.now)
		.fetch_one(executor)
		.await?;

	Ok(row)
}

pub async fn update_note<'e, E>(executor: E, note: &NoteRow) -> Result<()>
where
	E: PgExecutor<'e>,
{
	let result = sqlx::query(
		"\
UPDATE notes
SET
	title = $1,
	text = $2,
	completed = $3,
	updated_at = $4
WHERE ticket = $5",
	)
	.bind(note.title.as_str())
	.bind(note.text.as_str())
	.bind(note.completed)
	.bind(note.updated_at)
	.bind(note.ticket)
	.execute(executor)
	.await?;

	if result.rows_affected() == 0 {
		return Err(Error::NotFound(format!("Ticket {} does not exist.", note.ticket)));
	}

	Ok(())
}

pub async fn delete_note_by_ticket<'e, E>(executor: E, ticket: i64) -> Result<bool>
where
	E: PgExecutor<'e>,
{
	let result =
		sqlx::query("DELETE FROM notes WHERE ticket = $1").bind(ticket).execute(executor).await?;

	Ok(result.rows_affected() > 0)
}
