use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct UserRow {
	pub user_id: Uuid,
	pub username: String,
	pub roles: Vec<String>,
	pub active: bool,
}

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct NoteRow {
	pub note_id: Uuid,
	pub ticket: i64,
	pub user_id: Uuid,
	pub title: String,
	pub text: String,
	pub completed: bool,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

#[derive(Clone, Debug)]
pub struct NewNote<'a> {
	pub note_id: Uuid,
	pub user_id: Uuid,
	pub title: &'a str,
	pub text: &'a str,
	pub completed: bool,
	pub now: OffsetDateTime,
}
