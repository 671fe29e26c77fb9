use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use notedesk_domain::{access::Actor, role::RoleSet};
use notedesk_storage::models::{NoteRow, UserRow};

/// Directory record for a user. Read-only from the notes service's point of view.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
	pub id: Uuid,
	pub username: String,
	pub active: bool,
	pub roles: RoleSet,
}
impl User {
	pub fn actor(&self) -> Actor {
		Actor { id: self.id, active: self.active, roles: self.roles }
	}
}
impl From<UserRow> for User {
	fn from(row: UserRow) -> Self {
		Self {
			id: row.user_id,
			username: row.username,
			active: row.active,
			roles: RoleSet::from_names(&row.roles),
		}
	}
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
	pub id: Uuid,
	pub ticket: i64,
	#[serde(rename = "user")]
	pub owner_id: Uuid,
	pub title: String,
	pub text: String,
	pub completed: bool,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde")]
	pub updated_at: OffsetDateTime,
}
impl From<NoteRow> for Note {
	fn from(row: NoteRow) -> Self {
		Self {
			id: row.note_id,
			ticket: row.ticket,
			owner_id: row.user_id,
			title: row.title,
			text: row.text,
			completed: row.completed,
			created_at: row.created_at,
			updated_at: row.updated_at,
		}
	}
}
impl From<Note> for NoteRow {
	fn from(note: Note) -> Self {
		Self {
			note_id: note.id,
			ticket: note.ticket,
			user_id: note.owner_id,
			title: note.title,
			text: note.text,
			completed: note.completed,
			created_at: note.created_at,
			updated_at: note.updated_at,
		}
	}
}

/// A validated note that has not been stored yet. The store assigns its ticket.
#[derive(Clone, Debug)]
pub struct NoteDraft {
	pub id: Uuid,
	pub owner_id: Uuid,
	pub title: String,
	pub text: String,
	pub completed: bool,
	pub created_at: OffsetDateTime,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NoteAck {
	pub message: String,
	pub ticket: i64,
}
