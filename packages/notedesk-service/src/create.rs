use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Error, NoteAck, NoteDraft, NotesService, Result};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
	pub user_id: Option<Uuid>,
	pub title: Option<String>,
	pub text: Option<String>,
	pub completed: Option<bool>,
}

impl NotesService {
	/// Creates a note owned by `user_id`.
	///
	/// Any explicit `completed` value is accepted. The caller is not checked against the owner:
	/// anyone may file a note on behalf of any user id.
	pub async fn create_note(&self, req: CreateNoteRequest) -> Result<NoteAck> {
		let title = crate::non_blank(req.title.as_deref());
		let text = crate::non_blank(req.text.as_deref());
		let (Some(owner_id), Some(title), Some(text), Some(completed)) =
			(req.user_id, title, text, req.completed)
		else {
			return Err(crate::missing_fields(&[
				("userId", req.user_id.is_some()),
				("title", title.is_some()),
				("text", text.is_some()),
				("completed", req.completed.is_some()),
			]));
		};
		let draft = NoteDraft {
			id: Uuid::new_v4(),
			owner_id,
			title: title.to_string(),
			text: text.to_string(),
			completed,
			created_at: OffsetDateTime::now_utc(),
		};
		let note = self.notes.insert_note(draft).await.map_err(|err| {
			tracing::warn!(%owner_id, error = %err, "Failed to store note.");

			Error::invalid("Invalid note data received")
		})?;

		tracing::info!(%owner_id, ticket = note.ticket, "Note created.");

		Ok(NoteAck { message: "New note created".to_string(), ticket: note.ticket })
	}
}
