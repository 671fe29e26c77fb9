use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use notedesk_domain::access::{self, Denial};

use crate::{Error, NoteAck, NotesService, Result};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
	pub user_id: Option<Uuid>,
	pub ticket: Option<i64>,
	pub title: Option<String>,
	pub text: Option<String>,
	pub completed: Option<bool>,
}

impl NotesService {
	/// Replaces title, text and completion of the note behind `ticket`.
	///
	/// Managers and admins may update any note, employees only the notes they own. There is no
	/// version check, so concurrent updates of one ticket resolve to the last write.
	pub async fn update_note(&self, req: UpdateNoteRequest) -> Result<NoteAck> {
		let title = crate::non_blank(req.title.as_deref());
		let text = crate::non_blank(req.text.as_deref());
		let (Some(actor_id), Some(ticket), Some(title), Some(text), Some(completed)) =
			(req.user_id, req.ticket, title, text, req.completed)
		else {
			return Err(crate::missing_fields(&[
				("userId", req.user_id.is_some()),
				("ticket", req.ticket.is_some()),
				("title", title.is_some()),
				("text", text.is_some()),
				("completed", req.completed.is_some()),
			]));
		};
		let Some(user) = self.users.find_user(actor_id).await? else {
			return Err(Error::invalid("User not found"));
		};
		let actor = user.actor();
		let grant = access::update_grant(&actor).inspect_err(|denial| {
			tracing::debug!(%actor_id, ticket, ?denial, "Update denied.");
		})?;
		let Some(mut note) = self.notes.find_note(ticket).await? else {
			return Err(Error::not_found("Note not found"));
		};

		if !grant.permits(actor.id, note.owner_id) {
			tracing::debug!(%actor_id, ticket, "Update denied; actor does not own the note.");

			return Err(Denial::NotOwner.into());
		}

		note.title = title.to_string();
		note.text = text.to_string();
		note.completed = completed;
		note.updated_at = OffsetDateTime::now_utc();

		self.notes.update_note(&note).await.map_err(|err| match err {
			err @ Error::NotFound { .. } => err,
			err => {
				tracing::warn!(%actor_id, ticket, error = %err, "Failed to store note update.");

				Error::invalid("Invalid note data received")
			},
		})?;

		tracing::info!(%actor_id, ticket, "Note updated.");

		Ok(NoteAck { message: format!("Updated ticket {ticket}"), ticket })
	}
}
