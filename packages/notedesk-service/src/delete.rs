use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notedesk_domain::access;

use crate::{Error, NoteAck, NotesService, Result};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNoteRequest {
	pub user_id: Option<Uuid>,
	pub ticket: Option<i64>,
}

impl NotesService {
	pub async fn delete_note(&self, req: DeleteNoteRequest) -> Result<NoteAck> {
		let (Some(actor_id), Some(ticket)) = (req.user_id, req.ticket) else {
			return Err(crate::missing_fields(&[
				("userId", req.user_id.is_some()),
				("ticket", req.ticket.is_some()),
			]));
		};
		let Some(user) = self.users.find_user(actor_id).await? else {
			return Err(Error::not_found("User not found"));
		};

		access::authorize_delete(&user.actor()).inspect_err(|denial| {
			tracing::debug!(%actor_id, ticket, ?denial, "Delete denied.");
		})?;

		if self.notes.find_note(ticket).await?.is_none() {
			return Err(Error::invalid("Note not found"));
		}
		// Another request may have removed the note since the lookup.
		if !self.notes.delete_note(ticket).await? {
			return Err(Error::invalid("Note not found"));
		}

		tracing::info!(%actor_id, ticket, "Note deleted.");

		Ok(NoteAck { message: format!("Ticket {ticket} was deleted"), ticket })
	}
}
