use uuid::Uuid;

use notedesk_domain::access::{self, ListScope};

use crate::{Error, Note, NotesService, Result};

impl NotesService {
	/// Lists every note for managers and admins, and only their own notes for employees.
	///
	/// An empty result is reported as [`Error::NoContent`].
	pub async fn list_notes(&self, actor_id: Uuid) -> Result<Vec<Note>> {
		let Some(user) = self.users.find_user(actor_id).await? else {
			tracing::debug!(%actor_id, "List denied; unknown actor.");

			return Err(Error::not_found("User not found"));
		};
		let actor = user.actor();
		let scope = access::list_scope(&actor).inspect_err(|denial| {
			tracing::debug!(%actor_id, ?denial, "List denied.");
		})?;
		let notes = match scope {
			ListScope::All => self.notes.list_notes().await?,
			ListScope::OwnedBy(owner_id) => self.notes.list_notes_by_owner(owner_id).await?,
		};

		if notes.is_empty() {
			return Err(Error::NoContent { message: "No notes found".to_string() });
		}

		Ok(notes)
	}
}
