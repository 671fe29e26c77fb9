use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::RoleSet;

/// User attempting an operation, as resolved from the user directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Actor {
	pub id: Uuid,
	pub active: bool,
	pub roles: RoleSet,
}

/// Role-gated operation a denial was raised for.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
	List,
	Update,
	Delete,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Denial {
	Inactive,
	NoRoles(Operation),
	InsufficientRole(Operation),
	NotOwner,
}
impl Denial {
	/// Client-facing wording. Each operation keeps its own phrasing of the role failures.
	pub fn message(self) -> &'static str {
		match self {
			Self::Inactive => "User not active",
			Self::NoRoles(Operation::List) => "Not a valid user",
			Self::NoRoles(Operation::Update) => "Not a valid User",
			Self::NoRoles(Operation::Delete) => "User has no assigned roles",
			Self::InsufficientRole(Operation::Delete) => "Must be admin or manager",
			Self::InsufficientRole(_) => "User does not have necessary permissions",
			Self::NotOwner => "Not authorized",
		}
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListScope {
	All,
	OwnedBy(Uuid),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UpdateGrant {
	AnyNote,
	OwnNotes,
}
impl UpdateGrant {
	pub fn permits(self, actor_id: Uuid, owner_id: Uuid) -> bool {
		match self {
			Self::AnyNote => true,
			Self::OwnNotes => actor_id == owner_id,
		}
	}
}

/// An actor must be active and hold at least one role name before any role check applies.
pub fn check_standing(actor: &Actor, operation: Operation) -> Result<(), Denial> {
	if !actor.active {
		return Err(Denial::Inactive);
	}
	if actor.roles.is_empty() {
		return Err(Denial::NoRoles(operation));
	}

	Ok(())
}

pub fn list_scope(actor: &Actor) -> Result<ListScope, Denial> {
	check_standing(actor, Operation::List)?;

	if actor.roles.is_manager_or_admin() {
		return Ok(ListScope::All);
	}
	if actor.roles.is_employee() {
		return Ok(ListScope::OwnedBy(actor.id));
	}

	Err(Denial::InsufficientRole(Operation::List))
}

/// Role-level update check. Ownership is decided later through [`UpdateGrant::permits`], once the
/// note is loaded.
pub fn update_grant(actor: &Actor) -> Result<UpdateGrant, Denial> {
	check_standing(actor, Operation::Update)?;

	if actor.roles.is_manager_or_admin() {
		return Ok(UpdateGrant::AnyNote);
	}
	if actor.roles.is_employee() {
		return Ok(UpdateGrant::OwnNotes);
	}

	Err(Denial::InsufficientRole(Operation::Update))
}

pub fn authorize_delete(actor: &Actor) -> Result<(), Denial> {
	check_standing(actor, Operation::Delete)?;

	if actor.roles.is_manager_or_admin() {
		Ok(())
	} else {
		Err(Denial::InsufficientRole(Operation::Delete))
	}
}
