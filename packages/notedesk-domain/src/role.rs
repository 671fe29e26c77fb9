use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Role {
	Admin,
	Manager,
	Employee,
}
impl Role {
	pub const ALL: [Self; 3] = [Self::Admin, Self::Manager, Self::Employee];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Admin => "Admin",
			Self::Manager => "Manager",
			Self::Employee => "Employee",
		}
	}

	fn bit(self) -> u8 {
		match self {
			Self::Admin => 0b001,
			Self::Manager => 0b010,
			Self::Employee => 0b100,
		}
	}
}
impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
impl FromStr for Role {
	type Err = UnknownRole;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"Admin" => Ok(Self::Admin),
			"Manager" => Ok(Self::Manager),
			"Employee" => Ok(Self::Employee),
			other => Err(UnknownRole(other.to_string())),
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownRole(pub String);
impl fmt::Display for UnknownRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Unknown role {:?}.", self.0)
	}
}
impl std::error::Error for UnknownRole {}

/// Compact set of [`Role`] values held by a user.
///
/// Stored names that are not a known [`Role`] are not members, but the set remembers that the
/// user had some, so such a user is not mistaken for one without any roles.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct RoleSet(u8);
impl RoleSet {
	const UNRECOGNIZED: u8 = 0b1000_0000;

	pub const fn empty() -> Self {
		Self(0)
	}

	pub fn from_names<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut set = Self::empty();

		for name in names {
			match name.as_ref().parse::<Role>() {
				Ok(role) => set.insert(role),
				Err(_) => set.0 |= Self::UNRECOGNIZED,
			}
		}

		set
	}

	pub fn with(mut self, role: Role) -> Self {
		self.insert(role);

		self
	}

	pub fn insert(&mut self, role: Role) {
		self.0 |= role.bit();
	}

	pub fn contains(self, role: Role) -> bool {
		self.0 & role.bit() != 0
	}

	/// True only when the user holds no role names at all, recognized or not.
	pub fn is_empty(self) -> bool {
		self.0 == 0
	}

	pub fn has_unrecognized(self) -> bool {
		self.0 & Self::UNRECOGNIZED != 0
	}

	pub fn is_manager_or_admin(self) -> bool {
		self.contains(Role::Admin) || self.contains(Role::Manager)
	}

	pub fn is_employee(self) -> bool {
		self.contains(Role::Employee)
	}

	pub fn iter(self) -> impl Iterator<Item = Role> {
		Role::ALL.into_iter().filter(move |role| self.contains(*role))
	}

	pub fn names(self) -> Vec<String> {
		self.iter().map(|role| role.as_str().to_string()).collect()
	}
}
impl fmt::Debug for RoleSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.iter()).finish()
	}
}
impl FromIterator<Role> for RoleSet {
	fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
		let mut set = Self::empty();

		for role in iter {
			set.insert(role);
		}

		set
	}
}
