use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{Result, models::UserRow};

pub async fn find_user<'e, E>(executor: E, user_id: Uuid) -> Result<Option<UserRow>>
where
	E: PgExecutor<'e>,
{
	let row = sqlx::query_as::<_, UserRow>(
		"SELECT user_id, username, roles, active FROM users WHERE user_id = $1",
	)
	.bind(user_id)
	.fetch_optional(executor)
	.await?;

	Ok(row)
}

/// Users are owned by the identity subsystem. This is only used to seed fresh databases.
pub async fn insert_user<'e, E>(executor: E, user: &UserRow) -> Result<()>
where
	E: PgExecutor<'e>,
{
	sqlx::query("INSERT INTO users (user_id, username, roles, active) VALUES ($1, $2, $3, $4)")
		.bind(user.user_id)
		.bind(user.username.as_str())
		.bind(user.roles.as_slice())
		.bind(user.active)
		.execute(executor)
		.await?;

	Ok(())
}
