use uuid::Uuid;

use notedesk_config::Postgres;
use notedesk_service::{CreateNoteRequest, DeleteNoteRequest, Error, NotesService, UpdateNoteRequest};
use notedesk_storage::{db::Db, models::UserRow, users};

async fn seeded_service(dsn: &str) -> (NotesService, Uuid, Uuid) {
	let cfg = Postgres { dsn: dsn.to_string(), pool_max_conns: 2 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	let admin = UserRow {
		user_id: Uuid::new_v4(),
		username: "ada".to_string(),
		roles: vec!["Admin".to_string()],
		active: true,
	};
	let employee = UserRow {
		user_id: Uuid::new_v4(),
		username: "eve".to_string(),
		roles: vec!["Employee".to_string()],
		active: true,
	};

	users::insert_user(&db.pool, &admin).await.expect("Failed to seed admin.");
	users::insert_user(&db.pool, &employee).await.expect("Failed to seed employee.");

	(NotesService::with_postgres(db), admin.user_id, employee.user_id)
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set NOTEDESK_PG_DSN to run."]
async fn note_lifecycle_against_postgres() {
	let Some(base_dsn) = notedesk_testkit::env_dsn() else {
		eprintln!("Skipping note_lifecycle_against_postgres; set NOTEDESK_PG_DSN to run this test.");

		return;
	};
	let test_db = notedesk_testkit::TestDatabase::new(&base_dsn)
		.await
		.expect("Failed to create test database.");
	let (service, admin, employee) = seeded_service(test_db.dsn()).await;
	let ack = service
		.create_note(CreateNoteRequest {
			user_id: Some(employee),
			title: Some("VPN down".to_string()),
			text: Some("Cannot reach the VPN.".to_string()),
			completed: Some(false),
		})
		.await
		.expect("Failed to create note.");

	assert_eq!(ack.ticket, 500);

	let listed = service.list_notes(employee).await.expect("Failed to list notes.");

	assert_eq!(listed.len(), 1);
	assert_eq!(listed[0].title, "VPN down");

	service
		.update_note(UpdateNoteRequest {
			user_id: Some(admin),
			ticket: Some(ack.ticket),
			title: Some("VPN restored".to_string()),
			text: Some("Gateway restarted.".to_string()),
			completed: Some(true),
		})
		.await
		.expect("Failed to update note.");

	let listed = service.list_notes(admin).await.expect("Failed to list notes.");

	assert_eq!(listed[0].title, "VPN restored");
	assert!(listed[0].completed);

	let err = service
		.delete_note(DeleteNoteRequest { user_id: Some(employee), ticket: Some(ack.ticket) })
		.await
		.expect_err("Employees must not delete.");

	assert!(matches!(err, Error::Forbidden { .. }), "Unexpected error: {err:?}");

	service
		.delete_note(DeleteNoteRequest { user_id: Some(admin), ticket: Some(ack.ticket) })
		.await
		.expect("Failed to delete note.");

	let err = service.list_notes(admin).await.expect_err("Expected no content.");

	assert!(matches!(err, Error::NoContent { .. }), "Unexpected error: {err:?}");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
