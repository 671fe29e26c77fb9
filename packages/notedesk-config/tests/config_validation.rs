use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use notedesk_config::{Backend, Config, Error};

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

fn sample_toml_with(edit: impl FnOnce(&mut toml::Table)) -> String {
	let mut value: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let root = value.as_table_mut().expect("Template config must be a table.");

	edit(root);

	toml::to_string(&value).expect("Failed to render template config.")
}

fn storage_table(root: &mut toml::Table) -> &mut toml::Table {
	root.get_mut("storage")
		.and_then(Value::as_table_mut)
		.expect("Template config must include [storage].")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("notedesk_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load_payload(payload: String) -> notedesk_config::Result<Config> {
	let path = write_temp_config(payload);
	let result = notedesk_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	result
}

fn expect_validation(payload: String, expected: &str) {
	let err = load_payload(payload).expect_err("Expected validation error.");
	let message = err.to_string();

	assert!(matches!(err, Error::Validation { .. }), "Unexpected error kind: {err:?}");
	assert!(message.contains(expected), "Unexpected error message: {message}");
}

#[test]
fn template_config_loads() {
	let cfg = load_payload(SAMPLE_CONFIG_TEMPLATE_TOML.to_string())
		.expect("Template config must be valid.");

	assert_eq!(cfg.service.http_bind, "127.0.0.1:8080");
	assert_eq!(cfg.storage.backend_kind(), Backend::Postgres);
	assert!(cfg.security.bind_localhost_only);

	let postgres = cfg.storage.postgres.expect("Template config must include postgres.");

	assert_eq!(postgres.pool_max_conns, 8);
}

#[test]
fn missing_file_reports_read_error() {
	let mut path = env::temp_dir();

	path.push("notedesk_config_test_does_not_exist.toml");

	let err = notedesk_config::load(&path).expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadConfig { .. }), "Unexpected error kind: {err:?}");
}

#[test]
fn malformed_toml_reports_parse_error() {
	let err = load_payload("[service\nhttp_bind = ".to_string()).expect_err("Expected parse error.");

	assert!(matches!(err, Error::ParseConfig { .. }), "Unexpected error kind: {err:?}");
}

#[test]
fn log_level_and_security_have_defaults() {
	let payload = sample_toml_with(|root| {
		root.remove("security");
		root.get_mut("service")
			.and_then(Value::as_table_mut)
			.expect("Template config must include [service].")
			.remove("log_level");
	});
	let cfg = load_payload(payload).expect("Config with defaults must be valid.");

	assert_eq!(cfg.service.log_level, "info");
	assert!(cfg.security.bind_localhost_only);
}

#[test]
fn http_bind_must_be_non_empty() {
	let payload = sample_toml_with(|root| {
		root.get_mut("service")
			.and_then(Value::as_table_mut)
			.expect("Template config must include [service].")
			.insert("http_bind".to_string(), Value::String("  ".to_string()));
	});

	expect_validation(payload, "service.http_bind must be non-empty.");
}

#[test]
fn backend_must_be_known() {
	let payload = sample_toml_with(|root| {
		storage_table(root).insert("backend".to_string(), Value::String("mongo".to_string()));
	});

	expect_validation(payload, "storage.backend must be one of postgres or memory.");
}

#[test]
fn backend_is_normalized() {
	let payload = sample_toml_with(|root| {
		storage_table(root).insert("backend".to_string(), Value::String(" Memory ".to_string()));
	});
	let cfg = load_payload(payload).expect("Normalized backend must be valid.");

	assert_eq!(cfg.storage.backend, "memory");
	assert_eq!(cfg.storage.backend_kind(), Backend::Memory);
}

#[test]
fn memory_backend_does_not_need_postgres() {
	let payload = sample_toml_with(|root| {
		let storage = storage_table(root);

		storage.insert("backend".to_string(), Value::String("memory".to_string()));
		storage.remove("postgres");
	});
	let cfg = load_payload(payload).expect("Memory backend without postgres must be valid.");

	assert!(cfg.storage.postgres.is_none());
}

#[test]
fn postgres_backend_requires_postgres_section() {
	let payload = sample_toml_with(|root| {
		storage_table(root).remove("postgres");
	});

	expect_validation(payload, "storage.postgres is required when storage.backend is postgres.");
}

#[test]
fn blank_dsn_is_rejected() {
	let payload = sample_toml_with(|root| {
		storage_table(root)
			.get_mut("postgres")
			.and_then(Value::as_table_mut)
			.expect("Template config must include [storage.postgres].")
			.insert("dsn".to_string(), Value::String(" ".to_string()));
	});

	expect_validation(payload, "storage.postgres.dsn must be non-empty.");
}

#[test]
fn pool_max_conns_must_be_positive() {
	let mut cfg: Config =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse test config.");

	if let Some(postgres) = cfg.storage.postgres.as_mut() {
		postgres.pool_max_conns = 0;
	}

	let err = notedesk_config::validate(&cfg).expect_err("Expected pool size validation error.");

	assert!(
		err.to_string().contains("storage.postgres.pool_max_conns must be greater than zero."),
		"Unexpected error message: {err}"
	);
}

fn seed_user(id: &str, username: &str) -> Value {
	let mut user = toml::Table::new();

	user.insert("id".to_string(), Value::String(id.to_string()));
	user.insert("username".to_string(), Value::String(username.to_string()));
	user.insert("roles".to_string(), Value::Array(vec![Value::String("Admin".to_string())]));

	Value::Table(user)
}

#[test]
fn seed_users_are_loaded_with_defaults() {
	let payload = sample_toml_with(|root| {
		storage_table(root).insert(
			"users".to_string(),
			Value::Array(vec![seed_user("6f1c1f5e-3f1a-4f43-9a55-1b2c3d4e5f60", "ada")]),
		);
	});
	let cfg = load_payload(payload).expect("Seed users must be valid.");

	assert_eq!(cfg.storage.users.len(), 1);
	assert_eq!(cfg.storage.users[0].username, "ada");
	assert_eq!(cfg.storage.users[0].roles, vec!["Admin".to_string()]);
	assert!(cfg.storage.users[0].active);
}

#[test]
fn seed_user_ids_must_be_unique() {
	let id = "6f1c1f5e-3f1a-4f43-9a55-1b2c3d4e5f60";
	let payload = sample_toml_with(|root| {
		storage_table(root).insert(
			"users".to_string(),
			Value::Array(vec![seed_user(id, "ada"), seed_user(id, "bob")]),
		);
	});

	expect_validation(payload, "storage.users contains duplicate id");
}

#[test]
fn seed_usernames_must_be_non_empty() {
	let payload = sample_toml_with(|root| {
		storage_table(root).insert(
			"users".to_string(),
			Value::Array(vec![seed_user("6f1c1f5e-3f1a-4f43-9a55-1b2c3d4e5f60", " ")]),
		);
	});

	expect_validation(payload, "must have a non-empty username.");
}
