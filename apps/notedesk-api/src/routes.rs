use axum::{
	Json, Router,
	extract::{
		Path, State,
		rejection::{JsonRejection, PathRejection},
	},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;
use uuid::Uuid;

use notedesk_service::{
	CreateNoteRequest, DeleteNoteRequest, Error as ServiceError, Note, NoteAck, UpdateNoteRequest,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/notes", post(create_note).patch(update_note).delete(delete_note))
		// The acting user travels in the path until requests carry an authenticated identity.
		.route("/notes/{id}", get(list_notes))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn list_notes(
	State(state): State<AppState>,
	path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<Note>>, ApiError> {
	let Path(actor_id) = path?;
	let notes = state.service.list_notes(actor_id).await.map_err(ApiError::from_list_error)?;

	Ok(Json(notes))
}

async fn create_note(
	State(state): State<AppState>,
	payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NoteAck>), ApiError> {
	let Json(payload) = payload?;
	let response = state.service.create_note(payload).await?;

	Ok((StatusCode::CREATED, Json(response)))
}

async fn update_note(
	State(state): State<AppState>,
	payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<Json<NoteAck>, ApiError> {
	let Json(payload) = payload?;
	let response = state.service.update_note(payload).await?;

	Ok(Json(response))
}

async fn delete_note(
	State(state): State<AppState>,
	payload: Result<Json<DeleteNoteRequest>, JsonRejection>,
) -> Result<Json<NoteAck>, ApiError> {
	let Json(payload) = payload?;
	let response = state.service.delete_note(payload).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}

	/// Listing reports an unknown actor as unauthenticated rather than missing.
	fn from_list_error(err: ServiceError) -> Self {
		match err {
			ServiceError::NotFound { message } =>
				json_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message, None),
			err => err.into(),
		}
	}
}

pub fn json_error(
	status: StatusCode,
	code: &str,
	message: impl Into<String>,
	fields: Option<Vec<String>>,
) -> ApiError {
	ApiError::new(status, code, message, fields)
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::NotFound { message } =>
				json_error(StatusCode::NOT_FOUND, "NOT_FOUND", message, None),
			ServiceError::Forbidden { message } =>
				json_error(StatusCode::FORBIDDEN, "FORBIDDEN", message, None),
			ServiceError::InvalidData { message, fields } => json_error(
				StatusCode::BAD_REQUEST,
				"INVALID_DATA",
				message,
				(!fields.is_empty()).then_some(fields),
			),
			ServiceError::NoContent { message } =>
				json_error(StatusCode::BAD_REQUEST, "NO_CONTENT", message, None),
			ServiceError::Storage { message } => {
				tracing::error!(error = %message, "Storage failure while handling request.");

				json_error(
					StatusCode::INTERNAL_SERVER_ERROR,
					"STORAGE_ERROR",
					"Storage is unavailable.",
					None,
				)
			},
		}
	}
}

impl From<JsonRejection> for ApiError {
	fn from(rejection: JsonRejection) -> Self {
		json_error(StatusCode::BAD_REQUEST, "INVALID_DATA", rejection.body_text(), None)
	}
}

impl From<PathRejection> for ApiError {
	fn from(rejection: PathRejection) -> Self {
		json_error(StatusCode::BAD_REQUEST, "INVALID_DATA", rejection.body_text(), None)
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, fields: self.fields };

		(self.status, Json(body)).into_response()
	}
}
