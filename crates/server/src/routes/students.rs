use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use sea_orm::DatabaseConnection;

use common::types::Message;
use service::student::{
    domain::{StudentInput, StudentRecord},
    repo::seaorm::SeaOrmStudentRepository,
    StudentService,
};

use crate::errors::ApiError;
use crate::extract::{IdPath, JsonBody};

#[derive(Clone)]
pub struct ServerState {
    pub students: Arc<StudentService<SeaOrmStudentRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmStudentRepository::new(db));
        Self { students: Arc::new(StudentService::new(repo)) }
    }
}

pub async fn register_student(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<StudentInput>,
) -> Result<(StatusCode, Json<StudentRecord>), ApiError> {
    let student = state.students.register(input).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn list_students(State(state): State<ServerState>) -> Result<Json<Vec<StudentRecord>>, ApiError> {
    Ok(Json(state.students.list_all().await?))
}

pub async fn get_student(
    State(state): State<ServerState>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<StudentRecord>, ApiError> {
    Ok(Json(state.students.get_by_id(id).await?))
}

pub async fn update_student(
    State(state): State<ServerState>,
    IdPath(id): IdPath<i32>,
    JsonBody(input): JsonBody<StudentInput>,
) -> Result<Json<StudentRecord>, ApiError> {
    Ok(Json(state.students.update_by_id(id, input).await?))
}

pub async fn delete_student(
    State(state): State<ServerState>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<Message>, ApiError> {
    state.students.delete_by_id(id).await?;
    Ok(Json(Message::new("Student deleted successfully!")))
}
