use axum::{extract::{Path, Query, State}, Json};

use service::directory::domain::{ListQuery, Student, StudentInput, StudentPage};

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;

#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    params(
        ("search" = Option<String>, Query, description = "First-name substring"),
        ("sort" = Option<String>, Query, description = "firstName | age | email | address | city"),
        ("order" = Option<String>, Query, description = "asc | desc"),
        ("page" = Option<i64>, Query, description = "1-based page, default 1"),
        ("pageSize" = Option<i64>, Query, description = "Rows per page, default 10"),
    ),
    responses((status = 200, description = "One page of students", body = crate::openapi::StudentPageDoc))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<StudentPage>, JsonApiError> {
    Ok(Json(state.directory.list(q).await?))
}

/// A missing id answers 200 with `null`.
#[utoipa::path(get, path = "/students/{id}", tag = "students", params(("id" = i32, Path, description = "Student id")), responses((status = 200, description = "The student, or null", body = crate::openapi::StudentDoc)))]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<Student>>, JsonApiError> {
    Ok(Json(state.directory.get(id).await?))
}

#[utoipa::path(post, path = "/students", tag = "students", request_body = crate::openapi::StudentInputDoc, responses((status = 200, description = "Whole collection after insert", body = [crate::openapi::StudentDoc]), (status = 400, description = "Missing or malformed body", body = crate::openapi::MessageDoc)))]
pub async fn add(
    State(state): State<ServerState>,
    input: Option<Json<StudentInput>>,
) -> Result<Json<Vec<Student>>, JsonApiError> {
    Ok(Json(state.directory.add(input.map(|Json(i)| i)).await?))
}

#[utoipa::path(put, path = "/students/{id}", tag = "students", params(("id" = i32, Path, description = "Student id")), request_body = crate::openapi::StudentInputDoc, responses((status = 200, description = "Whole collection after update", body = [crate::openapi::StudentDoc]), (status = 400, description = "Student not found", body = crate::openapi::MessageDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    input: Option<Json<StudentInput>>,
) -> Result<Json<Vec<Student>>, JsonApiError> {
    Ok(Json(state.directory.update(id, input.map(|Json(i)| i)).await?))
}

#[utoipa::path(delete, path = "/students/{id}", tag = "students", params(("id" = i32, Path, description = "Student id")), responses((status = 200, description = "Remaining collection", body = [crate::openapi::StudentDoc]), (status = 400, description = "Student not found", body = crate::openapi::MessageDoc)))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Student>>, JsonApiError> {
    Ok(Json(state.directory.delete(id).await?))
}
