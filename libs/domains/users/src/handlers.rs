use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::UserResult;
use crate::models::{CreateUserParams, UpdateUserParams, UserResponse};
use crate::repository::UserStore;
use crate::service::UserService;

/// Acknowledgement returned by a delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteUserResponse {
    #[schema(example = "user deleted")]
    pub msg: String,
}

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(
        schemas(UserResponse, CreateUserParams, UpdateUserParams, DeleteUserResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<S: UserStore + 'static>(service: UserService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(shared_service)
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<S: UserStore + 'static>(
    State(service): State<Arc<UserService<S>>>,
) -> UserResult<Json<Vec<UserResponse>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUserParams,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<S: UserStore + 'static>(
    State(service): State<Arc<UserService<S>>>,
    ValidatedJson(params): ValidatedJson<CreateUserParams>,
) -> UserResult<Json<UserResponse>> {
    let user = service.create_user(params).await?;
    Ok(Json(user))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<S: UserStore + 'static>(
    State(service): State<Arc<UserService<S>>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserResponse>> {
    let user = service.get_user(&id).await?;
    Ok(Json(user))
}

/// Update a user's names; absent fields are left unchanged
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ObjectId (24 hex characters)")
    ),
    request_body = UpdateUserParams,
    responses(
        (status = 200, description = "User after the update", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<S: UserStore + 'static>(
    State(service): State<Arc<UserService<S>>>,
    Path(id): Path<String>,
    ValidatedJson(params): ValidatedJson<UpdateUserParams>,
) -> UserResult<Json<UserResponse>> {
    let user = service.update_user(&id, params).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "User deleted (or was already absent)", body = DeleteUserResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<S: UserStore + 'static>(
    State(service): State<Arc<UserService<S>>>,
    Path(id): Path<String>,
) -> UserResult<Json<DeleteUserResponse>> {
    service.delete_user(&id).await?;
    Ok(Json(DeleteUserResponse {
        msg: "user deleted".to_string(),
    }))
}
